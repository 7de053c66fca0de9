//! The outcome model: the data recorded for every assertion evaluation.
//!
//! Every assertion produces exactly one [`Entry`], which is either an
//! evaluated [`Outcome`] (the predicate ran and passed or failed) or a
//! [`Fault`] (the assertion could not be performed). Consumers match on the
//! variant exhaustively; there is no downcasting anywhere in the pipeline.

use serde::{Deserialize, Serialize};

/// The recorded result of one evaluated assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the predicate held.
    pub passed: bool,
    /// The assertion's number within its scope, starting at 1. Useful for
    /// identifying exactly which assertion failed when the descriptions
    /// alone are ambiguous.
    pub case_no: u16,
    /// The description of the scope this assertion ran under.
    pub description: String,
    /// Expected and actual operands, string-rendered for display.
    pub expected: String,
    pub actual: String,
    /// Additional text attached to this assertion, either the predicate's
    /// auto-generated template or a replacement via [`Scope::note`].
    ///
    /// [`Scope::note`]: crate::Scope::note
    pub note: String,
}

/// Classifies why an assertion could not be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// A previous assertion in the same scope failed under the
    /// stop-after-first-failure policy, so this one was skipped without
    /// evaluating its predicate.
    PriorAssertionFailed,
    /// Test code panicked outside an assertion's own panic-catching, and the
    /// panic was converted into data at the scope boundary.
    PanicCaught,
}

/// Recorded when an assertion could not be performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    pub kind: FaultKind,
    pub message: String,
    pub note: String,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            note: String::new(),
        }
    }

    /// A fault with no message, used for suppressed assertions.
    pub fn suppressed() -> Self {
        Self::new(FaultKind::PriorAssertionFailed, "")
    }
}

/// One recorded entry in a result list: either an evaluated outcome or a
/// fault. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Outcome(Outcome),
    Fault(Fault),
}

impl Entry {
    /// True when this entry is an evaluated outcome that passed.
    pub fn passed(&self) -> bool {
        matches!(self, Entry::Outcome(o) if o.passed)
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Entry::Fault(_))
    }

    pub fn as_outcome(&self) -> Option<&Outcome> {
        match self {
            Entry::Outcome(o) => Some(o),
            Entry::Fault(_) => None,
        }
    }

    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Entry::Outcome(_) => None,
            Entry::Fault(f) => Some(f),
        }
    }

    /// The attached note, wherever the active variant keeps it.
    pub fn note(&self) -> &str {
        match self {
            Entry::Outcome(o) => &o.note,
            Entry::Fault(f) => &f.note,
        }
    }

    /// Replaces the note on the active variant. The rest of the entry is
    /// untouched, so an outcome keeps its values and a fault its message.
    pub fn set_note(&mut self, text: impl Into<String>) {
        match self {
            Entry::Outcome(o) => o.note = text.into(),
            Entry::Fault(f) => f.note = text.into(),
        }
    }
}
