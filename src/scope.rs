//! The scope controller: lifecycle and failure propagation for one named
//! group of assertions.
//!
//! A scope moves through three states. `begin` makes it Active, a failed
//! assertion under the stop-after-first-failure policy moves it to
//! Suppressed, and `end` returns it to NotStarted while draining the
//! recorded entries. Evaluations are supplied lazily so a scope that is no
//! longer accepting assertions never runs the predicate at all.

use crate::assert::Evaluation;
use crate::config::Settings;
use crate::outcome::{Entry, Fault, Outcome};
use crate::results::ResultSet;
use crate::selftest::Mode;

// ============================================================================
// SCOPE STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeState {
    /// No scope is open; recording is a fault.
    NotStarted,
    /// Assertions are being accepted and evaluated.
    Active,
    /// A previous assertion failed and the settings asked to stop; further
    /// assertions are recorded as suppression faults without evaluating.
    Suppressed,
}

/// Controller for the currently open assertion scope.
///
/// All assertion predicates are methods on this handle (see [`crate::assert`]),
/// and [`Scope::record`] is public so custom predicates can plug into the
/// same state machine.
#[derive(Debug)]
pub struct Scope {
    description: String,
    case_no: u16,
    entries: Vec<Entry>,
    state: ScopeState,
    settings: Settings,
    mode: Mode,
}

impl Scope {
    pub(crate) fn new(settings: Settings, mode: Mode) -> Self {
        Self {
            description: String::new(),
            case_no: 0,
            entries: Vec::new(),
            state: ScopeState::NotStarted,
            settings,
            mode,
        }
    }

    /// The description given to `begin`.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Opens a new scope: resets the sequence counter, clears any recorded
    /// entries, and starts accepting assertions.
    pub fn begin(&mut self, description: &str) {
        self.case_no = 0;
        self.entries.clear();
        self.description = description.to_string();
        self.state = ScopeState::Active;
    }

    /// Closes the scope and hands over its finalized entry list.
    pub fn end(&mut self) -> ResultSet {
        self.state = ScopeState::NotStarted;
        self.entries.drain(..).collect()
    }

    // ========================================================================
    // RECORDING
    // ========================================================================

    /// Routes one assertion through the scope's state machine.
    ///
    /// When the scope is Active the evaluation runs and an outcome is
    /// produced with the next sequence number; a failed outcome trips the
    /// suppression transition when the settings ask for it. When the scope
    /// is not Active, the evaluation is skipped entirely and a suppression
    /// fault is produced instead, so skipped assertions stay visible in the
    /// results.
    ///
    /// In standard mode the produced entry is appended and scope state
    /// advances. In self-testing mode the entry is returned without being
    /// appended and without touching the counter or the state; only
    /// [`Scope::confirm`] records (see [`crate::selftest`]).
    ///
    /// [`Scope::confirm`]: crate::Scope::confirm
    pub fn record(&mut self, eval: impl FnOnce() -> Evaluation) -> Entry {
        match self.mode {
            Mode::Standard => self.commit(eval),
            Mode::SelfTesting => self.probe(eval),
        }
    }

    /// The standard recording path: append, number, and propagate failure.
    /// `confirm` re-enters here regardless of mode.
    pub(crate) fn commit(&mut self, eval: impl FnOnce() -> Evaluation) -> Entry {
        if self.state != ScopeState::Active {
            let entry = Entry::Fault(Fault::suppressed());
            self.entries.push(entry.clone());
            return entry;
        }

        let eval = eval();
        if !eval.passed && self.settings.stop_after_first_failure {
            self.state = ScopeState::Suppressed;
        }

        self.case_no += 1;
        let entry = Entry::Outcome(Outcome {
            passed: eval.passed,
            case_no: self.case_no,
            description: self.description.clone(),
            expected: eval.expected,
            actual: eval.actual,
            note: eval.note,
        });
        self.entries.push(entry.clone());
        entry
    }

    /// The inert evaluation path for self-testing mode: builds the entry the
    /// standard path would have produced, but leaves the scope untouched.
    fn probe(&mut self, eval: impl FnOnce() -> Evaluation) -> Entry {
        if self.state != ScopeState::Active {
            return Entry::Fault(Fault::suppressed());
        }

        let eval = eval();
        Entry::Outcome(Outcome {
            passed: eval.passed,
            case_no: self.case_no + 1,
            description: self.description.clone(),
            expected: eval.expected,
            actual: eval.actual,
            note: eval.note,
        })
    }

    /// Attaches descriptive text to the most recently recorded entry,
    /// replacing the predicate's auto-generated template. No-op while the
    /// scope has produced no entries.
    pub fn note(&mut self, text: &str) -> &mut Self {
        if let Some(last) = self.entries.last_mut() {
            last.set_note(text);
        }
        self
    }
}
