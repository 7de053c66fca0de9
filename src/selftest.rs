//! Self-testing support: exercising the library's own predicates and
//! asserting on their outcomes with the same engine.
//!
//! In self-testing mode a predicate call is a *probe*: it evaluates and
//! returns the entry it would have recorded, but leaves the scope untouched.
//! Only [`Scope::confirm`] records, by wrapping a probe in a meta-assertion
//! that checks the probe against a [`Must`] prediction. The meta-outcome
//! goes through the standard recording path, so it takes the next sequence
//! number and a wrong prediction trips the stop-after-failure transition
//! like any other failed assertion.

use std::panic;

use crate::error::PramanaError;
use crate::outcome::Entry;
use crate::scope::Scope;

/// Execution mode of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every recorded assertion counts toward tallies.
    #[default]
    Standard,
    /// Predicate calls are inert probes; only `confirm` records.
    SelfTesting,
}

/// Prediction for a probed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Must {
    /// The probe must be an outcome that passed.
    Pass,
    /// The probe must be an outcome that failed.
    Fail,
    /// The probe must be a fault, for example from suppression.
    Fault,
}

impl Must {
    fn satisfied_by(self, probe: &Entry) -> bool {
        match (self, probe) {
            (Must::Pass, Entry::Outcome(o)) => o.passed,
            (Must::Fail, Entry::Outcome(o)) => !o.passed,
            (Must::Fault, Entry::Fault(_)) => true,
            _ => false,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Must::Pass => "a passing outcome",
            Must::Fail => "a failing outcome",
            Must::Fault => "a fault entry",
        }
    }
}

fn describe_probe(probe: &Entry) -> &'static str {
    match probe {
        Entry::Outcome(o) if o.passed => "a passing outcome",
        Entry::Outcome(_) => "a failing outcome",
        Entry::Fault(_) => "a fault entry",
    }
}

impl Scope {
    /// Records one meta-outcome asserting that the probed entry matches the
    /// prediction.
    ///
    /// Calling this outside self-testing mode is a contract violation and
    /// panics with a [`PramanaError::SelfTestRequired`] payload, which the
    /// scope boundary resumes rather than converting into a test result.
    pub fn confirm(&mut self, must: Must, probe: Entry) -> Entry {
        if self.mode() != Mode::SelfTesting {
            panic::panic_any(PramanaError::SelfTestRequired);
        }

        self.commit(|| crate::assert::Evaluation {
            passed: must.satisfied_by(&probe),
            expected: must.describe().to_string(),
            actual: describe_probe(&probe).to_string(),
            note: format!("Confirm that the probe produced {}", must.describe()),
        })
    }
}

#[cfg(test)]
mod must_tests {
    use super::*;
    use crate::outcome::{Fault, Outcome};

    fn outcome(passed: bool) -> Entry {
        Entry::Outcome(Outcome {
            passed,
            case_no: 1,
            description: String::new(),
            expected: String::new(),
            actual: String::new(),
            note: String::new(),
        })
    }

    #[test]
    fn predictions_match_their_variant_only() {
        assert!(Must::Pass.satisfied_by(&outcome(true)));
        assert!(!Must::Pass.satisfied_by(&outcome(false)));
        assert!(Must::Fail.satisfied_by(&outcome(false)));
        assert!(!Must::Fail.satisfied_by(&outcome(true)));
        assert!(Must::Fault.satisfied_by(&Entry::Fault(Fault::suppressed())));
        assert!(!Must::Fault.satisfied_by(&outcome(false)));
        assert!(!Must::Pass.satisfied_by(&Entry::Fault(Fault::suppressed())));
    }
}
