//! Panic-testing predicates.
//!
//! Each predicate wraps an arbitrary zero-argument operation in
//! `catch_unwind` and turns whatever it raises into data. Nothing escapes
//! the assertion engine except the typed misuse panic, which is always
//! resumed. A silent panic hook is installed around the invocation so
//! probed panics do not spray backtrace noise over the report; panics that
//! reach the scope boundary instead keep the default hook output.
//!
//! Classification order for a typed expectation:
//!
//! 1. the desired payload type was caught: pass;
//! 2. a plain message payload was caught instead: fail, reporting the
//!    expected type name against the caught message;
//! 3. an unrecognized payload was caught: fail with an "unknown" marker;
//! 4. nothing was raised: fail with a "no panic" marker.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::PramanaError;
use crate::outcome::Entry;
use crate::scope::Scope;

use super::{full_match, Evaluation};

/// Marker reported when the wrapped operation returned normally.
pub const NO_PANIC: &str = "<no panic raised>";
/// Marker reported when a caught payload carries no recognizable text.
pub const UNKNOWN_PAYLOAD: &str = "<unknown panic payload>";

// ============================================================================
// CAPTURE
// ============================================================================

/// Runs the operation under `catch_unwind` with a silent panic hook,
/// restoring the previous hook afterwards. Returns the payload when the
/// operation panicked. A misuse payload is resumed, never captured.
pub(crate) fn capture(op: impl FnOnce()) -> Option<Box<dyn Any + Send>> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(op));
    panic::set_hook(previous);

    match result {
        Ok(()) => None,
        Err(payload) if payload.is::<PramanaError>() => panic::resume_unwind(payload),
        Err(payload) => Some(payload),
    }
}

/// Extracts the message from a panic payload, when it carries one.
pub(crate) fn payload_text(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(text) = payload.downcast_ref::<&str>() {
        return Some(text);
    }
    payload.downcast_ref::<String>().map(String::as_str)
}

// ============================================================================
// PANIC PREDICATES
// ============================================================================

impl Scope {
    /// Assert that the operation panics, with any payload.
    pub fn assert_panics(&mut self, op: impl FnOnce()) -> Entry {
        self.record(|| {
            let caught = capture(op);
            Evaluation {
                passed: caught.is_some(),
                expected: "a panic".to_string(),
                actual: match caught {
                    Some(ref payload) => payload_text(payload.as_ref())
                        .unwrap_or(UNKNOWN_PAYLOAD)
                        .to_string(),
                    None => NO_PANIC.to_string(),
                },
                note: "Assert that the operation panics".to_string(),
            }
        })
    }

    /// Assert that the operation panics with a payload of type `A`.
    pub fn assert_panics_as<A: Any>(&mut self, op: impl FnOnce()) -> Entry {
        self.record(|| {
            let expected = std::any::type_name::<A>().to_string();
            let (passed, actual) = match capture(op) {
                None => (false, NO_PANIC.to_string()),
                Some(payload) => {
                    if payload.is::<A>() {
                        (true, expected.clone())
                    } else if let Some(text) = payload_text(payload.as_ref()) {
                        (false, format!("panic with message: {text}"))
                    } else {
                        (false, UNKNOWN_PAYLOAD.to_string())
                    }
                }
            };
            Evaluation {
                passed,
                note: format!("Assert that the operation panics with a {expected} payload"),
                expected,
                actual,
            }
        })
    }

    /// Assert that the operation panics with exactly the given message.
    pub fn assert_panics_with(&mut self, expected: &str, op: impl FnOnce()) -> Entry {
        self.message_predicate(expected, op, "panics with the message", |caught, wanted| {
            caught == wanted
        })
    }

    /// Assert that the operation panics with a message containing the given
    /// substring.
    pub fn assert_panic_contains(&mut self, needle: &str, op: impl FnOnce()) -> Entry {
        self.message_predicate(needle, op, "panic message contains", |caught, wanted| {
            caught.contains(wanted)
        })
    }

    /// Assert that the operation panics with a message matching the pattern
    /// in its entirety.
    ///
    /// An empty caught message fails outright without attempting the match;
    /// so does an invalid pattern, with the compile error in the note.
    pub fn assert_panic_matches(&mut self, pattern: &str, op: impl FnOnce()) -> Entry {
        self.record(|| {
            let note = format!("Assert that the panic message matches \"{pattern}\"");
            let (passed, actual, note) = match capture(op) {
                None => (false, NO_PANIC.to_string(), note),
                Some(payload) => match payload_text(payload.as_ref()) {
                    None => (false, UNKNOWN_PAYLOAD.to_string(), note),
                    Some(caught) if caught.is_empty() => (
                        false,
                        String::new(),
                        "panic message was empty; pattern not attempted".to_string(),
                    ),
                    Some(caught) => match full_match(pattern, caught) {
                        Ok(passed) => (passed, caught.to_string(), note),
                        Err(err) => (false, caught.to_string(), format!("invalid pattern: {err}")),
                    },
                },
            };
            Evaluation {
                passed,
                expected: pattern.to_string(),
                actual,
                note,
            }
        })
    }

    fn message_predicate(
        &mut self,
        expected: &str,
        op: impl FnOnce(),
        verb: &str,
        check: impl FnOnce(&str, &str) -> bool,
    ) -> Entry {
        self.record(|| {
            let (passed, actual) = match capture(op) {
                None => (false, NO_PANIC.to_string()),
                Some(payload) => match payload_text(payload.as_ref()) {
                    Some(caught) => (check(caught, expected), caught.to_string()),
                    None => (false, UNKNOWN_PAYLOAD.to_string()),
                },
            };
            Evaluation {
                passed,
                expected: expected.to_string(),
                actual,
                note: format!("Assert that the operation {verb} \"{expected}\""),
            }
        })
    }
}
