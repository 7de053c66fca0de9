//! The assertion engine: predicate evaluators exposed as methods on
//! [`Scope`].
//!
//! Every predicate follows the same contract: evaluate the operands,
//! string-render them for diagnostic display, attach an auto-generated
//! description, and route the result through [`Scope::record`]. The
//! recorded entry is returned so self-tests can confirm it.
//!
//! ## Predicates provided
//!
//! - **Equality**: `assert_eq`, `assert_ne`
//! - **Ordering**: `assert_gt`, `assert_ge`, `assert_lt`, `assert_le`
//! - **Boolean**: `assert_true`, `assert_false`
//! - **Collections**: `assert_count`, `assert_empty`
//! - **Strings**: `assert_contains`, `assert_contains_ci`, `assert_matches`
//! - **Panics**: see [`panics`]

pub mod panics;

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::outcome::Entry;
use crate::scope::Scope;

// ============================================================================
// EVALUATION CONTRACT
// ============================================================================

/// The raw result of one predicate evaluation, before the scope controller
/// turns it into a numbered outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub passed: bool,
    /// Expected and actual operands, string-rendered for display.
    pub expected: String,
    pub actual: String,
    /// Auto-generated description of the assertion, replaceable afterwards
    /// via [`Scope::note`].
    pub note: String,
}

/// String rendering for assertion operands.
///
/// Types with a natural textual form override [`Describe::describe`];
/// anything else can take the default, which renders as empty text rather
/// than failing the assertion over a display concern.
pub trait Describe {
    fn describe(&self) -> String {
        String::new()
    }
}

impl Describe for String {
    fn describe(&self) -> String {
        self.clone()
    }
}

impl Describe for str {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describe for bool {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describe for char {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

macro_rules! describe_via_display {
    ($($ty:ty),* $(,)?) => {
        $(impl Describe for $ty {
            fn describe(&self) -> String {
                self.to_string()
            }
        })*
    };
}

describe_via_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Element counting for size and emptiness predicates.
pub trait Countable {
    fn count(&self) -> usize;
}

impl<T> Countable for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T> Countable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for std::collections::VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Countable for HashMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Countable for std::collections::BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for std::collections::HashSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl Countable for str {
    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Countable for String {
    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl<T: Countable + ?Sized> Countable for &T {
    fn count(&self) -> usize {
        (**self).count()
    }
}

// ============================================================================
// PATTERN CACHE
// ============================================================================

static PATTERN_CACHE: Lazy<Mutex<HashMap<String, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Matches `subject` against `pattern` with full-match semantics: the
/// pattern must cover the entire subject. Compiled patterns are cached
/// process-wide, keyed by the unanchored source text.
pub(crate) fn full_match(pattern: &str, subject: &str) -> Result<bool, regex::Error> {
    let mut cache = PATTERN_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let regex = match cache.entry(pattern.to_string()) {
        MapEntry::Occupied(slot) => slot.into_mut(),
        MapEntry::Vacant(slot) => {
            let anchored = format!("^(?:{pattern})$");
            slot.insert(Regex::new(&anchored)?)
        }
    };
    Ok(regex.is_match(subject))
}

// ============================================================================
// VALUE PREDICATES
// ============================================================================

impl Scope {
    /// Assert that a value is true.
    pub fn assert_true(&mut self, actual: bool) -> Entry {
        self.record(|| Evaluation {
            passed: actual,
            expected: "true".to_string(),
            actual: actual.to_string(),
            note: "Assert that the value is true".to_string(),
        })
    }

    /// Assert that a value is false.
    pub fn assert_false(&mut self, actual: bool) -> Entry {
        self.record(|| Evaluation {
            passed: !actual,
            expected: "false".to_string(),
            actual: actual.to_string(),
            note: "Assert that the value is false".to_string(),
        })
    }

    /// Assert that two values are equal.
    pub fn assert_eq<T>(&mut self, expected: &T, actual: &T) -> Entry
    where
        T: PartialEq + Describe + ?Sized,
    {
        self.record(|| {
            let (expected_s, actual_s) = (expected.describe(), actual.describe());
            Evaluation {
                passed: expected == actual,
                note: format!("Assert that {expected_s} equals {actual_s}"),
                expected: expected_s,
                actual: actual_s,
            }
        })
    }

    /// Assert that two values are not equal.
    pub fn assert_ne<T>(&mut self, expected: &T, actual: &T) -> Entry
    where
        T: PartialEq + Describe + ?Sized,
    {
        self.record(|| {
            let (expected_s, actual_s) = (expected.describe(), actual.describe());
            Evaluation {
                passed: expected != actual,
                note: format!("Assert that {expected_s} differs from {actual_s}"),
                expected: format!("not {expected_s}"),
                actual: actual_s,
            }
        })
    }

    /// Assert that `actual > threshold`.
    pub fn assert_gt<T>(&mut self, actual: &T, threshold: &T) -> Entry
    where
        T: PartialOrd + Describe + ?Sized,
    {
        self.ordering(actual, threshold, |a, t| a > t, ">", "greater than")
    }

    /// Assert that `actual >= threshold`.
    pub fn assert_ge<T>(&mut self, actual: &T, threshold: &T) -> Entry
    where
        T: PartialOrd + Describe + ?Sized,
    {
        self.ordering(actual, threshold, |a, t| a >= t, ">=", "at least")
    }

    /// Assert that `actual < threshold`.
    pub fn assert_lt<T>(&mut self, actual: &T, threshold: &T) -> Entry
    where
        T: PartialOrd + Describe + ?Sized,
    {
        self.ordering(actual, threshold, |a, t| a < t, "<", "less than")
    }

    /// Assert that `actual <= threshold`.
    pub fn assert_le<T>(&mut self, actual: &T, threshold: &T) -> Entry
    where
        T: PartialOrd + Describe + ?Sized,
    {
        self.ordering(actual, threshold, |a, t| a <= t, "<=", "at most")
    }

    fn ordering<T>(
        &mut self,
        actual: &T,
        threshold: &T,
        compare: impl FnOnce(&T, &T) -> bool,
        op: &str,
        word: &str,
    ) -> Entry
    where
        T: Describe + ?Sized,
    {
        self.record(|| {
            let (actual_s, threshold_s) = (actual.describe(), threshold.describe());
            Evaluation {
                passed: compare(actual, threshold),
                note: format!("Assert that {actual_s} is {word} {threshold_s}"),
                expected: format!("{op} {threshold_s}"),
                actual: actual_s,
            }
        })
    }

    /// Assert that a collection holds exactly `expected` elements.
    pub fn assert_count<C>(&mut self, expected: usize, subject: &C) -> Entry
    where
        C: Countable + ?Sized,
    {
        self.record(|| {
            let count = subject.count();
            Evaluation {
                passed: count == expected,
                expected: expected.to_string(),
                actual: count.to_string(),
                note: format!("Assert that the collection holds {expected} elements"),
            }
        })
    }

    /// Assert that a collection holds no elements.
    pub fn assert_empty<C>(&mut self, subject: &C) -> Entry
    where
        C: Countable + ?Sized,
    {
        self.record(|| {
            let count = subject.count();
            Evaluation {
                passed: count == 0,
                expected: "0".to_string(),
                actual: count.to_string(),
                note: "Assert that the collection is empty".to_string(),
            }
        })
    }

    /// Assert that `haystack` contains `needle`, case-sensitively.
    pub fn assert_contains(&mut self, needle: &str, haystack: &str) -> Entry {
        self.record(|| Evaluation {
            passed: haystack.contains(needle),
            expected: needle.to_string(),
            actual: haystack.to_string(),
            note: format!("Assert that \"{haystack}\" contains \"{needle}\""),
        })
    }

    /// Assert that `haystack` contains `needle`, ignoring case.
    pub fn assert_contains_ci(&mut self, needle: &str, haystack: &str) -> Entry {
        self.record(|| Evaluation {
            passed: haystack.to_lowercase().contains(&needle.to_lowercase()),
            expected: needle.to_string(),
            actual: haystack.to_string(),
            note: format!("Assert that \"{haystack}\" contains \"{needle}\" (case-insensitive)"),
        })
    }

    /// Assert that `subject` matches `pattern` in its entirety.
    ///
    /// An invalid pattern is recovered as a failed outcome carrying the
    /// compile error in its note, never a panic.
    pub fn assert_matches(&mut self, pattern: &str, subject: &str) -> Entry {
        self.record(|| match full_match(pattern, subject) {
            Ok(passed) => Evaluation {
                passed,
                expected: pattern.to_string(),
                actual: subject.to_string(),
                note: format!("Assert that \"{subject}\" matches the pattern \"{pattern}\""),
            },
            Err(err) => Evaluation {
                passed: false,
                expected: pattern.to_string(),
                actual: subject.to_string(),
                note: format!("invalid pattern: {err}"),
            },
        })
    }
}
