//! Truth tables and diagnostic rendering for the value predicates.

use std::collections::HashMap;

use pramana::{Describe, Entry, TestCase};
use pretty_assertions::assert_eq;
use test_case::test_case;

/// Runs one assertion in a fresh scope and returns its entry.
fn single(body: impl FnOnce(&mut pramana::Scope) -> Entry) -> Entry {
    let mut case = TestCase::new("probe");
    let mut recorded = None;
    case.scope("single", |s| {
        recorded = Some(body(s));
    });
    recorded.unwrap()
}

#[test_case(2, 2, true; "equal values pass")]
#[test_case(2, 3, false; "differing values fail")]
fn equality(expected: i32, actual: i32, passes: bool) {
    let entry = single(|s| s.assert_eq(&expected, &actual));
    assert_eq!(entry.passed(), passes);
}

#[test_case("left", "right", true; "different strings pass")]
#[test_case("same", "same", false; "identical strings fail")]
fn inequality(a: &str, b: &str, passes: bool) {
    let entry = single(|s| s.assert_ne(a, b));
    assert_eq!(entry.passed(), passes);
}

#[test_case(3, 2, true; "three outranks two")]
#[test_case(2, 2, false; "equal is not greater")]
#[test_case(1, 2, false; "one is below two")]
fn greater_than(actual: i32, threshold: i32, passes: bool) {
    let entry = single(|s| s.assert_gt(&actual, &threshold));
    assert_eq!(entry.passed(), passes);
}

#[test_case(2, 2, true; "equal passes at least")]
#[test_case(1, 2, false; "below fails at least")]
fn greater_or_equal(actual: i32, threshold: i32, passes: bool) {
    let entry = single(|s| s.assert_ge(&actual, &threshold));
    assert_eq!(entry.passed(), passes);
}

#[test_case(1, 2, true; "one is under two")]
#[test_case(2, 2, false; "equal is not less")]
fn less_than(actual: i32, threshold: i32, passes: bool) {
    let entry = single(|s| s.assert_lt(&actual, &threshold));
    assert_eq!(entry.passed(), passes);
}

#[test_case(2, 2, true; "equal passes at most")]
#[test_case(3, 2, false; "above fails at most")]
fn less_or_equal(actual: i32, threshold: i32, passes: bool) {
    let entry = single(|s| s.assert_le(&actual, &threshold));
    assert_eq!(entry.passed(), passes);
}

#[test]
fn booleans_render_both_sides() {
    let entry = single(|s| s.assert_true(false));
    let outcome = entry.as_outcome().unwrap();
    assert!(!outcome.passed);
    assert_eq!(outcome.expected, "true");
    assert_eq!(outcome.actual, "false");

    assert!(single(|s| s.assert_false(false)).passed());
}

#[test]
fn count_mismatch_reports_both_sizes() {
    let entry = single(|s| s.assert_count(2, &[1, 2, 3]));
    let outcome = entry.as_outcome().unwrap();
    assert!(!outcome.passed);
    assert_eq!(outcome.expected, "2");
    assert_eq!(outcome.actual, "3");
}

#[test]
fn count_accepts_maps_and_strings() {
    let mut map = HashMap::new();
    map.insert("k", 1);
    assert!(single(|s| s.assert_count(1, &map)).passed());
    assert!(single(|s| s.assert_count(5, "hello")).passed());
}

#[test]
fn emptiness() {
    let none: Vec<i32> = Vec::new();
    assert!(single(|s| s.assert_empty(&none)).passed());

    let entry = single(|s| s.assert_empty(&vec![1]));
    let outcome = entry.as_outcome().unwrap();
    assert!(!outcome.passed);
    assert_eq!(outcome.actual, "1");
}

#[test_case("needle", "haystack with needle", true; "substring present")]
#[test_case("Needle", "haystack with needle", false; "case matters")]
#[test_case("missing", "haystack", false; "substring absent")]
fn containment(needle: &str, haystack: &str, passes: bool) {
    let entry = single(|s| s.assert_contains(needle, haystack));
    assert_eq!(entry.passed(), passes);
}

#[test_case("NEEDLE", "haystack with needle", true; "case folded")]
#[test_case("missing", "haystack", false; "still absent")]
fn containment_ignoring_case(needle: &str, haystack: &str, passes: bool) {
    let entry = single(|s| s.assert_contains_ci(needle, haystack));
    assert_eq!(entry.passed(), passes);
}

#[test]
fn pattern_must_cover_the_whole_subject() {
    assert!(single(|s| s.assert_matches(r"\d{3}", "123")).passed());
    assert!(!single(|s| s.assert_matches(r"\d{3}", "a123")).passed());
    assert!(!single(|s| s.assert_matches("bc", "abc")).passed());
}

#[test]
fn invalid_pattern_becomes_a_failed_outcome() {
    let entry = single(|s| s.assert_matches("(unclosed", "anything"));
    let outcome = entry.as_outcome().unwrap();
    assert!(!outcome.passed);
    assert!(outcome.note.starts_with("invalid pattern:"));
    assert_eq!(outcome.expected, "(unclosed");
}

#[test]
fn unsupported_operands_render_as_empty_text() {
    #[derive(PartialEq)]
    struct Opaque(u8);
    impl Describe for Opaque {}

    let entry = single(|s| s.assert_eq(&Opaque(1), &Opaque(2)));
    let outcome = entry.as_outcome().unwrap();
    assert!(!outcome.passed);
    assert_eq!(outcome.expected, "");
    assert_eq!(outcome.actual, "");
}

#[test]
fn auto_generated_notes_follow_the_template() {
    let entry = single(|s| s.assert_eq(&2, &3));
    assert_eq!(entry.note(), "Assert that 2 equals 3");

    let entry = single(|s| s.assert_gt(&5, &4));
    assert_eq!(entry.note(), "Assert that 5 is greater than 4");
}
