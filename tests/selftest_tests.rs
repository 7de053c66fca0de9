//! Self-testing mode: inert probes, meta-confirmation, and the misuse
//! contract.

use std::panic::{catch_unwind, AssertUnwindSafe};

use pramana::{Must, PramanaError, TestCase};
use pretty_assertions::assert_eq;

#[test]
fn correct_prediction_records_a_passing_meta_outcome() {
    let mut case = TestCase::new("meta");
    case.self_testing();
    let results = case.scope("assert_true on false", |s| {
        let probe = s.assert_true(false);
        s.confirm(Must::Fail, probe);
    });

    assert_eq!(results.len(), 1);
    assert!(results[0].passed());
    assert_eq!(results.tally().passed, 1);
}

#[test]
fn wrong_prediction_records_a_failing_meta_outcome() {
    let mut case = TestCase::new("meta");
    case.self_testing();
    let results = case.scope("wrong prediction", |s| {
        let probe = s.assert_true(false);
        s.confirm(Must::Pass, probe);
    });

    let meta = results[0].as_outcome().unwrap();
    assert!(!meta.passed);
    assert_eq!(meta.expected, "a passing outcome");
    assert_eq!(meta.actual, "a failing outcome");
}

#[test]
fn probes_are_inert_and_do_not_advance_the_sequence() {
    let mut case = TestCase::new("inert");
    case.self_testing();
    let results = case.scope("probes", |s| {
        s.assert_true(false);
        s.assert_eq(&1, &2);
        s.assert_true(true);
        let probe = s.assert_count(3, &[1, 2, 3]);
        s.confirm(Must::Pass, probe);
    });

    // Three failing probes left no trace; the one confirm holds #1.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].as_outcome().unwrap().case_no, 1);
    assert!(results[0].passed());
}

#[test]
fn wrong_prediction_trips_suppression_for_later_confirms() {
    let mut case = TestCase::new("suppression");
    case.self_testing();
    let results = case.scope("cascading confirms", |s| {
        let probe = s.assert_true(true);
        s.confirm(Must::Fail, probe);
        let probe = s.assert_true(true);
        s.confirm(Must::Pass, probe);
    });

    assert_eq!(results.len(), 2);
    assert!(!results[0].passed());
    assert!(results[1].is_fault());
}

#[test]
fn probing_a_suppressed_scope_yields_a_fault_without_recording() {
    let mut case = TestCase::new("observe-suppression");
    case.self_testing();
    let results = case.scope("probe after trip", |s| {
        let probe = s.assert_true(true);
        s.confirm(Must::Fail, probe);

        // The scope is now suppressed; a probe observes that as a fault
        // but nothing new is appended.
        let probe = s.assert_true(true);
        s.confirm(Must::Fault, probe);
    });

    assert_eq!(results.len(), 2);
    assert!(results[1].is_fault());
    assert_eq!(results.tally().errors, 1);
}

#[test]
fn probes_can_wrap_panic_predicates() {
    let mut case = TestCase::new("panic-probes");
    case.self_testing();
    let results = case.scope("probe a panic predicate", |s| {
        let probe = s.assert_panics_with("boom", || panic!("boom"));
        s.confirm(Must::Pass, probe);
        let probe = s.assert_panics_with("boom", || panic!("bang"));
        s.confirm(Must::Fail, probe);
    });

    assert_eq!(results.tally().passed, 2);
}

#[test]
fn confirm_outside_self_testing_mode_panics_with_the_crate_error() {
    let mut case = TestCase::new("misuse");
    let caught = catch_unwind(AssertUnwindSafe(|| {
        case.scope("standard mode", |s| {
            let probe = s.assert_true(true);
            s.confirm(Must::Pass, probe);
        });
    }));

    let payload = caught.expect_err("misuse must cross the scope boundary");
    let error = payload
        .downcast_ref::<PramanaError>()
        .expect("payload carries the crate error");
    assert!(matches!(error, PramanaError::SelfTestRequired));
}

#[test]
fn misuse_is_not_recorded_as_a_test_result() {
    let mut case = TestCase::new("misuse-results");
    let _ = catch_unwind(AssertUnwindSafe(|| {
        case.scope("standard mode", |s| {
            let probe = s.assert_true(true);
            s.confirm(Must::Pass, probe);
        });
    }));

    // The violation escaped instead of turning into data; the aborted
    // scope contributed nothing to the case results.
    assert_eq!(case.results().len(), 0);
}
