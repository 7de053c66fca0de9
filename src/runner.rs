//! Sequential execution of registered test cases.
//!
//! Cases run in registration order, each against a fresh [`TestCase`] built
//! from the run's settings, and their results concatenate into one
//! run-level [`ResultSet`]. There is no ordering ambiguity and no shared
//! state between cases.

use crate::case::TestCase;
use crate::config::Settings;
use crate::results::ResultSet;

type CaseBody = Box<dyn FnOnce(&mut TestCase)>;

/// Registers named case bodies and runs them in order.
#[derive(Default)]
pub struct TestRunner {
    settings: Settings,
    cases: Vec<(String, CaseBody)>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            cases: Vec::new(),
        }
    }

    /// Registers a test case body under a name.
    pub fn register(&mut self, name: &str, body: impl FnOnce(&mut TestCase) + 'static) -> &mut Self {
        self.cases.push((name.to_string(), Box::new(body)));
        self
    }

    /// Runs every registered case and returns the concatenated results.
    pub fn run(self) -> ResultSet {
        let mut results = ResultSet::new();
        for (name, body) in self.cases {
            let mut case = TestCase::with_settings(&name, self.settings);
            body(&mut case);
            results.append(case.into_results());
        }
        results
    }
}
