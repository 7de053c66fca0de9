//! A test case: a named collection of assertion scopes.
//!
//! Each case owns its own scope controller and result accumulator; nothing
//! is shared across cases. The scope boundary is also the recovery
//! boundary: a panic raised by test code inside a scope body is caught and
//! converted into a fault entry, so one broken scope never aborts the run.
//! The one exception is the typed misuse panic, which is resumed.

use std::panic::{self, AssertUnwindSafe};

use crate::assert::panics::{payload_text, UNKNOWN_PAYLOAD};
use crate::config::Settings;
use crate::error::PramanaError;
use crate::outcome::{Entry, Fault, FaultKind};
use crate::results::{ResultSet, Tally};
use crate::scope::Scope;
use crate::selftest::Mode;

/// A named collection of scopes, accumulating their results.
#[derive(Debug)]
pub struct TestCase {
    name: String,
    controller: Scope,
    results: ResultSet,
}

impl TestCase {
    pub fn new(name: &str) -> Self {
        Self::with_settings(name, Settings::default())
    }

    pub fn with_settings(name: &str, settings: Settings) -> Self {
        Self {
            name: name.to_string(),
            controller: Scope::new(settings, Mode::Standard),
            results: ResultSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Switches the case into self-testing mode: predicate calls become
    /// inert probes and only `confirm` records.
    pub fn self_testing(&mut self) -> &mut Self {
        self.controller.set_mode(Mode::SelfTesting);
        self
    }

    /// Runs one named scope of assertions and accumulates its entries.
    ///
    /// The body runs under `catch_unwind`. An unexpected panic becomes a
    /// fault entry carrying the panic message, appended after whatever the
    /// scope had already recorded. A [`PramanaError`] payload is a contract
    /// violation and is resumed instead.
    ///
    /// Returns the entries this scope produced, for callers that want to
    /// inspect them directly.
    pub fn scope(&mut self, description: &str, body: impl FnOnce(&mut Scope)) -> ResultSet {
        self.controller.begin(description);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&mut self.controller)));
        let mut produced = self.controller.end();

        if let Err(payload) = outcome {
            if payload.is::<PramanaError>() {
                panic::resume_unwind(payload);
            }
            let message = payload_text(payload.as_ref())
                .unwrap_or(UNKNOWN_PAYLOAD)
                .to_string();
            produced.push(Entry::Fault(Fault::new(FaultKind::PanicCaught, message)));
        }

        self.results.append(produced.clone());
        produced
    }

    /// Everything recorded so far, across all scopes, in order.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Consumes the case, transferring its accumulated results.
    pub fn into_results(self) -> ResultSet {
        self.results
    }

    pub fn tally(&self) -> Tally {
        self.results.tally()
    }
}
