//! The crate's unified diagnostic type.
//!
//! Assertion failures and suppressions are data, not errors; they live in
//! the outcome model. `PramanaError` covers the remaining failure modes:
//! programmer misuse of the self-testing surface, and the presentation
//! layer's encoding and write failures.

use miette::Diagnostic;
use thiserror::Error;

/// All failure modes that surface as errors rather than recorded entries.
#[derive(Debug, Error)]
pub enum PramanaError {
    /// `confirm` was called on a test case that is not in self-testing
    /// mode. This is a contract violation, raised as a typed panic so it
    /// crosses the scope boundary instead of being converted into data.
    #[error("confirm requires self-testing mode")]
    SelfTestRequired,

    #[error("failed to encode the JSON report")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report output")]
    Write(#[from] std::io::Error),
}

impl Diagnostic for PramanaError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            PramanaError::SelfTestRequired => "pramana::self_test_required",
            PramanaError::Serialize(_) => "pramana::serialize",
            PramanaError::Write(_) => "pramana::write",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        match self {
            PramanaError::SelfTestRequired => Some(Box::new(
                "switch the test case into self-testing mode with TestCase::self_testing \
                 before confirming probed outcomes",
            )),
            _ => None,
        }
    }
}
