//! Pramana: a lightweight, scope-based assertion and result-reporting
//! library for unit testing.
//!
//! A test case opens named scopes, each scope runs assertion predicates,
//! and every evaluation is recorded as an [`Entry`]: an [`Outcome`] when
//! the predicate ran, a [`Fault`] when it could not be performed. Scopes
//! enforce a stop-after-first-failure policy, results accumulate in order
//! into [`ResultSet`]s, and tallies are always derived by scanning. A
//! self-testing mode lets the predicates themselves be probed and
//! confirmed with the same engine.
//!
//! ```
//! use pramana::{report, DisplayOptions, TestRunner};
//!
//! let mut runner = TestRunner::new();
//! runner.register("math", |case| {
//!     case.scope("addition", |s| {
//!         s.assert_eq(&4, &(2 + 2));
//!         s.assert_gt(&5, &4);
//!         s.note("five outranks four");
//!     });
//! });
//! let results = runner.run();
//! assert!(results.tally().is_clean());
//! report::print(&results, &DisplayOptions::default()).unwrap();
//! ```

pub mod assert;
pub mod case;
pub mod config;
pub mod error;
pub mod outcome;
pub mod report;
pub mod results;
pub mod runner;
pub mod scope;
pub mod selftest;

pub use crate::assert::{Countable, Describe, Evaluation};
pub use crate::case::TestCase;
pub use crate::config::{DisplayOptions, Settings};
pub use crate::error::PramanaError;
pub use crate::outcome::{Entry, Fault, FaultKind, Outcome};
pub use crate::results::{ResultSet, Tally};
pub use crate::runner::TestRunner;
pub use crate::scope::Scope;
pub use crate::selftest::{Mode, Must};
