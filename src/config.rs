//! Run settings and display configuration.
//!
//! Both structs are plain data with serde defaults, so consumers can embed
//! them in their own configuration files. Settings are read by the scope
//! controller and never change once a run has started; display options are
//! consulted only by the presentation layer.

use serde::{Deserialize, Serialize};

/// Settings for a test run, read by every scope controller built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// When an assertion fails, skip the remaining assertions in the same
    /// scope and record each as a suppression fault instead. Avoids
    /// cluttering the result output with cascading failures.
    pub stop_after_first_failure: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stop_after_first_failure: true,
        }
    }
}

/// Display configuration consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Print passed assertions as well. Not recommended for larger suites.
    pub show_passed: bool,
    /// Hide "previous assertion failed" lines. The faults still count
    /// toward the error tally either way.
    pub hide_suppressed: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_passed: false,
            hide_suppressed: true,
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(settings.stop_after_first_failure);

        let options: DisplayOptions = serde_json::from_str(r#"{"show_passed": true}"#).unwrap();
        assert!(options.show_passed);
        assert!(options.hide_suppressed);
    }
}
