//! The presentation layer: renders a finalized result list as colored
//! pass/fail/error lines plus a summary tally.
//!
//! Everything here consumes results read-only; counts come from
//! [`ResultSet::tally`], never from what happened to be printed. Display
//! configuration is an explicit [`DisplayOptions`] value, not process-wide
//! state.

use std::io::Write;

use difference::{Changeset, Difference};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayOptions;
use crate::error::PramanaError;
use crate::outcome::{Entry, FaultKind, Outcome};
use crate::results::{ResultSet, Tally};

/// Width of one summary cell, to keep the dirty-run row aligned.
const CELL_WIDTH: usize = 14;

// ============================================================================
// RENDERING
// ============================================================================

/// Writes one line per visible entry, then the summary block.
///
/// Passed lines appear only with `show_passed`; suppression faults are
/// hidden under `hide_suppressed`. Hidden entries still count in the
/// summary.
pub fn render(
    out: &mut dyn WriteColor,
    results: &ResultSet,
    options: &DisplayOptions,
) -> Result<(), PramanaError> {
    for entry in results {
        match entry {
            Entry::Fault(fault) => {
                if fault.kind == FaultKind::PriorAssertionFailed && options.hide_suppressed {
                    continue;
                }
                // Failures and faults get breathing room; passed lines do
                // not, so their spacing never depends on show_passed.
                writeln!(out)?;
                tag(out, " ERR  ", Color::Yellow)?;
                let label = match fault.kind {
                    FaultKind::PriorAssertionFailed => "Previous assertion failed",
                    FaultKind::PanicCaught => "Panic caught",
                };
                write!(out, " {label}")?;
                if !fault.message.is_empty() {
                    write!(out, ": {}", fault.message)?;
                }
                if !fault.note.is_empty() {
                    write!(out, " >> {}", fault.note)?;
                }
                writeln!(out)?;
            }
            Entry::Outcome(outcome) => {
                if outcome.passed && !options.show_passed {
                    continue;
                }
                if !outcome.passed {
                    writeln!(out)?;
                }
                render_outcome(out, outcome)?;
            }
        }
    }

    summary(out, results.tally())?;
    Ok(())
}

/// Convenience wrapper writing to stdout, with colors only on a TTY.
pub fn print(results: &ResultSet, options: &DisplayOptions) -> Result<(), PramanaError> {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    render(&mut stdout, results, options)
}

/// Serializes the entries plus their derived tally as a JSON document.
pub fn to_json(results: &ResultSet) -> Result<String, PramanaError> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        entries: &'a [Entry],
        tally: Tally,
    }
    let report = JsonReport {
        entries: results.entries(),
        tally: results.tally(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn render_outcome(out: &mut dyn WriteColor, outcome: &Outcome) -> Result<(), PramanaError> {
    if outcome.passed {
        tag(out, " PASS ", Color::Green)?;
    } else {
        tag(out, " FAIL ", Color::Red)?;
    }
    write!(out, " {} #{}", outcome.description, outcome.case_no)?;
    if !outcome.note.is_empty() {
        write!(out, " - {}", outcome.note)?;
    }

    if !outcome.passed {
        if outcome.expected.contains('\n') || outcome.actual.contains('\n') {
            writeln!(out)?;
            let changeset = Changeset::new(&outcome.expected, &outcome.actual, "\n");
            write_diff(out, &changeset.diffs)?;
        } else {
            write!(
                out,
                " (expected: {}, actual: {})",
                display_value(&outcome.expected),
                display_value(&outcome.actual)
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Blank renderings get an explicit placeholder so a failure over empty
/// text stays legible.
fn display_value(input: &str) -> &str {
    if input.is_empty() {
        "<empty>"
    } else {
        input
    }
}

fn tag(out: &mut dyn WriteColor, text: &str, color: Color) -> Result<(), PramanaError> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{text}")?;
    out.reset()?;
    Ok(())
}

fn write_diff(out: &mut dyn WriteColor, diffs: &[Difference]) -> Result<(), PramanaError> {
    for diff in diffs {
        match diff {
            Difference::Same(ref lines) => {
                out.reset()?;
                writeln!(out, "   {lines}")?;
            }
            Difference::Add(ref lines) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(out, "  +{lines}")?;
            }
            Difference::Rem(ref lines) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                writeln!(out, "  -{lines}")?;
            }
        }
    }
    out.reset()?;
    Ok(())
}

fn summary(out: &mut dyn WriteColor, tally: Tally) -> Result<(), PramanaError> {
    writeln!(out, "\n{}", "-".repeat(CELL_WIDTH * 4 + 16))?;

    if tally.is_clean() {
        tag(out, " NICE ", Color::Green)?;
        writeln!(out, " Assertions passed: {}", tally.passed)?;
    } else {
        tag(out, " FAIL ", Color::Red)?;
        writeln!(
            out,
            " {} | {} | {} | {}",
            pad(&format!("Total: {}", tally.total())),
            pad(&format!("Passed: {}", tally.passed)),
            pad(&format!("Failed: {}", tally.failed)),
            pad(&format!("Errors: {}", tally.errors)),
        )?;
    }
    Ok(())
}

/// Pads a summary cell to a fixed display width.
fn pad(text: &str) -> String {
    let width = UnicodeWidthStr::width(text);
    if width >= CELL_WIDTH {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(CELL_WIDTH - width))
    }
}
