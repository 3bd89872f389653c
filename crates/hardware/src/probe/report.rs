//! Report lines.
//!
//! Only the two markers are a machine-readable contract; the per-case lines
//! are for people reading the log.

use std::io::{self, Write};

use super::Outcome;

/// Marker printed when every case of a run agreed.
pub const PASSED_MARKER: &str = "[[PASSED]]";

/// Marker printed on the first disagreement.
pub const FAILED_MARKER: &str = "[[FAILED]]";

/// Renders an outcome: the value, or `trap:<name>`.
pub fn outcome_text(outcome: &Outcome) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(trap) => format!("trap:{trap}"),
    }
}

/// `i=<index>, c[i]=<actual>`.
pub fn write_case<W: Write>(out: &mut W, index: usize, actual: &Outcome) -> io::Result<()> {
    writeln!(out, "i={index}, c[i]={}", outcome_text(actual))
}

/// `[[FAILED]]: i=<index>, c[i]=<actual>, expected=<expected>`.
pub fn write_failed<W: Write>(
    out: &mut W,
    index: usize,
    actual: &Outcome,
    expected: &Outcome,
) -> io::Result<()> {
    writeln!(
        out,
        "\n{FAILED_MARKER}: i={index}, c[i]={}, expected={}",
        outcome_text(actual),
        outcome_text(expected)
    )
}

/// `[[<suite> PASSED]]`, closing one suite of a longer run.
///
/// Never contains the bare [`PASSED_MARKER`], so only the run as a whole can
/// report success.
pub fn write_suite_passed<W: Write>(out: &mut W, suite: &str) -> io::Result<()> {
    writeln!(out, "\n[[{suite} PASSED]]")
}

/// `[[PASSED]]`.
pub fn write_passed<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{PASSED_MARKER}")
}
