//! Differential probe.
//!
//! Compares the custom execution unit against the reference oracle case by
//! case:
//! 1. **Cases:** [`case::TestCase`] built from the [`suites`] or a [`vectors`] file.
//! 2. **Operands:** One [`bank::OperandBank`] per case, read by both sides.
//! 3. **Comparison:** [`harness::Harness`] steps through the cases and stops at
//!    the first disagreement.
//! 4. **Reporting:** [`report`] writes the `[[PASSED]]` / `[[FAILED]]` lines.

/// Operand bank and register binding.
pub mod bank;

/// Test case type.
pub mod case;

/// Harness state machine.
pub mod harness;

/// Report formatting.
pub mod report;

/// Whole-run orchestration.
pub mod runner;

/// Built-in suites.
pub mod suites;

/// Execution-unit evaluator.
pub mod unit;

/// JSON vector files.
pub mod vectors;

use crate::common::{Trap, Value};
use crate::isa::xcustom::Opcode;

/// Result of evaluating one case on one side.
pub type Outcome = Result<Value, Trap>;

/// One side of a differential comparison.
///
/// Implemented by [`Cpu`](crate::core::Cpu) (the execution unit) and
/// [`Oracle`](crate::oracle::Oracle) (the reference).
pub trait Evaluator {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Evaluates `op` on the operands held in `bank`.
    fn evaluate(&mut self, op: Opcode, bank: &OperandBank) -> Outcome;
}

/// True when two outcomes agree: the same fault, or values that agree bit for bit.
pub fn outcomes_agree(a: &Outcome, b: &Outcome) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.agrees_with(*y),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

pub use bank::{Binding, OperandBank};
pub use case::{Inputs, TestCase};
pub use harness::{Harness, Mismatch, State, Verdict};
pub use runner::{ProbeError, run};
pub use suites::{Suite, SuiteSelector};
