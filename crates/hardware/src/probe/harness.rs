//! Differential Harness.
//!
//! Drives a list of cases through two evaluators and stops at the first
//! disagreement. The run is a small state machine:
//!
//! ```text
//! Init ──step──▶ Running{0} ──step──▶ Running{1} … ──step──▶ Passed
//!                    │                    │
//!                    └────────────────────┴──(mismatch)──▶ Failed
//! ```
//!
//! `Passed` and `Failed` are terminal; further steps do nothing.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::isa::xcustom::Opcode;

use super::bank::OperandBank;
use super::case::TestCase;
use super::report;
use super::{Evaluator, Outcome, outcomes_agree};

/// The first disagreement of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    /// Position of the case in declared order.
    pub index: usize,
    /// Case label.
    pub label: String,
    /// Opcode under test.
    pub op: Opcode,
    /// What the execution unit produced.
    pub actual: Outcome,
    /// What it should have produced (oracle result or literal expectation).
    pub expected: Outcome,
}

/// Harness state.
#[derive(Clone, Debug, PartialEq)]
pub enum State {
    /// Constructed, nothing evaluated.
    Init,
    /// Comparing; `next` is the index of the next case.
    Running {
        /// Next case to evaluate.
        next: usize,
    },
    /// Every case agreed.
    Passed,
    /// Stopped at the first disagreement.
    Failed(Mismatch),
}

impl State {
    /// True for `Passed` and `Failed`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Passed | Self::Failed(_))
    }
}

/// Terminal result of [`Harness::run`].
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Every case agreed.
    Passed {
        /// Number of cases compared.
        cases: usize,
    },
    /// The first case that disagreed.
    Failed(Mismatch),
}

impl Verdict {
    /// True for `Passed`.
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

/// Compares an execution unit against a reference over a fixed case list.
#[derive(Debug)]
pub struct Harness<U, O> {
    cases: Vec<TestCase>,
    unit: U,
    oracle: O,
    state: State,
    print_cases: bool,
    suite: Option<String>,
}

impl<U: Evaluator, O: Evaluator> Harness<U, O> {
    /// Creates a harness in the `Init` state.
    pub const fn new(cases: Vec<TestCase>, unit: U, oracle: O) -> Self {
        Self {
            cases,
            unit,
            oracle,
            state: State::Init,
            print_cases: true,
            suite: None,
        }
    }

    /// Runs the cases as one named suite of a longer run.
    ///
    /// A named harness closes with `[[<name> PASSED]]` instead of the run
    /// marker; the caller writes `[[PASSED]]` once every suite has passed.
    #[must_use]
    pub fn named(mut self, suite: impl Into<String>) -> Self {
        self.suite = Some(suite.into());
        self
    }

    /// Enables or disables the per-case report lines.
    #[must_use]
    pub fn print_cases(mut self, enabled: bool) -> Self {
        self.print_cases = enabled;
        self
    }

    /// Current state.
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Cases in declared order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// The evaluator under test.
    pub const fn unit(&self) -> &U {
        &self.unit
    }

    /// Advances by one transition and returns the new state.
    ///
    /// # Errors
    ///
    /// Only I/O errors from writing the report.
    pub fn step<W: Write>(&mut self, out: &mut W) -> io::Result<&State> {
        let next = match self.state {
            State::Init => {
                debug!(cases = self.cases.len(), "harness running");
                self.state = State::Running { next: 0 };
                return Ok(&self.state);
            }
            State::Running { next } => next,
            State::Passed | State::Failed(_) => return Ok(&self.state),
        };

        let Some(case) = self.cases.get(next) else {
            match &self.suite {
                Some(suite) => report::write_suite_passed(out, suite)?,
                None => report::write_passed(out)?,
            }
            debug!(cases = self.cases.len(), "harness passed");
            self.state = State::Passed;
            return Ok(&self.state);
        };

        let bank = OperandBank::new(case.inputs());
        let actual = self.unit.evaluate(case.op(), &bank);
        let reference = self.oracle.evaluate(case.op(), &bank);
        debug!(
            index = next,
            label = case.label(),
            op = %case.op(),
            actual = %report::outcome_text(&actual),
            reference = %report::outcome_text(&reference),
            "case evaluated"
        );

        let expected = if outcomes_agree(&actual, &reference) {
            case.expected()
                .map(Ok)
                .filter(|literal| !outcomes_agree(&actual, literal))
        } else {
            Some(reference)
        };

        if let Some(expected) = expected {
            report::write_failed(out, next, &actual, &expected)?;
            warn!(
                index = next,
                label = case.label(),
                unit = self.unit.name(),
                oracle = self.oracle.name(),
                actual = %report::outcome_text(&actual),
                expected = %report::outcome_text(&expected),
                "mismatch"
            );
            self.state = State::Failed(Mismatch {
                index: next,
                label: case.label().to_string(),
                op: case.op(),
                actual,
                expected,
            });
            return Ok(&self.state);
        }

        if self.print_cases {
            report::write_case(out, next, &actual)?;
        }
        self.state = State::Running { next: next + 1 };
        Ok(&self.state)
    }

    /// Steps until a terminal state and returns the verdict.
    ///
    /// # Errors
    ///
    /// Only I/O errors from writing the report.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<Verdict> {
        while !self.step(out)?.is_terminal() {}
        Ok(match &self.state {
            State::Failed(mismatch) => Verdict::Failed(mismatch.clone()),
            _ => Verdict::Passed {
                cases: self.cases.len(),
            },
        })
    }
}
