//! Whole-run orchestration.
//!
//! Expands the configured suites, appends the vector file if one is set, and
//! runs each list through a fresh [`Harness`]. The run stops at the first
//! failing list. Each passing list closes with `[[<name> PASSED]]`; the bare
//! `[[PASSED]]` is written once, after the last list.

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::core::Cpu;
use crate::oracle::Oracle;

use super::case::TestCase;
use super::harness::{Harness, Verdict};
use super::report;
use super::vectors::{VectorError, load_vectors};

/// Errors that abort a run before a verdict is reached.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Writing the report failed.
    #[error("report output failed: {0}")]
    Io(#[from] io::Error),
    /// The vector file could not be loaded.
    #[error(transparent)]
    Vectors(#[from] VectorError),
}

/// A named list of cases run as one harness.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    /// Suite name or vector file path.
    pub name: String,
    /// Cases in declared order.
    pub cases: Vec<TestCase>,
}

/// Builds the run plan from a configuration.
///
/// # Errors
///
/// `ProbeError::Vectors` if the configured vector file cannot be loaded.
pub fn plan(config: &Config) -> Result<Vec<Plan>, ProbeError> {
    let mut plans: Vec<Plan> = config
        .harness
        .suites
        .iter()
        .flat_map(|selector| selector.suites())
        .map(|suite| Plan {
            name: suite.name().to_string(),
            cases: suite.cases(),
        })
        .collect();

    if let Some(path) = &config.harness.vectors {
        plans.push(Plan {
            name: path.display().to_string(),
            cases: load_vectors(path)?,
        });
    }
    Ok(plans)
}

/// Runs every plan in order and returns the overall verdict.
///
/// Each plan gets its own CPU, so register state never leaks between suites.
///
/// # Errors
///
/// `ProbeError` if the plan cannot be built or the report cannot be written.
/// A mismatch is a `Verdict::Failed`, not an error.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Verdict, ProbeError> {
    let plans = plan(config)?;

    let mut total = 0;
    for Plan { name, cases } in plans {
        info!(suite = %name, cases = cases.len(), "running");
        writeln!(out, "== {name} ==")?;
        let mut harness = Harness::new(cases, Cpu::new(config), Oracle)
            .print_cases(config.harness.print_cases)
            .named(name);
        match harness.run(out)? {
            Verdict::Passed { cases } => total += cases,
            failed @ Verdict::Failed(_) => return Ok(failed),
        }
    }
    report::write_passed(out)?;
    Ok(Verdict::Passed { cases: total })
}
