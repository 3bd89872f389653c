//! Built-in suites.
//!
//! Four fixed suites, each one harness run:
//!
//! | Suite          | Opcode  | Inputs                                   | Expected      |
//! |----------------|---------|------------------------------------------|---------------|
//! | `mod`          | MOD     | a = 11,22,33,44,55; b = 10               | 1,2,3,4,5     |
//! | `ninst`        | NINST   | a = 5; b = 1,2,3,4,5                     | 4,3,2,1,0     |
//! | `fdist`        | FDIST.S | u = (3.3,1.1,2.2); v = (1.1,2.2,3.3)     | oracle only   |
//! | `ninst-single` | NINST   | a = 5; b = 2                             | 3             |

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::common::{Value, Vector3};

use super::case::TestCase;

/// A concrete built-in suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suite {
    /// Five remainders by ten.
    Mod,
    /// Five subtractions from five.
    Ninst,
    /// One three-lane distance.
    Fdist,
    /// A single `5 - 2`.
    NinstSingle,
}

impl Suite {
    /// All suites in run order.
    pub const ALL: [Self; 4] = [Self::Mod, Self::Ninst, Self::Fdist, Self::NinstSingle];

    /// Name used on the command line and in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mod => "mod",
            Self::Ninst => "ninst",
            Self::Fdist => "fdist",
            Self::NinstSingle => "ninst-single",
        }
    }

    /// The suite's cases in declared order.
    pub fn cases(self) -> Vec<TestCase> {
        match self {
            Self::Mod => [11, 22, 33, 44, 55]
                .into_iter()
                .zip(1..)
                .map(|(a, expected)| {
                    TestCase::modulo(format!("mod[{}]", expected - 1), a, 10)
                        .expecting(Value::Int(expected))
                })
                .collect(),
            Self::Ninst => (0..5)
                .map(|i| {
                    TestCase::ninst(format!("ninst[{i}]"), 5, i + 1).expecting(Value::Int(4 - i))
                })
                .collect(),
            Self::Fdist => vec![TestCase::fdist(
                "fdist",
                Vector3::new(3.3, 1.1, 2.2),
                Vector3::new(1.1, 2.2, 3.3),
            )],
            Self::NinstSingle => vec![TestCase::ninst("ninst-single", 5, 2).expecting(Value::Int(3))],
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A suite name as written by the user: one suite, or `all`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuiteSelector {
    /// Every suite in [`Suite::ALL`] order.
    All,
    /// `mod`.
    Mod,
    /// `ninst`.
    Ninst,
    /// `fdist`.
    Fdist,
    /// `ninst-single`.
    NinstSingle,
}

impl SuiteSelector {
    /// Expands the selector to concrete suites.
    pub fn suites(self) -> Vec<Suite> {
        match self {
            Self::All => Suite::ALL.to_vec(),
            Self::Mod => vec![Suite::Mod],
            Self::Ninst => vec![Suite::Ninst],
            Self::Fdist => vec![Suite::Fdist],
            Self::NinstSingle => vec![Suite::NinstSingle],
        }
    }
}

/// Unknown suite name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown suite `{0}` (expected all, mod, ninst, fdist or ninst-single)")]
pub struct UnknownSuite(pub String);

impl FromStr for SuiteSelector {
    type Err = UnknownSuite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "mod" => Ok(Self::Mod),
            "ninst" => Ok(Self::Ninst),
            "fdist" => Ok(Self::Fdist),
            "ninst-single" => Ok(Self::NinstSingle),
            other => Err(UnknownSuite(other.to_string())),
        }
    }
}
