//! JSON vector files.
//!
//! A vector file is a JSON array of cases tagged by `op`:
//!
//! ```json
//! [
//!   { "op": "mod",   "a": 11, "b": 10, "expected": 1, "label": "first" },
//!   { "op": "ninst", "a": -2147483648, "b": 1 },
//!   { "op": "fdist", "u": [3.3, 1.1, 2.2], "v": [1.1, 2.2, 3.3] }
//! ]
//! ```
//!
//! `label` defaults to `<file-stem>[<index>]`; `expected` is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::{Value, Vector3};

use super::case::TestCase;

/// Errors raised while loading a vector file.
#[derive(Debug, Error)]
pub enum VectorError {
    /// The file could not be read.
    #[error("cannot read vectors {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid vector document.
    #[error("invalid vectors: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum VectorSpec {
    Mod {
        a: i32,
        b: i32,
        #[serde(default)]
        expected: Option<i32>,
        #[serde(default)]
        label: Option<String>,
    },
    Ninst {
        a: i32,
        b: i32,
        #[serde(default)]
        expected: Option<i32>,
        #[serde(default)]
        label: Option<String>,
    },
    Fdist {
        u: Vector3,
        v: Vector3,
        #[serde(default)]
        expected: Option<f32>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl VectorSpec {
    fn into_case(self, default_label: String) -> TestCase {
        match self {
            Self::Mod { a, b, expected, label } => with_expected(
                TestCase::modulo(label.unwrap_or(default_label), a, b),
                expected.map(Value::Int),
            ),
            Self::Ninst { a, b, expected, label } => with_expected(
                TestCase::ninst(label.unwrap_or(default_label), a, b),
                expected.map(Value::Int),
            ),
            Self::Fdist { u, v, expected, label } => with_expected(
                TestCase::fdist(label.unwrap_or(default_label), u, v),
                expected.map(Value::Float),
            ),
        }
    }
}

fn with_expected(case: TestCase, expected: Option<Value>) -> TestCase {
    match expected {
        Some(value) => case.expecting(value),
        None => case,
    }
}

/// Parses vector text. Unlabelled cases are named `<prefix>[<index>]`.
///
/// # Errors
///
/// `VectorError::Parse` on malformed JSON, an unknown `op`, or operands of
/// the wrong type for the `op`.
pub fn parse_vectors(text: &str, prefix: &str) -> Result<Vec<TestCase>, VectorError> {
    let specs: Vec<VectorSpec> = serde_json::from_str(text)?;
    Ok(specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| spec.into_case(format!("{prefix}[{i}]")))
        .collect())
}

/// Reads and parses a vector file.
///
/// # Errors
///
/// `VectorError::Io` if the file cannot be read, otherwise as [`parse_vectors`].
pub fn load_vectors(path: &Path) -> Result<Vec<TestCase>, VectorError> {
    let text = std::fs::read_to_string(path).map_err(|source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let prefix = path
        .file_stem()
        .map_or_else(|| "vectors".into(), |stem| stem.to_string_lossy());
    parse_vectors(&text, &prefix)
}
