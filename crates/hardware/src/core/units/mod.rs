//! Functional units.
//!
//! - [`xu`]: the custom execution unit for MOD, NINST and FDIST.S.
//! - [`fpu`]: single-precision helpers and the accrued exception flags.

/// Single-precision helpers and exception flags.
pub mod fpu;

/// Custom execution unit.
pub mod xu;
