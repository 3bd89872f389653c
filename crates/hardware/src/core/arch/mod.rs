//! Architectural state visible to the custom instructions.
//!
//! Only the two register files are modelled; there is no memory, CSR space
//! or privilege state beyond the accrued FP flags kept in
//! [`RegisterFile`](crate::common::RegisterFile).

/// Floating-point register file.
pub mod fpr;

/// General-purpose (integer) register file.
pub mod gpr;
