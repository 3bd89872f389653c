//! Common types shared by the execution unit, the oracle and the harness.
//!
//! It includes:
//! 1. **Values:** Typed operands, `Vector3`, and bit-exact result values.
//! 2. **Error Handling:** The `Trap` faults the execution unit can raise.
//! 3. **Register Management:** A unified interface for GPR, FPR and `fflags` access.

/// Operand, vector and result value types.
pub mod data;

/// Trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::{Operand, RegClass, VEC3_LANES, Value, Vector3};
pub use error::Trap;
pub use reg::RegisterFile;
