//! Trap definitions for the custom execution unit.
//!
//! The unit raises a trap instead of producing a result in three cases:
//! 1. **Decode:** The encoding is not one of the three custom instructions.
//! 2. **Operand class:** An operation was handed operands of the wrong class.
//! 3. **Arithmetic:** `MOD` was issued with a zero divisor.

use std::fmt;

/// Architectural faults raised by the custom execution unit and its oracle.
///
/// Two outcomes that carry the same `Trap` are considered to agree, so the
/// reference oracle reports these faults under exactly the same conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trap {
    /// Illegal instruction exception.
    ///
    /// Raised when the encoding is not `MOD`, `NINST` or `FDIST.S`, or when
    /// an `FDIST.S` source triple would run past the last FP register.
    /// The associated value is the instruction encoding.
    IllegalInstruction(u32),

    /// Integer division by zero in `MOD`.
    ///
    /// The destination register is left unchanged.
    DivisionByZero,

    /// Operands of the wrong class or arity for the issued opcode.
    ///
    /// This is a caller contract violation, never a recoverable condition.
    OperandClass,
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalInstruction(inst) => write!(f, "IllegalInstruction({inst:#010x})"),
            Self::DivisionByZero => write!(f, "DivisionByZero"),
            Self::OperandClass => write!(f, "OperandClass"),
        }
    }
}

impl std::error::Error for Trap {}
