//! Custom Arithmetic Extension (MOD, NINST, FDIST.S).
//!
//! Three R-type instructions layered on the base integer and single-precision
//! ISAs. They share the `custom-0` opcode and are told apart by `funct3`.
//!
//! | Mnemonic  | funct3 | rd    | rs1          | rs2          |
//! |-----------|--------|-------|--------------|--------------|
//! | `mod`     | `000`  | `x`   | `x`          | `x`          |
//! | `ninst`   | `001`  | `x`   | `x`          | `x`          |
//! | `fdist.s` | `010`  | `f`   | `f[rs1..+3]` | `f[rs2..+3]` |
//!
//! `fdist.s` names only the first register of each source triple; the vector
//! occupies that register and the two that follow it.

/// Function code 3 definitions.
pub mod funct3;

/// Function code 7 definitions.
pub mod funct7;

/// Major opcode definitions.
pub mod opcodes;

use std::fmt;

use crate::common::RegClass;
use crate::common::VEC3_LANES;

/// Operand shape an opcode consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandClass {
    /// Two 32-bit integers.
    IntPair,
    /// Two three-lane single-precision vectors.
    Vec3Pair,
}

/// One of the three custom operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Truncating signed remainder.
    Mod,
    /// Wrapping two's-complement subtraction.
    Ninst,
    /// Fused three-lane Euclidean distance.
    Fdist,
}

impl Opcode {
    /// Every opcode in encoding order.
    pub const ALL: [Self; 3] = [Self::Mod, Self::Ninst, Self::Fdist];

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mod => "mod",
            Self::Ninst => "ninst",
            Self::Fdist => "fdist.s",
        }
    }

    /// Looks an opcode up by its assembly mnemonic.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }

    /// The `funct3` value selecting this operation.
    pub const fn funct3(self) -> u32 {
        match self {
            Self::Mod => funct3::MOD,
            Self::Ninst => funct3::NINST,
            Self::Fdist => funct3::FDIST_S,
        }
    }

    /// Operand shape this opcode requires.
    pub const fn operand_class(self) -> OperandClass {
        match self {
            Self::Mod | Self::Ninst => OperandClass::IntPair,
            Self::Fdist => OperandClass::Vec3Pair,
        }
    }

    /// Number of scalar operands read (two integers, or two triples).
    pub const fn arity(self) -> usize {
        match self.operand_class() {
            OperandClass::IntPair => 2,
            OperandClass::Vec3Pair => 2 * VEC3_LANES,
        }
    }

    /// Register class of the sources and the destination.
    pub const fn reg_class(self) -> RegClass {
        match self.operand_class() {
            OperandClass::IntPair => RegClass::Int,
            OperandClass::Vec3Pair => RegClass::Float,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
