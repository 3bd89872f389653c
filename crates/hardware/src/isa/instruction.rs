//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the R-type fields the custom instructions use,
//! and the `Decoded` structure the execution unit consumes.

use crate::isa::xcustom::Opcode;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a register index field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the `funct3` field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the `rs1` field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the `rs2` field.
pub const RS2_SHIFT: u32 = 20;
/// Bit position of the `funct7` field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting R-type fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// A decoded custom instruction.
///
/// Register indices are always in range for their register class; for
/// `FDIST.S` the whole source triple `rs..rs+2` is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Operation selected by `funct3`.
    pub op: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// First source register index (first lane for `FDIST.S`).
    pub rs1: usize,
    /// Second source register index (first lane for `FDIST.S`).
    pub rs2: usize,
}
