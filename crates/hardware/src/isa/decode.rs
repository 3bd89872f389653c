//! Custom Instruction Decoder and Encoder.
//!
//! Turns a 32-bit encoding into a [`Decoded`] instruction, or raises
//! `IllegalInstruction` for anything outside the three custom operations.
//! [`encode`] is the inverse for well-formed fields.

use crate::common::{Trap, VEC3_LANES};
use crate::core::arch::fpr::FPR_COUNT;
use crate::isa::instruction::{
    Decoded, FUNCT3_SHIFT, FUNCT7_SHIFT, InstructionBits, OPCODE_MASK, RD_SHIFT, REG_MASK,
    RS1_SHIFT, RS2_SHIFT,
};
use crate::isa::xcustom::{Opcode, funct3, funct7, opcodes};

/// Highest register index that can start a three-register vector.
pub const LAST_VEC3_BASE: usize = FPR_COUNT - VEC3_LANES;

/// Decodes a 32-bit custom instruction.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
///
/// # Returns
///
/// The decoded instruction, or `Trap::IllegalInstruction(inst)` when the
/// opcode, `funct3` or `funct7` is not part of the extension, or when an
/// `FDIST.S` source triple would run past `f31`.
pub fn decode(inst: u32) -> Result<Decoded, Trap> {
    if inst.opcode() != opcodes::OP_CUSTOM_0 || inst.funct7() != funct7::XCUSTOM {
        return Err(Trap::IllegalInstruction(inst));
    }

    let op = match inst.funct3() {
        funct3::MOD => Opcode::Mod,
        funct3::NINST => Opcode::Ninst,
        funct3::FDIST_S => Opcode::Fdist,
        _ => return Err(Trap::IllegalInstruction(inst)),
    };

    let (rs1, rs2) = (inst.rs1(), inst.rs2());
    if op == Opcode::Fdist && (rs1 > LAST_VEC3_BASE || rs2 > LAST_VEC3_BASE) {
        return Err(Trap::IllegalInstruction(inst));
    }

    Ok(Decoded {
        raw: inst,
        op,
        rd: inst.rd(),
        rs1,
        rs2,
    })
}

/// Encodes a custom instruction from its fields.
///
/// Register indices are masked to five bits; callers that need the
/// `FDIST.S` range check should run the result back through [`decode`].
pub const fn encode(op: Opcode, rd: usize, rs1: usize, rs2: usize) -> u32 {
    (funct7::XCUSTOM & 0x7F) << FUNCT7_SHIFT
        | (rs2 as u32 & REG_MASK) << RS2_SHIFT
        | (rs1 as u32 & REG_MASK) << RS1_SHIFT
        | op.funct3() << FUNCT3_SHIFT
        | (rd as u32 & REG_MASK) << RD_SHIFT
        | (opcodes::OP_CUSTOM_0 & OPCODE_MASK)
}
