//! Operand Bank.
//!
//! Holds the operands of one case for the lifetime of that case. Both sides
//! of the comparison read the same bank; `Operand` is `Copy`, so neither side
//! can observe a change made by the other.

use crate::common::{Operand, RegisterFile, Trap, VEC3_LANES};
use crate::isa::abi::{FREG_FA0, FREG_FA3, FREG_FA6, REG_A0, REG_A1, REG_A2};
use crate::isa::decode::LAST_VEC3_BASE;
use crate::isa::xcustom::{Opcode, OperandClass};

use super::case::Inputs;

/// Register positions an instruction reads its operands from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Destination register.
    pub rd: usize,
    /// First source (first lane for vectors).
    pub rs1: usize,
    /// Second source (first lane for vectors).
    pub rs2: usize,
}

impl Binding {
    /// Integer operations: `a` in `a0`, `b` in `a1`, result in `a2`.
    pub const INT: Self = Self {
        rd: REG_A2,
        rs1: REG_A0,
        rs2: REG_A1,
    };

    /// `FDIST`: `u` in `fa0..fa2`, `v` in `fa3..fa5`, result in `fa6`.
    pub const VEC3: Self = Self {
        rd: FREG_FA6,
        rs1: FREG_FA0,
        rs2: FREG_FA3,
    };

    /// The fixed binding used for `op`.
    pub const fn for_opcode(op: Opcode) -> Self {
        match op.operand_class() {
            OperandClass::IntPair => Self::INT,
            OperandClass::Vec3Pair => Self::VEC3,
        }
    }
}

/// Read-only operand storage for one case.
#[derive(Clone, Debug, PartialEq)]
pub struct OperandBank {
    class: OperandClass,
    operands: Vec<Operand>,
}

impl OperandBank {
    /// Fills a bank from a case's inputs.
    pub fn new(inputs: &Inputs) -> Self {
        Self {
            class: inputs.class(),
            operands: inputs.operands(),
        }
    }

    /// Operand at `index`: `[a, b]` or `[u0, u1, u2, v0, v1, v2]`.
    pub fn get(&self, index: usize) -> Option<Operand> {
        self.operands.get(index).copied()
    }

    /// All operands in index order.
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// Operand class the bank holds.
    pub const fn class(&self) -> OperandClass {
        self.class
    }

    /// Number of operands.
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// True for a bank with no operands.
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Writes the operands into the source registers named by `binding`.
    ///
    /// # Errors
    ///
    /// `Trap::OperandClass` if the sources overlap, use `x0`, or a vector
    /// triple would run past `f31`, since the instruction would then read
    /// something other than the bank's values.
    pub fn bind(&self, regs: &mut RegisterFile, binding: Binding) -> Result<(), Trap> {
        let Binding { rs1, rs2, .. } = binding;
        match (self.class, self.operands.as_slice()) {
            (OperandClass::IntPair, &[Operand::Int(a), Operand::Int(b)]) => {
                if rs1 == 0 || rs2 == 0 || rs1 == rs2 {
                    return Err(Trap::OperandClass);
                }
                regs.write_i32(rs1, a);
                regs.write_i32(rs2, b);
            }
            (OperandClass::Vec3Pair, lanes) if lanes.len() == 2 * VEC3_LANES => {
                if rs1 > LAST_VEC3_BASE || rs2 > LAST_VEC3_BASE || rs1.abs_diff(rs2) < VEC3_LANES
                {
                    return Err(Trap::OperandClass);
                }
                for (i, operand) in lanes.iter().enumerate() {
                    let Operand::Float(f) = *operand else {
                        return Err(Trap::OperandClass);
                    };
                    let reg = if i < VEC3_LANES { rs1 + i } else { rs2 + i - VEC3_LANES };
                    regs.write_f32(reg, f);
                }
            }
            _ => return Err(Trap::OperandClass),
        }
        Ok(())
    }
}
