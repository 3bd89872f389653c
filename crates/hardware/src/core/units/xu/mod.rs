//! Custom Execution Unit (XU).
//!
//! This module implements the functional unit behind the three custom
//! instructions. It is used two ways:
//! - Typed entry points ([`arithmetic::modulo`], [`arithmetic::ninst`],
//!   [`distance::fdist`]) for callers holding plain values.
//! - [`Xu::execute`] for a decoded instruction, reading operands from the
//!   register file by class and position and writing `rd`.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Mod, Ninst
//! - [`distance`]:   Fdist

/// Integer operations (mod, ninst).
pub mod arithmetic;

/// Three-lane single-precision distance (fdist.s).
pub mod distance;

use tracing::trace;

use crate::common::{Operand, RegisterFile, Trap, VEC3_LANES, Value, Vector3};
use crate::core::arch::fpr::FPR_COUNT;
use crate::core::arch::gpr::GPR_COUNT;
use crate::isa::decode::LAST_VEC3_BASE;
use crate::isa::instruction::Decoded;
use crate::isa::xcustom::{Opcode, OperandClass};

/// Custom Execution Unit for MOD, NINST and FDIST.S.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xu;

impl Xu {
    /// Executes a decoded instruction against the register file.
    ///
    /// Integer operations read `x[rs1]`, `x[rs2]` and write `x[rd]`.
    /// `FDIST.S` reads `f[rs1..rs1+3]`, `f[rs2..rs2+3]`, writes `f[rd]` and
    /// accrues its exception flags into `fflags`.
    ///
    /// # Errors
    ///
    /// `Trap::DivisionByZero` for `MOD` with `x[rs2] == 0`; `rd` keeps its
    /// previous value. `Trap::IllegalInstruction(inst.raw)` when a register
    /// field is out of range, including an `FDIST.S` triple past `f31`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xprobe_core::common::RegisterFile;
    /// use xprobe_core::core::units::xu::Xu;
    /// use xprobe_core::isa::decode::{decode, encode};
    /// use xprobe_core::isa::xcustom::Opcode;
    ///
    /// let mut regs = RegisterFile::new();
    /// regs.write_i32(10, 55);
    /// regs.write_i32(11, 10);
    /// let inst = decode(encode(Opcode::Mod, 12, 10, 11)).unwrap();
    /// Xu::execute(&inst, &mut regs).unwrap();
    /// assert_eq!(regs.read_i32(12), 5);
    /// ```
    pub fn execute(inst: &Decoded, regs: &mut RegisterFile) -> Result<(), Trap> {
        if !registers_in_range(inst) {
            return Err(Trap::IllegalInstruction(inst.raw));
        }
        match inst.op {
            Opcode::Mod => {
                let r = arithmetic::modulo(regs.read_i32(inst.rs1), regs.read_i32(inst.rs2))?;
                regs.write_i32(inst.rd, r);
            }
            Opcode::Ninst => {
                let r = arithmetic::ninst(regs.read_i32(inst.rs1), regs.read_i32(inst.rs2));
                regs.write_i32(inst.rd, r);
            }
            Opcode::Fdist => {
                let u = read_vec3(regs, inst.rs1);
                let v = read_vec3(regs, inst.rs2);
                let (r, flags) = distance::fdist(u, v);
                trace!(?u, ?v, result = r, %flags, "fdist.s");
                regs.accrue(flags);
                regs.write_f32(inst.rd, r);
            }
        }
        Ok(())
    }

    /// Applies an opcode to a flat operand list.
    ///
    /// Operand class and arity are checked here, at the call boundary:
    /// integer opcodes take `[a, b]`, `FDIST` takes `[u0, u1, u2, v0, v1, v2]`.
    ///
    /// # Errors
    ///
    /// `Trap::OperandClass` when the operands do not match the opcode, plus
    /// any fault the operation itself raises.
    pub fn apply(op: Opcode, operands: &[Operand]) -> Result<Value, Trap> {
        match (op, operands) {
            (Opcode::Mod, &[Operand::Int(a), Operand::Int(b)]) => {
                arithmetic::modulo(a, b).map(Value::Int)
            }
            (Opcode::Ninst, &[Operand::Int(a), Operand::Int(b)]) => {
                Ok(Value::Int(arithmetic::ninst(a, b)))
            }
            (
                Opcode::Fdist,
                &[
                    Operand::Float(u0),
                    Operand::Float(u1),
                    Operand::Float(u2),
                    Operand::Float(v0),
                    Operand::Float(v1),
                    Operand::Float(v2),
                ],
            ) => {
                let (r, _) = distance::fdist(Vector3::new(u0, u1, u2), Vector3::new(v0, v1, v2));
                Ok(Value::Float(r))
            }
            _ => Err(Trap::OperandClass),
        }
    }
}

/// Hand-built `Decoded` values never passed through the decoder's range check.
fn registers_in_range(inst: &Decoded) -> bool {
    match inst.op.operand_class() {
        OperandClass::IntPair => [inst.rd, inst.rs1, inst.rs2].iter().all(|&r| r < GPR_COUNT),
        OperandClass::Vec3Pair => {
            inst.rd < FPR_COUNT && inst.rs1 <= LAST_VEC3_BASE && inst.rs2 <= LAST_VEC3_BASE
        }
    }
}

fn read_vec3(regs: &RegisterFile, base: usize) -> Vector3 {
    let mut lanes = [0.0; VEC3_LANES];
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane = regs.read_f32(base + i);
    }
    Vector3(lanes)
}
