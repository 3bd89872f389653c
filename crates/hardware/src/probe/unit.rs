//! Execution-unit side of the comparison.
//!
//! Binds the bank into the register file, encodes the instruction with the
//! fixed [`Binding`], and runs it through the decoder and the custom unit.

use tracing::debug;

use crate::common::{RegClass, Trap, Value};
use crate::core::Cpu;
use crate::isa::decode::encode;
use crate::isa::xcustom::Opcode;

use super::bank::{Binding, OperandBank};
use super::{Evaluator, Outcome};

impl Evaluator for Cpu {
    fn name(&self) -> &'static str {
        "xu"
    }

    fn evaluate(&mut self, op: Opcode, bank: &OperandBank) -> Outcome {
        if !bank_fits(op, bank) {
            return Err(Trap::OperandClass);
        }
        let Binding { rd, rs1, rs2 } = Binding::for_opcode(op);

        // Clear the destination so a silently dropped write cannot pass.
        match op.reg_class() {
            RegClass::Int => self.regs.write_i32(rd, 0),
            RegClass::Float => self.regs.write_f32(rd, 0.0),
        }
        bank.bind(&mut self.regs, Binding { rd, rs1, rs2 })?;

        let inst = encode(op, rd, rs1, rs2);
        if let Err(trap) = self.step(inst) {
            debug!(%trap, regs = %self.dump_state(), "custom instruction trapped");
            return Err(trap);
        }

        Ok(match op.reg_class() {
            RegClass::Int => Value::Int(self.regs.read_i32(rd)),
            RegClass::Float => Value::Float(self.regs.read_f32(rd)),
        })
    }
}

/// True when `bank` holds exactly the operands `op` reads.
fn bank_fits(op: Opcode, bank: &OperandBank) -> bool {
    bank.class() == op.operand_class()
        && bank.len() == op.arity()
        && bank.operands().iter().all(|o| o.class() == op.reg_class())
}
