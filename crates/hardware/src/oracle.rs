//! Reference Oracle.
//!
//! Recomputes the three custom operations with ordinary host arithmetic and
//! shares no code with the execution unit: integers are widened to `i64`,
//! and the distance takes its square root in double precision before
//! rounding to single. A double-precision root of a single-precision value,
//! rounded back to single, equals the correctly rounded `f32` root, so the
//! two sides must still agree bit for bit.
//!
//! Fault policy matches the execution unit: a zero `MOD` divisor is
//! `Trap::DivisionByZero`, and mismatched operands are `Trap::OperandClass`.

use crate::common::{Operand, Trap, Value};
use crate::isa::xcustom::Opcode;
use crate::probe::bank::OperandBank;
use crate::probe::{Evaluator, Outcome};

/// Ground-truth evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Oracle;

impl Oracle {
    /// Signed remainder via truncating division.
    ///
    /// # Errors
    ///
    /// `Trap::DivisionByZero` when `b == 0`.
    pub fn modulo(a: i32, b: i32) -> Result<i32, Trap> {
        if b == 0 {
            return Err(Trap::DivisionByZero);
        }
        let (a, b) = (i64::from(a), i64::from(b));
        let quotient = a / b;
        Ok((a - quotient * b) as i32)
    }

    /// `a - b` computed wide, then truncated to 32 bits.
    pub fn ninst(a: i32, b: i32) -> i32 {
        (i64::from(a) - i64::from(b)) as i32
    }

    /// `sqrt((u0-v0)² + (u1-v1)² + (u2-v2)²)`.
    pub fn fdist(u: [f32; 3], v: [f32; 3]) -> f32 {
        let dx = u[0] - v[0];
        let dy = u[1] - v[1];
        let dz = u[2] - v[2];
        let sum = (dx * dx + dy * dy) + dz * dz;
        f64::from(sum).sqrt() as f32
    }
}

impl Evaluator for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn evaluate(&mut self, op: Opcode, bank: &OperandBank) -> Outcome {
        match (op, bank.operands()) {
            (Opcode::Mod, &[Operand::Int(a), Operand::Int(b)]) => Self::modulo(a, b).map(Value::Int),
            (Opcode::Ninst, &[Operand::Int(a), Operand::Int(b)]) => Ok(Value::Int(Self::ninst(a, b))),
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
            ) => Ok(Value::Float(Self::fdist([u0, u1, u2], [v0, v1, v2]))),
            _ => Err(Trap::OperandClass),
        }
    }
}
