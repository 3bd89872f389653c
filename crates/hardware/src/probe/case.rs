//! Test cases: one opcode, its operands, and an optional literal expectation.

use crate::common::{Operand, Trap, Value, Vector3};
use crate::isa::xcustom::{Opcode, OperandClass};

/// Operand set of a single case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inputs {
    /// Two integers, `(a, b)`.
    IntPair(i32, i32),
    /// Two vectors, `(u, v)`.
    Vec3Pair(Vector3, Vector3),
}

impl Inputs {
    /// Operand class of this set.
    pub const fn class(&self) -> OperandClass {
        match self {
            Self::IntPair(..) => OperandClass::IntPair,
            Self::Vec3Pair(..) => OperandClass::Vec3Pair,
        }
    }

    /// Flattens the set: `[a, b]` or `[u0, u1, u2, v0, v1, v2]`.
    pub fn operands(&self) -> Vec<Operand> {
        match *self {
            Self::IntPair(a, b) => vec![Operand::Int(a), Operand::Int(b)],
            Self::Vec3Pair(u, v) => u
                .lanes()
                .into_iter()
                .chain(v.lanes())
                .map(Operand::Float)
                .collect(),
        }
    }
}

/// An immutable test case.
#[derive(Clone, Debug, PartialEq)]
pub struct TestCase {
    label: String,
    op: Opcode,
    inputs: Inputs,
    expected: Option<Value>,
}

impl TestCase {
    /// Builds a case, checking that `inputs` match the opcode's operand class.
    ///
    /// # Errors
    ///
    /// `Trap::OperandClass` when the class does not match.
    pub fn new(label: impl Into<String>, op: Opcode, inputs: Inputs) -> Result<Self, Trap> {
        if op.operand_class() != inputs.class() {
            return Err(Trap::OperandClass);
        }
        Ok(Self {
            label: label.into(),
            op,
            inputs,
            expected: None,
        })
    }

    /// A `MOD` case.
    pub fn modulo(label: impl Into<String>, a: i32, b: i32) -> Self {
        Self::int(label, Opcode::Mod, a, b)
    }

    /// An `NINST` case.
    pub fn ninst(label: impl Into<String>, a: i32, b: i32) -> Self {
        Self::int(label, Opcode::Ninst, a, b)
    }

    /// An `FDIST` case.
    pub fn fdist(label: impl Into<String>, u: Vector3, v: Vector3) -> Self {
        Self {
            label: label.into(),
            op: Opcode::Fdist,
            inputs: Inputs::Vec3Pair(u, v),
            expected: None,
        }
    }

    fn int(label: impl Into<String>, op: Opcode, a: i32, b: i32) -> Self {
        Self {
            label: label.into(),
            op,
            inputs: Inputs::IntPair(a, b),
            expected: None,
        }
    }

    /// Attaches a literal result the execution unit must also produce.
    #[must_use]
    pub fn expecting(mut self, value: Value) -> Self {
        self.expected = Some(value);
        self
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Opcode under test.
    pub const fn op(&self) -> Opcode {
        self.op
    }

    /// Operands.
    pub const fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Literal expectation, if any.
    pub const fn expected(&self) -> Option<Value> {
        self.expected
    }
}
