//! Operand and result values.
//!
//! Integer operands are always 32-bit two's-complement values and float
//! operands are always IEEE 754 single precision. Nothing is promoted.

use std::fmt;

use serde::Deserialize;

/// Number of components in a [`Vector3`].
pub const VEC3_LANES: usize = 3;

/// Register class an operand or result lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegClass {
    /// Integer register file (`x0`-`x31`).
    Int,
    /// Floating-point register file (`f0`-`f31`).
    Float,
}

/// A single typed operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// 32-bit two's-complement integer.
    Int(i32),
    /// IEEE 754 single-precision float.
    Float(f32),
}

impl Operand {
    /// Register class this operand binds to.
    pub const fn class(self) -> RegClass {
        match self {
            Self::Int(_) => RegClass::Int,
            Self::Float(_) => RegClass::Float,
        }
    }
}

/// An ordered triple of single-precision floats.
///
/// Lane `i` of one vector pairs with lane `i` of the other in `FDIST`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Vector3(pub [f32; VEC3_LANES]);

impl Vector3 {
    /// Builds a vector from its three components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    /// Returns the components in lane order.
    pub const fn lanes(self) -> [f32; VEC3_LANES] {
        self.0
    }
}

/// A result produced by either side of a differential comparison.
#[derive(Clone, Copy, Debug)]
pub enum Value {
    /// Integer result.
    Int(i32),
    /// Single-precision result.
    Float(f32),
}

impl Value {
    /// Bit-exact agreement between two results.
    ///
    /// Integers compare by value. Floats compare by bit pattern, so `-0.0`
    /// differs from `0.0` and no tolerance window applies. The one exception
    /// is NaN: any NaN agrees with any other NaN, because the payload of a
    /// NaN produced by host arithmetic is not guaranteed.
    pub fn agrees_with(self, other: Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.agrees_with(*other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.6}"),
        }
    }
}
