//! Integer side of the custom unit: `MOD` and `NINST`.
//!
//! Both operate on 32-bit two's-complement operands with no promotion.

use crate::common::Trap;

/// Truncating signed remainder.
///
/// The result takes the sign of the dividend (`-7 mod 3 == -1`,
/// `7 mod -3 == 1`). `i32::MIN mod -1` wraps to `0` instead of trapping.
///
/// # Errors
///
/// `Trap::DivisionByZero` when `b == 0`. The fault is raised on every such
/// call; there is no sentinel result.
pub const fn modulo(a: i32, b: i32) -> Result<i32, Trap> {
    if b == 0 {
        return Err(Trap::DivisionByZero);
    }
    Ok(a.wrapping_rem(b))
}

/// Wrapping subtraction `a - b`. Overflow wraps silently.
pub const fn ninst(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}
