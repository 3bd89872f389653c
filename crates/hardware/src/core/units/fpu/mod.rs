//! Single-precision helpers shared by the FP side of the execution unit.
//!
//! - [`exception_flags`]: the `fflags` bit set raised by `FDIST.S`.

/// Floating-point exception flag types.
pub mod exception_flags;

/// Quiet bit of a single-precision NaN (mantissa MSB).
const F32_QUIET_BIT: u32 = 0x0040_0000;

/// Returns true if `f` is a signalling NaN (NaN with the quiet bit clear).
#[inline]
pub const fn is_snan_f32(f: f32) -> bool {
    f.is_nan() && (f.to_bits() & F32_QUIET_BIT) == 0
}
