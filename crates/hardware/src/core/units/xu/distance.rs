//! Floating-point side of the custom unit: `FDIST.S`.
//!
//! Computes `sqrt((d0² + d1²) + d2²)` with `di = u[i] - v[i]`, every step in
//! single precision with round-to-nearest-even. Lane order is fixed so the
//! result is reproducible bit for bit. NaNs propagate per IEEE 754 and are
//! not canonicalized.

use crate::common::{VEC3_LANES, Vector3};
use crate::core::units::fpu::exception_flags::FpFlags;
use crate::core::units::fpu::is_snan_f32;

/// Euclidean distance between two three-lane vectors.
///
/// # Returns
///
/// `(result, flags)`. NV is raised for a signalling-NaN input or an
/// `inf - inf` lane; OF is raised when every input is finite but the result
/// is not.
pub fn fdist(u: Vector3, v: Vector3) -> (f32, FpFlags) {
    let mut flags = FpFlags::NONE;
    let mut squares = [0.0_f32; VEC3_LANES];

    for (lane, (x, y)) in u.lanes().into_iter().zip(v.lanes()).enumerate() {
        if is_snan_f32(x) || is_snan_f32(y) {
            flags = flags | FpFlags::NV;
        }
        let d = x - y;
        if d.is_nan() && !x.is_nan() && !y.is_nan() {
            flags = flags | FpFlags::NV;
        }
        squares[lane] = d * d;
    }

    let sum = squares[1..].iter().fold(squares[0], |acc, &sq| acc + sq);
    let result = sum.sqrt();

    let finite_inputs = u.lanes().iter().chain(v.lanes().iter()).all(|f| f.is_finite());
    if finite_inputs && !result.is_finite() {
        flags = flags | FpFlags::OF;
    }

    (result, flags)
}
