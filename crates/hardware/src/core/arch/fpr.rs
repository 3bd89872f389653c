//! Floating-Point Register File.
//!
//! Holds 32 single-precision registers (`f0`-`f31`). Values are stored as raw
//! IEEE 754 bits so that a write followed by a read is bit-exact, NaN payloads
//! included.

/// Number of architectural floating-point registers.
pub const FPR_COUNT: usize = 32;

/// Floating-Point Register file.
#[derive(Clone, Debug, Default)]
pub struct Fpr {
    fregs: [u32; FPR_COUNT],
}

impl Fpr {
    /// Reads a register as raw single-precision bits.
    pub const fn read(&self, idx: usize) -> u32 {
        self.fregs[idx]
    }

    /// Writes raw single-precision bits to a register.
    pub const fn write(&mut self, idx: usize, val: u32) {
        self.fregs[idx] = val;
    }
}
