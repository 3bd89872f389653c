//! General-Purpose Register File.
//!
//! This module implements the integer register file the custom instructions read
//! their operands from. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`), 32 bits wide.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides a formatted dump of the complete register state.

use std::fmt;

/// Number of architectural integer registers.
pub const GPR_COUNT: usize = 32;

/// General-Purpose Register file.
///
/// Contains 32 integer registers. Register `x0` is hardwired to zero and
/// cannot be modified.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; GPR_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register. Register `x0` always returns 0.
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register. Writes to `x0` are dropped.
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..GPR_COUNT).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
