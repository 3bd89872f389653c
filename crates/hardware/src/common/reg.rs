//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which acts as a unified interface for
//! the state the custom execution unit reads and writes. It provides:
//! 1. **Unified Storage:** Integer registers, FP registers, and the accrued `fflags`.
//! 2. **Typed Access:** Reads and writes of `i32` / `f32` values by register class.
//! 3. **Observability:** A formatted dump of the integer bank for trap diagnostics.

use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;
use crate::core::units::fpu::exception_flags::FpFlags;

/// Unified register file containing integer registers, FP registers and `fflags`.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
    fflags: FpFlags,
}

impl RegisterFile {
    /// Creates a register file with every register and flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register as raw bits. `x0` always reads 0.
    pub const fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes raw bits to a general-purpose register. Writes to `x0` are ignored.
    pub const fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Reads a general-purpose register as a signed 32-bit operand.
    pub const fn read_i32(&self, idx: usize) -> i32 {
        self.gpr.read(idx) as i32
    }

    /// Writes a signed 32-bit value to a general-purpose register.
    pub const fn write_i32(&mut self, idx: usize, val: i32) {
        self.gpr.write(idx, val as u32);
    }

    /// Reads a floating-point register as raw bits.
    pub const fn read_f(&self, idx: usize) -> u32 {
        self.fpr.read(idx)
    }

    /// Reads a floating-point register as an `f32`.
    pub const fn read_f32(&self, idx: usize) -> f32 {
        f32::from_bits(self.fpr.read(idx))
    }

    /// Writes an `f32` to a floating-point register, preserving its exact bits.
    pub const fn write_f32(&mut self, idx: usize, val: f32) {
        self.fpr.write(idx, val.to_bits());
    }

    /// Returns the accrued floating-point exception flags.
    pub const fn fflags(&self) -> FpFlags {
        self.fflags
    }

    /// ORs newly raised flags into `fflags`.
    pub fn accrue(&mut self, flags: FpFlags) {
        self.fflags = self.fflags | flags;
    }

    /// Clears the accrued flags.
    pub const fn clear_fflags(&mut self) {
        self.fflags = FpFlags::NONE;
    }

    /// Formats the integer bank for diagnostics.
    pub fn dump(&self) -> String {
        self.gpr.to_string()
    }
}
