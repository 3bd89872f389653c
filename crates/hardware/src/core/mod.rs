//! Processor core: architectural state, the CPU wrapper and functional units.

/// Register files.
pub mod arch;

/// CPU state and single-instruction execution.
pub mod cpu;

/// Functional units (custom execution unit, FP helpers).
pub mod units;

pub use cpu::Cpu;
