//! CPU Core Definition.
//!
//! The `Cpu` is the "hardware" side of the probe: it owns the architectural
//! register file and runs encoded custom instructions through the decoder and
//! the execution unit, the way an extended core would.

/// Instruction execution.
pub mod execution;

use crate::common::RegisterFile;
use crate::config::Config;

/// Processor state for running custom instructions.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// General purpose and floating point registers.
    pub regs: RegisterFile,
    /// Emit a trace event for every executed instruction.
    pub trace: bool,
    /// Instructions retired without a trap.
    pub retired: u64,
}

impl Cpu {
    /// Creates a CPU with cleared registers.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            trace: config.general.trace_instructions,
            retired: 0,
        }
    }

    /// Formats the integer register file for diagnostics.
    pub fn dump_state(&self) -> String {
        self.regs.dump()
    }
}
