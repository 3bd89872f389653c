//! Single-instruction execution.
//!
//! Decodes one encoding, executes it on the custom unit, and counts it as
//! retired. A trap leaves every register except `fflags` untouched.

use tracing::trace;

use super::Cpu;
use crate::common::Trap;
use crate::core::units::xu::Xu;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Decodes and executes one 32-bit instruction.
    ///
    /// # Errors
    ///
    /// `Trap::IllegalInstruction` for encodings outside the extension, or
    /// whatever fault the execution unit raises.
    pub fn step(&mut self, inst: u32) -> Result<(), Trap> {
        let decoded = decode(inst)?;
        if self.trace {
            trace!(inst, asm = %disassemble(inst), "execute");
        }
        Xu::execute(&decoded, &mut self.regs)?;
        self.retired += 1;
        Ok(())
    }
}
