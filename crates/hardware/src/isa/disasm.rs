//! Instruction Disassembler for the custom extension.
//!
//! Converts a 32-bit encoding into a mnemonic string for trace output and
//! mismatch diagnostics.
//!
//! # Usage
//!
//! ```
//! use xprobe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00B5_060B), "mod a2, a0, a1");
//! ```

use crate::isa::abi::{freg_name, xreg_name};
use crate::isa::decode::decode;
use crate::isa::xcustom::OperandClass;

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"ninst a0, a1, a2"` or `"unknown"` for anything
/// the decoder rejects.
pub fn disassemble(inst: u32) -> String {
    let Ok(d) = decode(inst) else {
        return "unknown".to_string();
    };
    let reg = match d.op.operand_class() {
        OperandClass::IntPair => xreg_name,
        OperandClass::Vec3Pair => freg_name,
    };
    format!(
        "{} {}, {}, {}",
        d.op.mnemonic(),
        reg(d.rd),
        reg(d.rs1),
        reg(d.rs2)
    )
}
