//! Instruction Set Architecture (ISA) Definitions.
//!
//! Covers only the custom extension under test; the base ISA is assumed and
//! never decoded.
//!
//! # Modules
//!
//! * `xcustom`: Opcode, funct3 and funct7 values for MOD, NINST and FDIST.S.
//! * `decode`: Encoding to [`Decoded`](instruction::Decoded) and back.
//! * `disasm` / `asm`: Text forms of the three instructions.

/// Application Binary Interface (ABI) register names.
pub mod abi;

/// One-line assembler.
pub mod asm;

/// Decoder and encoder for the custom instructions.
pub mod decode;

/// Instruction disassembler for trace output and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded instruction type.
pub mod instruction;

/// The custom arithmetic extension (MOD, NINST, FDIST.S).
pub mod xcustom;
