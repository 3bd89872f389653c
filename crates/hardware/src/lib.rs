//! Differential probe for a custom RISC-V arithmetic extension.
//!
//! This crate models three custom instructions and proves an implementation of
//! them against an independent reference:
//! 1. **ISA:** Encoding, decoding and text forms of `mod`, `ninst` and `fdist.s`.
//! 2. **Core:** Integer and FP register files plus the custom execution unit.
//! 3. **Oracle:** The same three operations computed with plain host arithmetic.
//! 4. **Probe:** Operand bank, suites, vector files and the fail-fast harness.
//! 5. **Configuration:** JSON-loadable run settings.

/// Common types (operands, values, traps, register file).
pub mod common;
/// Run configuration.
pub mod config;
/// CPU core (register files, custom execution unit).
pub mod core;
/// Instruction set (custom opcodes, decode, disassembly, assembly).
pub mod isa;
/// Reference oracle.
pub mod oracle;
/// Differential harness and its inputs.
pub mod probe;

/// Root configuration type; use `Config::default()` or `Config::load`.
pub use crate::config::Config;
/// CPU wrapper running encoded custom instructions.
pub use crate::core::Cpu;
/// Reference evaluator.
pub use crate::oracle::Oracle;
