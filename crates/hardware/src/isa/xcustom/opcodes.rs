//! Custom Extension Opcodes.
//!
//! All three instructions live in the `custom-0` major opcode space that the
//! base ISA reserves for vendor extensions.

/// Major opcode `custom-0` (bits 6-0).
pub const OP_CUSTOM_0: u32 = 0b0001011;
