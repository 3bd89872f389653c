//! Custom Extension Function Codes (funct3).
//!
//! Selects the operation when `opcode == OP_CUSTOM_0` and `funct7 == XCUSTOM`.

/// Truncating signed remainder (`mod rd, rs1, rs2`).
pub const MOD: u32 = 0b000;

/// Wrapping subtraction (`ninst rd, rs1, rs2`).
pub const NINST: u32 = 0b001;

/// Three-lane single-precision Euclidean distance (`fdist.s rd, rs1, rs2`).
pub const FDIST_S: u32 = 0b010;
