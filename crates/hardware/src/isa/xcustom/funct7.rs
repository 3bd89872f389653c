//! Custom Extension Function Codes (funct7).

/// The only funct7 value the extension defines. Any other value is illegal.
pub const XCUSTOM: u32 = 0b0000000;
