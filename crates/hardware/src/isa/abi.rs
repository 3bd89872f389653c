//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps register indices to their ABI names for disassembly, and parses both
//! ABI names (`a0`, `fa3`) and architectural names (`x10`, `f13`) for the
//! assembler.

/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument, a1).
pub const REG_A1: usize = 11;
/// Register x12 (third argument, a2).
pub const REG_A2: usize = 12;

/// Register f10 (first FP argument, fa0).
pub const FREG_FA0: usize = 10;
/// Register f13 (fourth FP argument, fa3).
pub const FREG_FA3: usize = 13;
/// Register f16 (seventh FP argument, fa6).
pub const FREG_FA6: usize = 16;

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// ABI register names for f0–f31.
const FREG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", "fs0", "fs1", "fa0", "fa1", "fa2",
    "fa3", "fa4", "fa5", "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", "fs8", "fs9",
    "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// Returns the ABI name for an integer register index.
#[inline]
pub fn xreg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Returns the ABI name for a floating-point register index.
#[inline]
pub fn freg_name(idx: usize) -> &'static str {
    FREG_NAMES.get(idx).copied().unwrap_or("f??")
}

/// Parses an integer register name (`a0`, `x10`, and `fp` as an alias of `s0`).
pub fn parse_xreg(name: &str) -> Option<usize> {
    if name == "fp" {
        return Some(8);
    }
    REG_NAMES
        .iter()
        .position(|&n| n == name)
        .or_else(|| numbered(name, 'x'))
}

/// Parses a floating-point register name (`fa0`, `f10`).
pub fn parse_freg(name: &str) -> Option<usize> {
    FREG_NAMES
        .iter()
        .position(|&n| n == name)
        .or_else(|| numbered(name, 'f'))
}

fn numbered(name: &str, prefix: char) -> Option<usize> {
    let digits = name.strip_prefix(prefix)?;
    if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&idx| idx < 32)
}
