//! One-line assembler for the custom extension.
//!
//! Accepts `<mnemonic> <rd>, <rs1>, <rs2>` with ABI or architectural register
//! names, e.g. `fdist.s fa6, fa0, fa3`. Everything after `#` is a comment.

use thiserror::Error;

use crate::common::Trap;
use crate::isa::abi::{parse_freg, parse_xreg};
use crate::isa::decode::{decode, encode};
use crate::isa::xcustom::{Opcode, OperandClass};

/// Reasons a line fails to assemble.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AsmError {
    /// The line holds no instruction.
    #[error("empty line")]
    Empty,
    /// The mnemonic is not `mod`, `ninst` or `fdist.s`.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),
    /// Wrong number of register operands.
    #[error("`{mnemonic}` takes 3 operands, found {found}")]
    OperandCount {
        /// Mnemonic being assembled.
        mnemonic: &'static str,
        /// Operands actually supplied.
        found: usize,
    },
    /// A register name is unknown or belongs to the wrong register class.
    #[error("`{0}` is not a valid register for this instruction")]
    BadRegister(String),
    /// Fields parse but the encoding is illegal (e.g. `fdist.s` with rs1 = f30).
    #[error("illegal encoding: {0}")]
    Illegal(Trap),
}

/// Assembles one instruction.
pub fn assemble(line: &str) -> Result<u32, AsmError> {
    let text = line.split('#').next().unwrap_or_default().trim();
    let (mnemonic, rest) = text
        .split_once(char::is_whitespace)
        .unwrap_or((text, ""));
    if mnemonic.is_empty() {
        return Err(AsmError::Empty);
    }
    let op = Opcode::from_mnemonic(mnemonic)
        .ok_or_else(|| AsmError::UnknownMnemonic(mnemonic.to_string()))?;

    let operands: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let &[rd, rs1, rs2] = operands.as_slice() else {
        return Err(AsmError::OperandCount {
            mnemonic: op.mnemonic(),
            found: operands.len(),
        });
    };

    let parse = match op.operand_class() {
        OperandClass::IntPair => parse_xreg,
        OperandClass::Vec3Pair => parse_freg,
    };
    let reg = |name: &str| parse(name).ok_or_else(|| AsmError::BadRegister(name.to_string()));

    let raw = encode(op, reg(rd)?, reg(rs1)?, reg(rs2)?);
    decode(raw).map(|_| raw).map_err(AsmError::Illegal)
}
