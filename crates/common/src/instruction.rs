//! Instruction decoding for the LS-8 instruction set.
//!
//! Instructions are variable length, one to three bytes:
//! ```text
//! Byte 0: opcode
//! Byte 1: operand A (register index)           if operand_count >= 1
//! Byte 2: operand B (register index/immediate) if operand_count == 2
//! ```

use std::fmt;

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// A single decoded LS-8 instruction.
///
/// Operands the opcode does not use are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// First operand. Always a register index when present.
    pub operand_a: u8,
    /// Second operand. A register index, or the immediate for LDI.
    pub operand_b: u8,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, operand_a: u8, operand_b: u8) -> Self {
        Self {
            opcode,
            operand_a,
            operand_b,
        }
    }

    /// Encode to `opcode.len()` bytes. Unused operands are dropped.
    pub fn encode(&self) -> Vec<u8> {
        let bytes = [self.opcode as u8, self.operand_a, self.operand_b];
        bytes[..self.opcode.len()].to_vec()
    }

    /// Decode the instruction starting at `at` in `bytes`.
    ///
    /// Only the operand bytes the opcode declares are read.
    pub fn decode(bytes: &[u8], at: usize) -> Result<Self, DecodeError> {
        let first = *bytes
            .get(at)
            .ok_or(DecodeError::Truncated { at, needed: 1 })?;
        let opcode = Opcode::try_from(first)?;
        let len = opcode.len();
        if at + len > bytes.len() {
            return Err(DecodeError::Truncated { at, needed: len });
        }

        let operand = |i: usize| if i < len { bytes[at + i] } else { 0 };
        Ok(Self {
            opcode,
            operand_a: operand(1),
            operand_b: operand(2),
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.opcode.mnemonic();
        match self.opcode {
            Opcode::Hlt | Opcode::Ret => write!(f, "{m}"),
            Opcode::Ldi => write!(f, "{m} R{}, {}", self.operand_a, self.operand_b),
            Opcode::Add | Opcode::Mul | Opcode::Cmp => {
                write!(f, "{m} R{}, R{}", self.operand_a, self.operand_b)
            }
            Opcode::Prn
            | Opcode::Push
            | Opcode::Pop
            | Opcode::Call
            | Opcode::Jmp
            | Opcode::Jeq
            | Opcode::Jne => write!(f, "{m} R{}", self.operand_a),
        }
    }
}
