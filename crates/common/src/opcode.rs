//! Opcode definitions for the LS-8 instruction set.
//!
//! Every opcode byte carries its own shape:
//! ```text
//! AABCDDDD
//! AA   number of operand bytes (0-2)
//! B    ALU operation
//! C    instruction sets PC itself
//! DDDD instruction identifier
//! ```

use crate::error::DecodeError;

/// Identifies the operation to perform.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Machine control
    /// Halt the machine.
    Hlt = 0b0000_0001,

    // Registers and output
    /// Load an immediate into a register.
    Ldi = 0b1000_0010,
    /// Print a register as a decimal integer.
    Prn = 0b0100_0111,

    // ALU
    /// `reg[a] += reg[b]`, wrapping.
    Add = 0b1010_0000,
    /// `reg[a] *= reg[b]`, wrapping.
    Mul = 0b1010_0010,
    /// Compare two registers and set the flags.
    Cmp = 0b1010_0111,

    // Stack
    /// Push a register onto the stack.
    Push = 0b0100_0101,
    /// Pop the stack top into a register.
    Pop = 0b0100_0110,
    /// Push the return address and jump to a register.
    Call = 0b0101_0000,
    /// Pop the return address into PC.
    Ret = 0b0001_0001,

    // Branches
    /// Unconditional jump to a register.
    Jmp = 0b0101_0100,
    /// Jump if the equal flag is set.
    Jeq = 0b0101_0101,
    /// Jump if the equal flag is clear.
    Jne = 0b0101_0110,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 13] = [
    Opcode::Hlt,
    Opcode::Ldi,
    Opcode::Prn,
    Opcode::Add,
    Opcode::Mul,
    Opcode::Cmp,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Call,
    Opcode::Ret,
    Opcode::Jmp,
    Opcode::Jeq,
    Opcode::Jne,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Opcode::Hlt),
            0x82 => Ok(Opcode::Ldi),
            0x47 => Ok(Opcode::Prn),
            0xA0 => Ok(Opcode::Add),
            0xA2 => Ok(Opcode::Mul),
            0xA7 => Ok(Opcode::Cmp),
            0x45 => Ok(Opcode::Push),
            0x46 => Ok(Opcode::Pop),
            0x50 => Ok(Opcode::Call),
            0x11 => Ok(Opcode::Ret),
            0x54 => Ok(Opcode::Jmp),
            0x55 => Ok(Opcode::Jeq),
            0x56 => Ok(Opcode::Jne),
            _ => Err(DecodeError::UnknownOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Cmp => "CMP",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
        }
    }

    /// Number of operand bytes following the opcode.
    pub fn operand_count(&self) -> usize {
        (*self as u8 >> 6) as usize
    }

    /// Bytes consumed by the instruction, opcode included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.operand_count() + 1
    }
}
