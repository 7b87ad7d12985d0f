//! Runtime errors for the LS-8 VM.
//!
//! Every error raised while executing an instruction carries that
//! instruction's address (`at`) for debugging.

use ls8_common::DecodeError;
use thiserror::Error;

/// Errors that abort program execution.
///
/// None of these are recoverable: the run loop stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The byte at PC is not a recognized opcode.
    #[error("decode error at address {at:#04x}: {source}")]
    Decode { at: usize, source: DecodeError },

    /// The ALU was asked for an operation it does not implement.
    #[error("unsupported ALU operation '{name}'")]
    UnsupportedAluOperation { name: String },

    /// A memory access fell outside the 256 addressable cells.
    #[error("address {address:#x} out of range (memory holds 256 cells) at address {at:#04x}")]
    AddressOutOfRange { at: usize, address: usize },

    /// A register operand named a register that does not exist.
    #[error("register index {index} out of range (8 registers) at address {at:#04x}")]
    InvalidRegister { at: usize, index: u8 },

    /// The instruction's encoding runs past the top of memory.
    #[error("{len}-byte instruction at {at:#04x} runs past the top of memory")]
    TruncatedInstruction { at: usize, len: usize },

    /// PUSH or CALL with SP already at address 0.
    #[error("stack overflow at address {at:#04x}")]
    StackOverflow { at: usize },

    /// POP or RET with SP already at the top of memory.
    #[error("stack underflow at address {at:#04x}")]
    StackUnderflow { at: usize },

    /// The program image does not fit in memory.
    #[error("program is {len} bytes (memory holds 256)")]
    ProgramTooLarge { len: usize },

    /// Writing PRN output failed.
    #[error("output failed at address {at:#04x}: {reason}")]
    Output { at: usize, reason: String },
}

/// A failed memory or register access, before it is tied to an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Memory address past the last cell.
    #[error("address {0:#x} out of range (memory holds 256 cells)")]
    Address(usize),

    /// Register index past R7.
    #[error("register index {0} out of range (8 registers)")]
    Register(u8),
}

impl AccessError {
    /// Attach the address of the instruction that made the access.
    pub fn at(self, at: usize) -> RuntimeError {
        match self {
            AccessError::Address(address) => RuntimeError::AddressOutOfRange { at, address },
            AccessError::Register(index) => RuntimeError::InvalidRegister { at, index },
        }
    }
}
