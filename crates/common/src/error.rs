//! Decode errors for LS-8 instruction streams.

use thiserror::Error;

/// Errors that occur while decoding bytes into instructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte is not one of the recognized opcodes.
    #[error("unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),

    /// Instruction needs more bytes than remain in the image.
    #[error("instruction at {at:#04x} needs {needed} bytes past the end of the image")]
    Truncated { at: usize, needed: usize },
}
