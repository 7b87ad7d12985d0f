//! Error types for the LS-8 program loader.

use thiserror::Error;

/// Errors produced while loading program text into a byte image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A line's content is not a base-2 literal.
    #[error("line {line}: invalid binary literal '{token}'")]
    InvalidBinary { line: usize, token: String },

    /// A base-2 literal does not fit in 8 bits.
    #[error("line {line}: binary literal '{token}' does not fit in 8 bits")]
    ValueOutOfRange { line: usize, token: String },

    /// The program has more bytes than memory has cells.
    #[error("program is {len} bytes (memory holds 256)")]
    ProgramTooLarge { len: usize },
}
