//! LS-8 common types and instruction decoding.
//!
//! This crate provides the foundational data structures for the LS-8
//! instruction set:
//!
//! - [`Opcode`] — the thirteen opcodes and their encoded shape
//! - [`Instruction`] — a decoded one-to-three byte instruction
//! - [`Program`] — a flat byte image loaded at address 0
//! - [`DecodeError`] — errors from decoding byte streams

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::{Program, MEMORY_SIZE};
