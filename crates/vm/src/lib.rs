//! LS-8 virtual machine — executes byte-encoded register programs.
//!
//! The VM is a register machine with:
//! - 256 bytes of unified program/stack memory
//! - Eight 8-bit registers, R7 being the stack pointer
//! - Equal/Less/Greater flags written only by CMP
//!
//! # Usage
//!
//! ```
//! use ls8_common::Program;
//! use ls8_vm::run;
//!
//! // LDI R0,8  LDI R1,9  MUL R0,R1  PRN R0  HLT
//! let program = Program::new(vec![
//!     0x82, 0, 8,
//!     0x82, 1, 9,
//!     0xA2, 0, 1,
//!     0x47, 0,
//!     0x01,
//! ]);
//!
//! let mut out = Vec::new();
//! let vm = run(&program, &mut out).unwrap();
//! assert_eq!(out, b"72\n");
//! assert!(vm.is_halted());
//! ```

pub mod alu;
pub mod error;
pub mod execute;
pub mod flags;
pub mod machine;
pub mod memory;
pub mod registers;

pub use alu::AluOp;
pub use error::{AccessError, RuntimeError};
pub use flags::Flags;
pub use machine::VM;
pub use memory::Memory;
pub use registers::{RegisterFile, REGISTER_COUNT, SP, STACK_TOP};

use std::io::Write;

use ls8_common::Program;

/// Execute a program and return the halted machine.
///
/// PRN output is written to `out`, one decimal value per line.
///
/// # Errors
///
/// Returns [`RuntimeError`] if the program does not fit in memory or
/// execution hits a fatal condition (unknown opcode, bad register,
/// stack overflow, etc.).
pub fn run<W: Write>(program: &Program, out: &mut W) -> Result<VM, RuntimeError> {
    let mut vm = VM::new(program)?;
    vm.execute(out)?;
    Ok(vm)
}
