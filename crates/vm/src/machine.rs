//! VM state management: memory, registers, flags, PC, stack.

use crate::error::{AccessError, RuntimeError};
use crate::flags::Flags;
use crate::memory::Memory;
use crate::registers::{RegisterFile, REGISTER_COUNT};
use ls8_common::{Program, MEMORY_SIZE};

/// The LS-8 virtual machine.
///
/// Owns all mutable state. Built from a [`Program`] with PC at 0, every
/// register zero except SP, and all flags clear.
#[derive(Debug, Clone)]
pub struct VM {
    /// Unified program and stack memory.
    pub(crate) memory: Memory,
    /// General-purpose registers, R7 is SP.
    pub(crate) registers: RegisterFile,
    /// Flags from the most recent CMP.
    pub(crate) flags: Flags,
    /// Address of the next opcode byte to fetch.
    pub(crate) pc: usize,
    /// Set by HLT; terminal.
    pub(crate) halted: bool,
    /// Instructions executed so far.
    pub(crate) steps: u64,
}

impl VM {
    /// Create a new VM with `program` loaded at address 0.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::ProgramTooLarge`] if the image exceeds memory.
    pub fn new(program: &Program) -> Result<Self, RuntimeError> {
        let mut memory = Memory::new();
        memory.load(program)?;
        tracing::debug!(bytes = program.len(), "program loaded");

        Ok(Self {
            memory,
            registers: RegisterFile::new(),
            flags: Flags::default(),
            pc: 0,
            halted: false,
            steps: 0,
        })
    }

    /// Address of the next instruction.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Value in register `index`.
    pub fn register(&self, index: u8) -> Result<u8, AccessError> {
        self.registers.get(index)
    }

    /// All registers, R0 first.
    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        self.registers.as_array()
    }

    /// Current condition flags.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// The machine's memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Whether HLT has executed.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of instructions executed.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Register read on behalf of the instruction at PC.
    pub(crate) fn reg(&self, index: u8) -> Result<u8, RuntimeError> {
        self.registers.get(index).map_err(|e| e.at(self.pc))
    }

    /// Register write on behalf of the instruction at PC.
    pub(crate) fn set_reg(&mut self, index: u8, value: u8) -> Result<(), RuntimeError> {
        let at = self.pc;
        self.registers.set(index, value).map_err(|e| e.at(at))
    }

    /// Reject a register operand before any state changes.
    pub(crate) fn check_reg(&self, index: u8) -> Result<(), RuntimeError> {
        self.registers
            .check(index)
            .map(|_| ())
            .map_err(|e| e.at(self.pc))
    }

    /// Decrement SP, then store `value` at the new stack top.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), RuntimeError> {
        let sp = self
            .registers
            .sp()
            .checked_sub(1)
            .ok_or(RuntimeError::StackOverflow { at: self.pc })?;
        self.registers.set_sp(sp);
        self.memory
            .write(sp as usize, value)
            .map_err(|e| e.at(self.pc))?;
        Ok(())
    }

    /// Read the stack top, then increment SP.
    pub(crate) fn pop(&mut self) -> Result<u8, RuntimeError> {
        let sp = self.registers.sp();
        let next = sp
            .checked_add(1)
            .ok_or(RuntimeError::StackUnderflow { at: self.pc })?;
        let value = self
            .memory
            .read(sp as usize)
            .map_err(|e| e.at(self.pc))?;
        self.registers.set_sp(next);
        Ok(value)
    }

    /// Fetch the opcode at PC plus the two following bytes.
    ///
    /// The opcode read is checked; operand bytes past the top of memory
    /// read as 0 and are validated after decode.
    pub(crate) fn fetch(&self) -> Result<(u8, u8, u8), RuntimeError> {
        let opcode = self.memory.read(self.pc).map_err(|e| e.at(self.pc))?;
        Ok((
            opcode,
            self.memory.peek(self.pc + 1),
            self.memory.peek(self.pc + 2),
        ))
    }

    /// One line of machine state, in the classic LS-8 trace layout:
    ///
    /// ```text
    /// PC | OP A B | R0 R1 R2 R3 R4 R5 R6 R7 | FL
    /// ```
    pub fn trace_line(&self) -> String {
        let mut line = format!(
            "{:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.memory.peek(self.pc),
            self.memory.peek(self.pc + 1),
            self.memory.peek(self.pc + 2),
        );
        for reg in self.registers.as_array() {
            line.push_str(&format!(" {reg:02X}"));
        }
        line.push_str(&format!(" | {:02X}", self.flags.bits()));
        line
    }

    /// Whether an instruction of `len` bytes at `at` fits in memory.
    pub(crate) fn fits(at: usize, len: usize) -> bool {
        at + len <= MEMORY_SIZE
    }
}
