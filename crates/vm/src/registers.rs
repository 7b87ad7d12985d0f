//! General-purpose register file.

use crate::error::AccessError;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer: the stack grows down from the top of memory.
pub const STACK_TOP: u8 = 0xFF;

/// Eight 8-bit registers; R7 doubles as the stack pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// All registers zero except SP, which starts at [`STACK_TOP`].
    pub fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP as usize] = STACK_TOP;
        Self { regs }
    }

    /// Validate a register index.
    pub fn check(&self, index: u8) -> Result<usize, AccessError> {
        let idx = index as usize;
        if idx < REGISTER_COUNT {
            Ok(idx)
        } else {
            Err(AccessError::Register(index))
        }
    }

    /// Returns the value in register `index`.
    pub fn get(&self, index: u8) -> Result<u8, AccessError> {
        let idx = self.check(index)?;
        Ok(self.regs[idx])
    }

    /// Store `value` in register `index`.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), AccessError> {
        let idx = self.check(index)?;
        self.regs[idx] = value;
        Ok(())
    }

    /// Current stack pointer.
    pub fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    pub(crate) fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }

    /// Snapshot of all registers, R0 first.
    pub fn as_array(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
