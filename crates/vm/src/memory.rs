//! The 256-cell unified address space.

use crate::error::{AccessError, RuntimeError};
use ls8_common::{Program, MEMORY_SIZE};

/// Byte-addressed RAM holding both the program image and the stack.
///
/// Every access is bounds-checked and reports [`AccessError::Address`]
/// instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zero-filled memory.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Copy the program image into memory starting at address 0.
    pub fn load(&mut self, program: &Program) -> Result<(), RuntimeError> {
        if !program.fits_in_memory() {
            return Err(RuntimeError::ProgramTooLarge { len: program.len() });
        }
        self.cells[..program.len()].copy_from_slice(&program.bytes);
        Ok(())
    }

    /// Read the cell at `address`.
    pub fn read(&self, address: usize) -> Result<u8, AccessError> {
        self.cells
            .get(address)
            .copied()
            .ok_or(AccessError::Address(address))
    }

    /// Write `value` to `address` and return the stored value.
    pub fn write(&mut self, address: usize, value: u8) -> Result<u8, AccessError> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(AccessError::Address(address))?;
        *cell = value;
        Ok(*cell)
    }

    /// Read for operand prefetch: cells past the top read as 0.
    pub(crate) fn peek(&self, address: usize) -> u8 {
        self.cells.get(address).copied().unwrap_or(0)
    }

    /// The whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
