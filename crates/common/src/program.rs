//! Program image representation.

use crate::error::DecodeError;
use crate::instruction::Instruction;

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// A flat byte image, loaded into memory starting at address 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The raw bytes, instructions and data alike.
    pub bytes: Vec<u8>,
}

impl Program {
    /// Create a program from a byte image.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Number of bytes in the image.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the image has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the image fits in machine memory.
    pub fn fits_in_memory(&self) -> bool {
        self.bytes.len() <= MEMORY_SIZE
    }

    /// Decode the instruction at `at`.
    pub fn instruction_at(&self, at: usize) -> Result<Instruction, DecodeError> {
        Instruction::decode(&self.bytes, at)
    }
}

impl From<Vec<u8>> for Program {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;

    #[test]
    fn empty_program() {
        let program = Program::default();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert!(program.fits_in_memory());
    }

    #[test]
    fn full_memory_fits() {
        assert!(Program::new(vec![0; MEMORY_SIZE]).fits_in_memory());
        assert!(!Program::new(vec![0; MEMORY_SIZE + 1]).fits_in_memory());
    }

    #[test]
    fn instruction_at_walks_variable_lengths() {
        let program = Program::from(vec![0x82, 0, 8, 0x47, 0, 0x01]);
        let mut at = 0;
        let mut seen = Vec::new();
        while at < program.len() {
            let instr = program.instruction_at(at).unwrap();
            seen.push(instr.opcode);
            at += instr.opcode.len();
        }
        assert_eq!(seen, vec![Opcode::Ldi, Opcode::Prn, Opcode::Hlt]);
    }
}
