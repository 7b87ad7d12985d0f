//! LS-8 program loader — binary-literal text ↔ byte image.
//!
//! The program format is one byte per line written in base 2. `#` starts
//! a comment; blank lines are skipped. Bytes are placed contiguously from
//! address 0 in line order.
//!
//! # Usage
//!
//! ```
//! use ls8_loader::{disassemble, load};
//!
//! let text = "#print 8\n10000010 # LDI R0,8\n00000000\n00001000\n\n01000111 # PRN R0\n00000000\n00000001\n";
//! let program = load(text).unwrap();
//! assert_eq!(program.bytes, vec![0x82, 0, 8, 0x47, 0, 0x01]);
//! assert_eq!(load(&disassemble(&program)).unwrap(), program);
//! ```

pub mod error;

mod disassembler;
mod lexer;

pub use error::LoadError;

use lexer::parse_line;
use ls8_common::Program;

/// Load program text into a byte image.
///
/// Returns the first error encountered.
pub fn load(text: &str) -> Result<Program, LoadError> {
    let mut bytes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        if let Some(byte) = parse_line(line, line_num)? {
            bytes.push(byte);
        }
    }

    let program = Program::new(bytes);
    if !program.fits_in_memory() {
        return Err(LoadError::ProgramTooLarge { len: program.len() });
    }

    Ok(program)
}

/// Disassemble a byte image into loadable, annotated text.
///
/// `load(&disassemble(p)) == p` holds for every program that fits in memory.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_common::MEMORY_SIZE;

    #[test]
    fn load_minimal() {
        let program = load("00000001\n").unwrap();
        assert_eq!(program.bytes, vec![0x01]);
    }

    #[test]
    fn load_skips_comments_and_blanks() {
        let text = "\
# header comment

10000010 # LDI
00000000
   # indented comment
00001000
";
        let program = load(text).unwrap();
        assert_eq!(program.bytes, vec![0x82, 0, 8]);
    }

    #[test]
    fn load_empty_text() {
        assert!(load("").unwrap().is_empty());
        assert!(load("# nothing\n\n").unwrap().is_empty());
    }

    #[test]
    fn load_crlf_lines() {
        let program = load("10000010\r\n00000000\r\n").unwrap();
        assert_eq!(program.bytes, vec![0x82, 0]);
    }

    #[test]
    fn error_reports_correct_line() {
        let text = "00000001\n\n# c\nabc\n";
        let err = load(text).unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidBinary {
                line: 4,
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn full_memory_loads() {
        let text = "00000000\n".repeat(MEMORY_SIZE);
        assert_eq!(load(&text).unwrap().len(), MEMORY_SIZE);
    }

    #[test]
    fn oversized_program_is_rejected() {
        let text = "00000000\n".repeat(MEMORY_SIZE + 1);
        assert_eq!(
            load(&text).unwrap_err(),
            LoadError::ProgramTooLarge {
                len: MEMORY_SIZE + 1
            }
        );
    }

    #[test]
    fn disassembly_reloads() {
        let original = Program::new(vec![0x82, 0, 5, 0x82, 1, 5, 0xA7, 0, 1, 0xFF, 0x01]);
        let text = disassemble(&original);
        assert_eq!(load(&text).unwrap(), original);
    }
}
