//! CLI command implementations.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ls8_common::Program;

/// Load and execute a program file, printing PRN output to stdout.
pub fn run(path: &Path) -> Result<(), i32> {
    let program = read_program(path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_to(&program, &mut out)
}

/// Execute `program`, writing PRN output to `out` and flushing it at the end.
///
/// Runtime faults and a failed final flush both map to exit code 3.
fn execute_to<W: Write>(program: &Program, out: &mut W) -> Result<(), i32> {
    let result = ls8_vm::run(program, out);
    let flushed = out.flush();

    match result {
        Ok(vm) => tracing::debug!(steps = vm.steps(), "program finished"),
        Err(e) => {
            eprintln!("runtime error: {e}");
            return Err(3);
        }
    }

    flushed.map_err(|e| {
        eprintln!("runtime error: cannot flush output: {e}");
        3
    })
}

/// Print an annotated listing of a program file.
pub fn disassemble(path: &Path) -> Result<(), i32> {
    let program = read_program(path)?;
    print!("{}", ls8_loader::disassemble(&program));
    Ok(())
}

/// Read and load a program file.
fn read_program(path: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    let program = ls8_loader::load(&text).map_err(|e| {
        eprintln!("error: {}: {e}", path.display());
        1
    })?;

    tracing::debug!(path = %path.display(), bytes = program.len(), "loaded program");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts writes but fails every flush.
    struct BrokenFlush(Vec<u8>);

    impl Write for BrokenFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn print8() -> Program {
        Program::new(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01])
    }

    #[test]
    fn clean_halt_is_ok() {
        let mut out = Vec::new();
        assert_eq!(execute_to(&print8(), &mut out), Ok(()));
        assert_eq!(out, b"8\n");
    }

    #[test]
    fn failed_flush_is_a_runtime_error() {
        let mut out = BrokenFlush(Vec::new());
        assert_eq!(execute_to(&print8(), &mut out), Err(3));
        assert_eq!(out.0, b"8\n");
    }

    #[test]
    fn runtime_fault_is_exit_three() {
        let mut out = Vec::new();
        assert_eq!(execute_to(&Program::new(vec![0x47, 0x09, 0x01]), &mut out), Err(3));
        assert!(out.is_empty());
    }
}
