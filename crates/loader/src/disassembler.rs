//! Program image to annotated binary text.

use ls8_common::{Instruction, Program};

/// Render every byte as an 8-digit binary line.
///
/// Opcode bytes carry a `# ADDR: INSTRUCTION` comment; operand bytes
/// are bare. Bytes that do not decode are emitted as `# ADDR: data`.
pub(crate) fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    let mut at = 0;

    while at < program.len() {
        match program.instruction_at(at) {
            Ok(instr) => {
                emit_instruction(&mut out, at, &instr, &program.bytes);
                at += instr.opcode.len();
            }
            Err(_) => {
                out.push_str(&format!("{:08b} # {at:02X}: data\n", program.bytes[at]));
                at += 1;
            }
        }
    }

    out
}

fn emit_instruction(out: &mut String, at: usize, instr: &Instruction, bytes: &[u8]) {
    let len = instr.opcode.len();
    out.push_str(&format!("{:08b} # {at:02X}: {instr}\n", bytes[at]));
    for byte in &bytes[at + 1..at + len] {
        out.push_str(&format!("{byte:08b}\n"));
    }
}
