//! Fetch–decode–execute loop and opcode dispatch for the LS-8 VM.

use std::io::Write;

use crate::alu::AluOp;
use crate::error::RuntimeError;
use crate::machine::VM;
use ls8_common::Opcode;

impl VM {
    /// Execute until HLT or error, writing PRN output to `out`.
    pub fn execute<W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        while !self.halted {
            self.step(out)?;
        }
        tracing::debug!(pc = self.pc, steps = self.steps, "halted");
        Ok(())
    }

    /// Execute a single instruction. Does nothing once halted.
    ///
    /// HLT leaves PC on its own address.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        if self.halted {
            return Ok(());
        }
        tracing::trace!("{}", self.trace_line());

        let at = self.pc;
        let (byte, operand_a, operand_b) = self.fetch()?;
        let opcode =
            Opcode::try_from(byte).map_err(|source| RuntimeError::Decode { at, source })?;
        let len = opcode.len();
        if !VM::fits(at, len) {
            return Err(RuntimeError::TruncatedInstruction { at, len });
        }

        let mut next_pc = at + len;

        match opcode {
            Opcode::Hlt => {
                self.halted = true;
                next_pc = at;
            }
            Opcode::Ldi => self.set_reg(operand_a, operand_b)?,
            Opcode::Prn => {
                let value = self.reg(operand_a)?;
                writeln!(out, "{value}").map_err(|e| RuntimeError::Output {
                    at,
                    reason: e.to_string(),
                })?;
            }

            // ALU
            Opcode::Add => self.alu(AluOp::Add, operand_a, operand_b)?,
            Opcode::Mul => self.alu(AluOp::Mul, operand_a, operand_b)?,
            Opcode::Cmp => self.alu(AluOp::Cmp, operand_a, operand_b)?,

            // Stack
            Opcode::Push => {
                let value = self.reg(operand_a)?;
                self.push(value)?;
            }
            Opcode::Pop => {
                self.check_reg(operand_a)?;
                let value = self.pop()?;
                self.set_reg(operand_a, value)?;
            }
            Opcode::Call => {
                let target = self.reg(operand_a)?;
                let ret = u8::try_from(next_pc).map_err(|_| RuntimeError::AddressOutOfRange {
                    at,
                    address: next_pc,
                })?;
                self.push(ret)?;
                next_pc = target as usize;
            }
            Opcode::Ret => next_pc = self.pop()? as usize,

            // Branches
            Opcode::Jmp => next_pc = self.reg(operand_a)? as usize,
            Opcode::Jeq => {
                let target = self.reg(operand_a)?;
                if self.flags.equal() {
                    next_pc = target as usize;
                }
            }
            Opcode::Jne => {
                let target = self.reg(operand_a)?;
                if !self.flags.equal() {
                    next_pc = target as usize;
                }
            }
        }

        self.pc = next_pc;
        self.steps += 1;
        Ok(())
    }
}
