//! Arithmetic/logic unit: ADD, MUL and CMP over register pairs.

use std::str::FromStr;

use crate::error::RuntimeError;
use crate::flags::Flags;
use crate::machine::VM;

/// Operations the ALU implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `reg[a] = reg[a] + reg[b]` modulo 256.
    Add,
    /// `reg[a] = reg[a] * reg[b]` modulo 256.
    Mul,
    /// Set the flags from `reg[a].cmp(&reg[b])`.
    Cmp,
}

impl FromStr for AluOp {
    type Err = RuntimeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ADD" => Ok(AluOp::Add),
            "MUL" => Ok(AluOp::Mul),
            "CMP" => Ok(AluOp::Cmp),
            _ => Err(RuntimeError::UnsupportedAluOperation {
                name: name.to_string(),
            }),
        }
    }
}

impl VM {
    /// Run an ALU operation on registers `reg_a` and `reg_b`.
    ///
    /// Only ADD and MUL write a register (always `reg_a`); only CMP
    /// touches the flags.
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), RuntimeError> {
        let a = self.reg(reg_a)?;
        let b = self.reg(reg_b)?;

        match op {
            AluOp::Add => self.set_reg(reg_a, a.wrapping_add(b)),
            AluOp::Mul => self.set_reg(reg_a, a.wrapping_mul(b)),
            AluOp::Cmp => {
                self.flags = Flags::from_ordering(a.cmp(&b));
                Ok(())
            }
        }
    }
}
