//! Opcode dispatching for the VM.
//!
//! This module implements the dispatch step that executes a single resolved
//! instruction, pulling any operand it needs from the rest of the line.

use super::{RuntimeError, VM};
use crate::bytecode::OpCode;
use crate::token::Token;
use crate::vm::opcodes;
use logos::Lexer;

impl VM {
    /// Dispatch and execute a single opcode.
    ///
    /// `rest` is the line's lexer, positioned just past the mnemonic. Only
    /// `push` consumes a further token; trailing tokens on any line are
    /// ignored, matching the file format. Handler errors are returned to
    /// the run loop untouched.
    pub(super) fn dispatch_opcode(
        &mut self,
        instruction: OpCode,
        rest: &mut Lexer<'_, Token>,
    ) -> Result<(), RuntimeError> {
        match instruction {
            OpCode::Push => {
                let arg = match rest.next() {
                    Some(Ok(Token::Integer(value))) => Some(value),
                    _ => None,
                };
                opcodes::stack_ops::op_push(&mut self.stack, arg, self.line)
            }
            OpCode::Pall => {
                opcodes::io::op_pall(&self.stack);
                Ok(())
            }
            OpCode::Pint => opcodes::io::op_pint(&self.stack, self.line),
            OpCode::Pop => opcodes::stack_ops::op_pop(&mut self.stack, self.line),
            OpCode::Swap => opcodes::stack_ops::op_swap(&mut self.stack, self.line),
            OpCode::Add => opcodes::arithmetic::op_add(&mut self.stack, self.line),
        }
    }
}
