mod opcode_dispatcher;
pub mod opcodes;
pub mod stack_ops;

use crate::bytecode::OpCode;
use crate::token::Token;
use logos::Logos;
use stack_ops::Stack;
use std::fmt;

/// The bytecode virtual machine: a single integer stack plus the one-based
/// line counter used for diagnostics.
pub struct VM {
    stack: Stack,
    line: u32,
}

/// A fatal condition raised while executing bytecode. Every variant carries
/// the line it was raised on; the `Display` impl produces the exact
/// diagnostic line that belongs on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    UnknownInstruction { line: u32, opcode: String },
    PushUsage { line: u32 },
    PintEmptyStack { line: u32 },
    PopEmptyStack { line: u32 },
    SwapTooShort { line: u32 },
    AddTooShort { line: u32 },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UnknownInstruction { line, opcode } => {
                write!(f, "L{}: unknown instruction {}", line, opcode)
            }
            RuntimeError::PushUsage { line } => {
                write!(f, "L{}: usage: push integer", line)
            }
            RuntimeError::PintEmptyStack { line } => {
                write!(f, "L{}: can't pint, stack empty", line)
            }
            RuntimeError::PopEmptyStack { line } => {
                write!(f, "L{}: can't pop an empty stack", line)
            }
            RuntimeError::SwapTooShort { line } => {
                write!(f, "L{}: can't swap, stack too short", line)
            }
            RuntimeError::AddTooShort { line } => {
                write!(f, "L{}: can't add, stack too short", line)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}

impl VM {
    pub fn new() -> Self {
        VM {
            stack: Stack::new(),
            line: 0,
        }
    }

    /// Executes every instruction in `source`, one line at a time, stopping
    /// at the first error. Errors are fatal: nothing after the offending
    /// line runs.
    pub fn run(&mut self, source: &str) -> Result<(), RuntimeError> {
        for text in source.lines() {
            self.line += 1;
            self.run_line(text)?;
        }
        Ok(())
    }

    /// Executes a single line: lexes it, resolves the opcode, dispatches.
    /// Blank lines and lines whose first token is a comment are skipped;
    /// the line counter has already been advanced for them.
    fn run_line(&mut self, text: &str) -> Result<(), RuntimeError> {
        let mut lexer = Token::lexer(text);
        let first = match lexer.next() {
            Some(token) => token,
            None => return Ok(()),
        };
        let opcode = match first {
            Ok(Token::Comment) => return Ok(()),
            Ok(Token::Word(name)) => match OpCode::from_name(&name) {
                Some(op) => op,
                None => {
                    return Err(RuntimeError::UnknownInstruction {
                        line: self.line,
                        opcode: name,
                    })
                }
            },
            // An integer or unlexable literal in opcode position is still
            // an unknown instruction; report the token text as written.
            _ => {
                return Err(RuntimeError::UnknownInstruction {
                    line: self.line,
                    opcode: lexer.slice().to_string(),
                })
            }
        };
        self.dispatch_opcode(opcode, &mut lexer)
    }
}
