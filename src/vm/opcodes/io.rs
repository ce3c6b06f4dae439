//! I/O operation handlers for the VM.
//!
//! This module provides handlers for the output opcodes:
//! - `pall`: print the whole stack, top first
//! - `pint`: print the value at the top of the stack

use crate::vm::stack_ops::Stack;
use crate::vm::RuntimeError;

/// Handler for `pall` - prints every value on the stack, one per line,
/// head to tail. An empty stack prints nothing; this is not an error.
pub fn op_pall(stack: &Stack) {
    for value in stack.iter() {
        println!("{}", value);
    }
}

/// Handler for `pint` - prints the value at the top of the stack,
/// newline-terminated.
pub fn op_pint(stack: &Stack, line: u32) -> Result<(), RuntimeError> {
    match stack.peek() {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => Err(RuntimeError::PintEmptyStack { line }),
    }
}
