use crate::vm::VM;
use std::env;
use std::fs;

pub fn run_main() -> Result<(), i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    run_main_with_args(&args)
}

pub fn run_main_with_args(args: &[String]) -> Result<(), i32> {
    handle_args(args)
}

/// The interpreter takes exactly one argument: the bytecode file to run.
/// Any other argument count is a usage error.
pub fn handle_args(args: &[String]) -> Result<(), i32> {
    match args.len() {
        1 => run_file(&args[0]),
        _ => {
            eprintln!("USAGE: monty file");
            Err(1)
        }
    }
}

/// Loads and executes a bytecode file. Every failure path - unopenable
/// file, unknown instruction, handler error - prints one diagnostic line
/// to stderr and maps to exit code 1.
pub fn run_file(path: &str) -> Result<(), i32> {
    match fs::read_to_string(path) {
        Ok(source) => {
            let mut vm = VM::new();
            match vm.run(&source) {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("{}", e);
                    Err(1)
                }
            }
        }
        Err(_) => {
            eprintln!("Error: Can't open file {}", path);
            Err(1)
        }
    }
}
