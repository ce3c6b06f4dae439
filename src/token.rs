use logos::Logos;

/// Defines the set of recognizable tokens on a line of a bytecode file.
/// The `#[derive(Logos)]` macro from the `logos` crate generates the lexer implementation.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n]+")] // Ignore whitespace
pub enum Token {
    // An optional leading minus followed by digits. The callback rejects
    // literals that do not fit in an i32, so `push` sees those as invalid
    // arguments.
    #[regex("-?[0-9]+", |lex| lex.slice().parse::<i32>().ok(), priority = 3)]
    Integer(i32),

    // Runs from `#` to the end of the line.
    #[regex("#[^\n]*", priority = 3)]
    Comment,

    // Any other run of non-whitespace characters: opcode mnemonics and
    // malformed literals such as `5x` or `--3`. Logos prefers the longest
    // match, so `5x` lexes as one word rather than an integer and a word.
    #[regex(r"[^ \t\n]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}
