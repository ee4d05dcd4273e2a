//! Support for reading Lisp expressions from strings.

use crate::syntax::SyntaxNode;

mod parse;
mod token;

pub use parse::parse;
pub use token::{pattern_table, tokenize, Token, TokenKind};

/// Read the string as a single Lisp expression.
pub fn read(input: &str) -> ReadResult<SyntaxNode> {
    let tokens = tokenize(input)?;
    let node = parse(tokens)?;
    Ok(node)
}

/// Error from the tokenizer: no pattern in the table matched at `position`
/// (a byte offset into the source).
///
/// Terminal for the whole pipeline; a partial token stream is not usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lexing error: no token pattern matches at byte {}",
            self.position
        )
    }
}

/// Error from the parser: the token sequence ran out mid-expression, or a
/// close-paren was expected and absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        ParseError {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.reason)
    }
}

/// Error type if a read does not complete: either stage of the pipeline
/// can fail, and both are terminal for the current call. There is no
/// partial-result recovery and no resynchronization.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadErr {
    Lex(LexError),
    Parse(ParseError),
}

impl std::fmt::Display for ReadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadErr::Lex(e) => write!(f, "error in input: {e}"),
            ReadErr::Parse(e) => write!(f, "error in input: {e}"),
        }
    }
}

impl From<LexError> for ReadErr {
    fn from(value: LexError) -> Self {
        ReadErr::Lex(value)
    }
}

impl From<ParseError> for ReadErr {
    fn from(value: ParseError) -> Self {
        ReadErr::Parse(value)
    }
}

/// The main result type for this module:
/// a T (token, expression, etc.), or a read error.
pub type ReadResult<T> = Result<T, ReadErr>;
