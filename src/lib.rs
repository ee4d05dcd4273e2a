//! A minimal Lisp front end: tokenizer, parser, pretty-printer, and a
//! flattening pass that lowers a tree into a stack-order instruction sketch.
//!
//! The pipeline is `tokenize` -> `parse` -> (`render` | `lower`), with
//! `read` as the tokenize+parse composition. Evaluation is out of scope;
//! the tree this crate produces is meant to be handed to an evaluator
//! built elsewhere.

pub mod lower;
pub mod reader;
pub mod syntax;

pub use lower::lower;
pub use reader::{
    parse, read, tokenize, LexError, ParseError, ReadErr, ReadResult, Token, TokenKind,
};
pub use syntax::{render, SyntaxNode};
