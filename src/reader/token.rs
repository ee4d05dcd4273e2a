//! Module for extracting Lisp tokens from source text.

use std::sync::OnceLock;

use regex::Regex;

use super::LexError;

/// The kind of a lexical unit. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TokenKind {
    LParen,
    RParen,
    Float,
    Integer,
    String,
    Symbol,
}

/// A classified lexical unit: its kind plus the exact matched text.
///
/// Immutable once produced; the parser drains the sequence front-to-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Token {
            kind,
            text: text.to_owned(),
        }
    }
}

mod pattern {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn space() -> &'static Regex {
        static SPACE: OnceLock<Regex> = OnceLock::new();
        SPACE.get_or_init(|| {
            Regex::new(r"\A[[:space:]]+").expect("could not compile regex for empty space")
        })
    }

    pub(super) fn lparen() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r"\A\(").expect("could not compile regex for lparen"))
    }

    pub(super) fn rparen() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r"\A\)").expect("could not compile regex for rparen"))
    }

    pub(super) fn float() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A-?[0-9]+[.][0-9]+").expect("could not compile regex for float")
        })
    }

    pub(super) fn integer() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH
            .get_or_init(|| Regex::new(r"\A-?[0-9]+").expect("could not compile regex for integer"))
    }

    pub(super) fn string() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // Captured including both quotes. No escape sequences.
            Regex::new(r#"\A"[^"]*""#).expect("could not compile regex for string")
        })
    }

    pub(super) fn symbol() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[A-Za-z0-9+=!^%*/<>-]+").expect("could not compile regex for symbol")
        })
    }
}

/// The ordered pattern table driving the tokenizer.
///
/// Table order is a priority: the first entry whose pattern matches a
/// prefix of the remaining input wins. Float must precede integer, and
/// both must precede the catch-all symbol pattern, since digits are
/// valid symbol characters too.
pub fn pattern_table() -> &'static [(TokenKind, &'static Regex)] {
    static TABLE: OnceLock<[(TokenKind, &'static Regex); 6]> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            (TokenKind::LParen, pattern::lparen()),
            (TokenKind::RParen, pattern::rparen()),
            (TokenKind::Float, pattern::float()),
            (TokenKind::Integer, pattern::integer()),
            (TokenKind::String, pattern::string()),
            (TokenKind::Symbol, pattern::symbol()),
        ]
    })
}

/// Split the input into its constituent tokens.
///
/// Fails with a `LexError` carrying the byte offset of the first
/// character that no table entry matches.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut rest = source;
    let mut position = 0usize;

    'input: while !rest.is_empty() {
        if let Some(space) = pattern::space().find(rest) {
            position += space.end();
            rest = &rest[space.end()..];
            continue;
        }
        for (kind, matcher) in pattern_table() {
            if let Some(found) = matcher.find(rest) {
                tokens.push(Token::new(*kind, found.as_str()));
                position += found.end();
                rest = &rest[found.end()..];
                continue 'input;
            }
        }
        return Err(LexError { position });
    }

    tracing::trace!("tokenized {} tokens from {} bytes", tokens.len(), source.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_atoms() -> Result<(), LexError> {
        let input = r#"hello "hi" world 24601 -6 -3.33 3.22"#;
        let output = tokenize(input)?;

        let want = &[
            Token::new(TokenKind::Symbol, "hello"),
            Token::new(TokenKind::String, "\"hi\""),
            Token::new(TokenKind::Symbol, "world"),
            Token::new(TokenKind::Integer, "24601"),
            Token::new(TokenKind::Integer, "-6"),
            Token::new(TokenKind::Float, "-3.33"),
            Token::new(TokenKind::Float, "3.22"),
        ];

        assert_eq!(output.len(), want.len());

        for ((i, got), want) in output.iter().enumerate().zip(want.iter()) {
            assert_eq!(got, want, "unexpected token in case {}", i);
        }
        Ok(())
    }

    #[test]
    fn tokenize_parens() -> Result<(), LexError> {
        let input = "(1)( 2 ) (hello ((\"hi\")))";
        let output = tokenize(input)?;

        let want = &[
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::Integer, "1"),
            Token::new(TokenKind::RParen, ")"),
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::Integer, "2"),
            Token::new(TokenKind::RParen, ")"),
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::Symbol, "hello"),
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::String, "\"hi\""),
            Token::new(TokenKind::RParen, ")"),
            Token::new(TokenKind::RParen, ")"),
            Token::new(TokenKind::RParen, ")"),
        ];

        assert_eq!(output.len(), want.len());

        for ((i, got), want) in output.iter().enumerate().zip(want.iter()) {
            assert_eq!(got, want, "unexpected token in case {}", i);
        }
        Ok(())
    }

    #[test]
    fn negative_number_is_one_token() -> Result<(), LexError> {
        // `-` is a symbol character, so the numeric patterns must win.
        let output = tokenize("-5")?;
        assert_eq!(output, vec![Token::new(TokenKind::Integer, "-5")]);
        Ok(())
    }

    #[test]
    fn float_wins_over_integer() -> Result<(), LexError> {
        let output = tokenize("5.5")?;
        assert_eq!(output, vec![Token::new(TokenKind::Float, "5.5")]);
        Ok(())
    }

    #[test]
    fn operator_symbols() -> Result<(), LexError> {
        let output = tokenize("+ - * / % > < = x2")?;
        let want = ["+", "-", "*", "/", "%", ">", "<", "=", "x2"];
        assert_eq!(output.len(), want.len());
        for (got, want) in output.iter().zip(want.iter()) {
            assert_eq!(got.kind, TokenKind::Symbol);
            assert_eq!(&got.text, want);
        }
        Ok(())
    }

    #[test]
    fn error_on_unmatched_character() {
        match tokenize("(+ 1 #)") {
            Ok(tokens) => panic!("expected lex error, got tokens: {:?}", tokens),
            Err(LexError { position }) => assert_eq!(position, 5),
        }
    }

    #[test]
    fn tokenize_is_deterministic() -> Result<(), LexError> {
        let input = "((lambda (x) (* 52 91)) 22 123)";
        assert_eq!(tokenize(input)?, tokenize(input)?);
        Ok(())
    }
}
