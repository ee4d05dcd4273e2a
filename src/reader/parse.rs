//! Recursive-descent parser over a token sequence.
//!
//! Dispatch needs one token of lookahead past an open-paren: the second
//! token's text picks between the `lambda` and `quote` special forms and
//! generic application. A symbol literally named "lambda" or "quote" in
//! operator position is always treated as the special form.

use super::{ParseError, Token, TokenKind};
use crate::syntax::SyntaxNode;

/// Cursor over an immutable token buffer.
///
/// The parser only ever peeks at the front (plus one token of lookahead)
/// and advances; nothing is removed from the buffer itself.
struct Cursor {
    buf: Vec<Token>,
    pos: usize,
}

impl Cursor {
    fn new(buf: Vec<Token>) -> Self {
        Cursor { buf, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.buf.get(self.pos)
    }

    fn peek_second(&self) -> Option<&Token> {
        self.buf.get(self.pos + 1)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.buf.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Advance past a token of the given kind, or fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.advance() {
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(ParseError::new(format!(
                "expected {:?}, found {:?}",
                kind, token.text
            ))),
            None => Err(ParseError::new(format!(
                "expected {:?}, got end of input",
                kind
            ))),
        }
    }
}

/// Parse the token sequence as a single expression.
///
/// The sequence is consumed; tokens after the first complete expression
/// are ignored.
pub fn parse(tokens: Vec<Token>) -> Result<SyntaxNode, ParseError> {
    let mut tokens = Cursor::new(tokens);
    let node = parse_expr(&mut tokens)?;
    tracing::trace!("parsed expression through token {}", tokens.pos);
    Ok(node)
}

fn parse_expr(tokens: &mut Cursor) -> Result<SyntaxNode, ParseError> {
    let front = tokens
        .peek()
        .ok_or_else(|| ParseError::new("expected an expression, got end of input"))?;

    if front.kind != TokenKind::LParen {
        return parse_atom(tokens);
    }

    match tokens.peek_second().map(|t| t.text.as_str()) {
        Some("lambda") => parse_lambda(tokens),
        Some("quote") => parse_quote(tokens),
        _ => parse_application(tokens),
    }
}

/// A single non-paren token as an expression.
fn parse_atom(tokens: &mut Cursor) -> Result<SyntaxNode, ParseError> {
    let token = tokens
        .advance()
        .ok_or_else(|| ParseError::new("expected an atom, got end of input"))?;

    match token.kind {
        TokenKind::Integer => {
            // The matcher guarantees numeric text; failure here is overflow.
            let value: i64 = token.text.parse().map_err(|e| {
                ParseError::new(format!("could not parse {:?} as an integer: {}", token.text, e))
            })?;
            Ok(SyntaxNode::IntegerLiteral(value))
        }
        TokenKind::Float => {
            let value: f64 = token.text.parse().map_err(|e| {
                ParseError::new(format!("could not parse {:?} as a float: {}", token.text, e))
            })?;
            Ok(SyntaxNode::FloatLiteral(value))
        }
        TokenKind::String => Ok(SyntaxNode::StringLiteral(token.text)),
        TokenKind::Symbol => Ok(SyntaxNode::SymbolRef(token.text)),
        TokenKind::LParen | TokenKind::RParen => Err(ParseError::new(format!(
            "expected an expression, found {:?}",
            token.text
        ))),
    }
}

/// `(lambda (params...) body)`, the front token being the open paren.
fn parse_lambda(tokens: &mut Cursor) -> Result<SyntaxNode, ParseError> {
    tokens.expect(TokenKind::LParen)?;
    tokens.advance(); // the "lambda" symbol itself
    tokens.expect(TokenKind::LParen)?;

    let mut parameters = Vec::new();
    loop {
        let token = tokens
            .advance()
            .ok_or_else(|| ParseError::new("unterminated lambda parameter list"))?;
        match token.kind {
            TokenKind::RParen => break,
            TokenKind::Symbol => parameters.push(token.text),
            _ => {
                return Err(ParseError::new(format!(
                    "lambda parameter must be a symbol, found {:?}",
                    token.text
                )))
            }
        }
    }

    // Exactly one body expression; no implicit sequencing.
    let body = parse_expr(tokens)?;
    tokens.expect(TokenKind::RParen)?;

    Ok(SyntaxNode::LambdaExpr {
        parameters,
        body: Box::new(body),
    })
}

/// `(quote ...)`: the quoted form is consumed verbatim, tracking paren
/// depth so that only the close-paren that returns to depth 0 terminates.
fn parse_quote(tokens: &mut Cursor) -> Result<SyntaxNode, ParseError> {
    tokens.expect(TokenKind::LParen)?;
    tokens.advance(); // the "quote" symbol itself

    let mut depth = 0usize;
    let mut captured: Vec<String> = Vec::new();
    loop {
        let token = tokens
            .advance()
            .ok_or_else(|| ParseError::new("unterminated quote form"))?;
        match token.kind {
            TokenKind::LParen => {
                depth += 1;
                captured.push(token.text);
            }
            TokenKind::RParen if depth == 0 => break,
            TokenKind::RParen => {
                depth -= 1;
                captured.push(token.text);
            }
            _ => captured.push(token.text),
        }
    }

    // Joining on spaces puts a spurious space after every `(` and before
    // every `)`; patch those back out.
    let raw = captured.join(" ").replace("( ", "(").replace(" )", ")");
    Ok(SyntaxNode::QuotedExpr { raw })
}

/// A generic application `(op a b ...)`. The operator may be any
/// expression, not just a symbol.
fn parse_application(tokens: &mut Cursor) -> Result<SyntaxNode, ParseError> {
    tokens.expect(TokenKind::LParen)?;
    let operator = parse_expr(tokens)?;

    let mut operands = Vec::new();
    loop {
        match tokens.peek() {
            None => return Err(ParseError::new("missing ) to close application")),
            Some(token) if token.kind == TokenKind::RParen => {
                tokens.advance();
                break;
            }
            Some(_) => operands.push(parse_expr(tokens)?),
        }
    }

    Ok(SyntaxNode::Application {
        operator: Box::new(operator),
        operands,
    })
}
