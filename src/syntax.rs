//! Syntax tree for one parsed Lisp expression.
//!
//! The Display implementation renders the expression as a string
//! (that can be parsed back as the same tree.)
//!
//! Limitations:
//! - Only i64 integers and f64 floats are supported.
//! - Numeric literals re-render through the canonical Display of the
//!   stored value, so `5.50` comes back as `5.5`.

use std::fmt;

/// One node of a parsed expression.
///
/// Every node owns its children exclusively; trees are acyclic and
/// live only as long as the caller of `parse` keeps them.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// A generic procedure call, `(op a b ...)`.
    Application {
        operator: Box<SyntaxNode>,
        operands: Vec<SyntaxNode>,
    },
    /// `(lambda (params...) body)`. The body is exactly one expression.
    LambdaExpr {
        parameters: Vec<String>,
        body: Box<SyntaxNode>,
    },
    /// A quoted form, kept as reconstructed text rather than a sub-tree.
    ///
    /// The text is the quoted tokens re-joined with single spaces, with
    /// the space after `(` and before `)` patched out. String literals
    /// that themselves contain `( ` or ` )` get patched too; quoted data
    /// cannot be manipulated as data in this representation.
    QuotedExpr { raw: String },
    FloatLiteral(f64),
    IntegerLiteral(i64),
    /// A string literal, stored including its surrounding quotes.
    StringLiteral(String),
    SymbolRef(String),
}

/// Render a tree back to source text.
///
/// Total over any tree; inverse of parsing up to whitespace
/// normalization and numeric reformatting.
pub fn render(node: &SyntaxNode) -> String {
    node.to_string()
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxNode::Application { operator, operands } => {
                write!(f, "({}", operator)?;
                for operand in operands {
                    write!(f, " {}", operand)?;
                }
                write!(f, ")")
            }
            SyntaxNode::LambdaExpr { parameters, body } => {
                write!(f, "(lambda ({}) {})", parameters.join(" "), body)
            }
            SyntaxNode::QuotedExpr { raw } => write!(f, "(quote {})", raw),
            SyntaxNode::FloatLiteral(v) => write!(f, "{}", v),
            SyntaxNode::IntegerLiteral(v) => write!(f, "{}", v),
            SyntaxNode::StringLiteral(v) => write!(f, "{}", v),
            SyntaxNode::SymbolRef(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_atoms() {
        let cases: &[(SyntaxNode, &str)] = &[
            (SyntaxNode::IntegerLiteral(-6), "-6"),
            (SyntaxNode::FloatLiteral(3.25), "3.25"),
            (SyntaxNode::SymbolRef("hello".to_owned()), "hello"),
            (
                SyntaxNode::StringLiteral("\"hi\"".to_owned()),
                "\"hi\"",
            ),
        ];
        for (i, (node, want)) in cases.iter().enumerate() {
            assert_eq!(&render(node), want, "unexpected rendering in case {}", i);
        }
    }

    #[test]
    fn render_application() {
        let node = SyntaxNode::Application {
            operator: Box::new(SyntaxNode::SymbolRef("+".to_owned())),
            operands: vec![
                SyntaxNode::IntegerLiteral(1),
                SyntaxNode::IntegerLiteral(2),
            ],
        };
        assert_eq!(render(&node), "(+ 1 2)");
    }

    #[test]
    fn render_nullary_application() {
        let node = SyntaxNode::Application {
            operator: Box::new(SyntaxNode::SymbolRef("now".to_owned())),
            operands: vec![],
        };
        assert_eq!(render(&node), "(now)");
    }

    #[test]
    fn render_lambda() {
        let node = SyntaxNode::LambdaExpr {
            parameters: vec!["x".to_owned(), "y".to_owned()],
            body: Box::new(SyntaxNode::Application {
                operator: Box::new(SyntaxNode::SymbolRef("+".to_owned())),
                operands: vec![
                    SyntaxNode::SymbolRef("x".to_owned()),
                    SyntaxNode::SymbolRef("y".to_owned()),
                ],
            }),
        };
        assert_eq!(render(&node), "(lambda (x y) (+ x y))");
    }

    #[test]
    fn render_quote() {
        let node = SyntaxNode::QuotedExpr {
            raw: "(+ 1 (+ 2 3))".to_owned(),
        };
        assert_eq!(render(&node), "(quote (+ 1 (+ 2 3)))");
    }
}
