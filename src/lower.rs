//! Lowering: flatten a syntax tree into a stack-order instruction sketch.
//!
//! The output is a comma-separated operand/operator stream, readable as
//! the push order for a stack machine: operands first (last operand
//! pushed first), then the operator. This is a design sketch for a real
//! bytecode emitter, not a finished bytecode format.

use crate::syntax::SyntaxNode;

/// Opcode that pushes the literal value in the following field.
const PUSH_LITERAL: i64 = 10;

/// Built-in operator names and their fixed opcodes.
const BUILTINS: &[(&str, i64)] = &[
    ("+", 2),
    ("-", 3),
    ("*", 4),
    ("/", 5),
    ("%", 6),
    (">", 7),
    ("<", 8),
    ("=", 9),
];

fn builtin_opcode(name: &str) -> Option<i64> {
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, opcode)| *opcode)
}

/// Lower a tree to its flattened instruction stream.
///
/// Total: unsupported variants (lambdas, quoted forms, floats, strings)
/// emit nothing rather than failing, so callers must not rely on
/// lowering for trees that contain them.
pub fn lower(node: &SyntaxNode) -> String {
    let mut fields = Vec::new();
    emit(node, &mut fields);
    fields.join(", ")
}

fn emit(node: &SyntaxNode, fields: &mut Vec<String>) {
    match node {
        SyntaxNode::IntegerLiteral(v) => {
            fields.push(PUSH_LITERAL.to_string());
            fields.push(v.to_string());
        }
        SyntaxNode::SymbolRef(name) => match builtin_opcode(name) {
            Some(opcode) => fields.push(opcode.to_string()),
            // Unresolved reference; left as the bare name.
            None => fields.push(name.clone()),
        },
        SyntaxNode::Application { operator, operands } => {
            for operand in operands.iter().rev() {
                emit(operand, fields);
            }
            emit(operator, fields);
            // Deliberately preserved quirk: above two operands, the
            // operator is emitted a second time. Possibly a variadic-call
            // convention, possibly a bug in the design being sketched;
            // kept as-is rather than silently corrected.
            if operands.len() > 2 {
                emit(operator, fields);
            }
        }
        SyntaxNode::LambdaExpr { .. }
        | SyntaxNode::QuotedExpr { .. }
        | SyntaxNode::FloatLiteral(_)
        | SyntaxNode::StringLiteral(_) => {}
    }
}
