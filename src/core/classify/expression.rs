use tree_sitter::Node;

use super::literal::{
    StringLiteral, decode_float_literal, decode_integer_literal, decode_string_literal,
};
use crate::core::LiteralValue;

/// Right-hand side of an assignment, lowered from tree-sitter node kinds
/// into the shapes the classifier distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Any constant literal: strings, bytes, numbers, booleans, `None`, `...`
    Constant(LiteralValue),
    List,
    Dict,
    Set,
    Tuple,
    /// Bare identifier reference
    Name(String),
    /// Function or method invocation
    Call,
    /// Every other expression shape (operators, comprehensions, f-strings, ...)
    Other,
}

impl Expression {
    /// Lower a tree-sitter expression node.
    ///
    /// Parentheses are transparent, as in Python's own AST: `x = (5)` is a
    /// constant while `x = (5,)` is a tuple.
    pub fn from_node(node: Node<'_>, src: &[u8]) -> Self {
        match node.kind() {
            "string" => node_text(node, src)
                .and_then(decode_string_literal)
                .map_or(Expression::Other, string_expression),
            "concatenated_string" => concatenated_string(node, src),
            "integer" => node_text(node, src)
                .and_then(decode_integer_literal)
                .map_or(Expression::Other, Expression::Constant),
            "float" => node_text(node, src)
                .and_then(decode_float_literal)
                .map_or(Expression::Other, Expression::Constant),
            "true" => Expression::Constant(LiteralValue::Bool(true)),
            "false" => Expression::Constant(LiteralValue::Bool(false)),
            "none" => Expression::Constant(LiteralValue::None),
            "ellipsis" => Expression::Constant(LiteralValue::Ellipsis),
            "list" => Expression::List,
            "dictionary" => Expression::Dict,
            "set" => Expression::Set,
            // `x = 1, 2` produces an expression_list rather than a tuple node
            "tuple" | "expression_list" | "pattern_list" => Expression::Tuple,
            "identifier" => node_text(node, src)
                .map_or(Expression::Other, |name| Expression::Name(name.to_string())),
            "call" => Expression::Call,
            "parenthesized_expression" => {
                let mut cursor = node.walk();
                let inner = node
                    .named_children(&mut cursor)
                    .find(|child| child.kind() != "comment");
                inner.map_or(Expression::Other, |inner| Expression::from_node(inner, src))
            }
            _ => Expression::Other,
        }
    }

    /// The literal value, if this expression is a constant.
    pub fn literal(&self) -> Option<&LiteralValue> {
        match self {
            Expression::Constant(value) => Some(value),
            _ => None,
        }
    }
}

fn node_text<'a>(node: Node<'_>, src: &'a [u8]) -> Option<&'a str> {
    node.utf8_text(src).ok()
}

fn string_expression(literal: StringLiteral) -> Expression {
    match literal {
        StringLiteral::Text(text) => Expression::Constant(LiteralValue::Str(text)),
        StringLiteral::Bytes(bytes) => Expression::Constant(LiteralValue::Bytes(bytes)),
        StringLiteral::Formatted => Expression::Other,
    }
}

/// Implicit concatenation `"a" "b"` is folded into one constant unless a
/// part is formatted or str and bytes parts are mixed.
fn concatenated_string(node: Node<'_>, src: &[u8]) -> Expression {
    let mut text = String::new();
    let mut bytes = Vec::new();
    let mut saw_text = false;
    let mut saw_bytes = false;

    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        if part.kind() != "string" {
            continue;
        }
        match node_text(part, src).and_then(decode_string_literal) {
            Some(StringLiteral::Text(s)) => {
                saw_text = true;
                text.push_str(&s);
            }
            Some(StringLiteral::Bytes(b)) => {
                saw_bytes = true;
                bytes.extend(b);
            }
            Some(StringLiteral::Formatted) | None => return Expression::Other,
        }
    }

    match (saw_text, saw_bytes) {
        (true, false) => Expression::Constant(LiteralValue::Str(text)),
        (false, true) => Expression::Constant(LiteralValue::Bytes(bytes)),
        _ => Expression::Other,
    }
}
