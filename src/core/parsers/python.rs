use tree_sitter::{Node, Parser, Tree};

use crate::core::extract::ParseError;

/// Parsed Python source together with the text it was parsed from.
///
/// Nodes borrow byte ranges from `source`, so both are kept together.
pub struct ParsedPython {
    pub tree: Tree,
    pub source: String,
}

impl ParsedPython {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }
}

/// Parse Python source into a syntax tree.
///
/// tree-sitter recovers from syntax errors by inserting `ERROR` and
/// `MISSING` nodes; any such node makes the whole file a parse failure so
/// that a broken file never yields partial records.
pub fn parse_python_source(code: &str, file_path: &str) -> Result<ParsedPython, ParseError> {
    let source = code.strip_prefix('\u{feff}').unwrap_or(code).to_string();

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ParseError::Parser {
            path: file_path.to_string(),
            message: format!("failed to load Python grammar: {}", e),
        })?;

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| ParseError::Parser {
            path: file_path.to_string(),
            message: "parser returned no syntax tree".to_string(),
        })?;

    if tree.root_node().has_error() {
        let (line, column, message) = match first_error_node(tree.root_node()) {
            Some(node) => {
                let pos = node.start_position();
                let message = if node.is_missing() {
                    format!("missing `{}`", node.kind())
                } else {
                    "invalid syntax".to_string()
                };
                (pos.row + 1, pos.column + 1, message)
            }
            None => (1, 1, "invalid syntax".to_string()),
        };
        return Err(ParseError::Syntax {
            path: file_path.to_string(),
            line,
            column,
            message,
        });
    }

    Ok(ParsedPython { tree, source })
}

/// Find the first `ERROR` or `MISSING` node in source order.
fn first_error_node(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only descend into subtrees that contain an error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
