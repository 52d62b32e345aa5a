//! Variable extraction over a Python syntax tree.
//!
//! A single pre-order walk visits every node. Function definition headers
//! update the scope tracker, assignment statements emit one record per plain
//! identifier target.

use std::{fs, path::Path};

use tree_sitter::Node;

use super::{
    ParseError, ScopeTracking,
    scope::ScopeTracker,
    walker::{SyntaxVisitor, walk_preorder},
};
use crate::core::{
    DefaultValue, VariableRecord,
    classify::{Expression, classify},
    parsers::python::parse_python_source,
};

/// Extract variable records from Python source using flat scope tracking.
///
/// # Example
///
/// ```
/// use varscout::core::{Scope, TypeLabel, extract::extract};
///
/// let records = extract("x = 5\n", "app.py").unwrap();
/// assert_eq!(records[0].name, "x");
/// assert_eq!(records[0].data_type, TypeLabel::Int);
/// assert_eq!(records[0].scope, Scope::Global);
/// ```
pub fn extract(source: &str, file_path: &str) -> Result<Vec<VariableRecord>, ParseError> {
    extract_with_tracking(source, file_path, ScopeTracking::Flat)
}

/// Extract variable records from Python source.
pub fn extract_with_tracking(
    source: &str,
    file_path: &str,
    tracking: ScopeTracking,
) -> Result<Vec<VariableRecord>, ParseError> {
    let parsed = parse_python_source(source, file_path)?;
    let mut extractor = VariableExtractor::new(file_path, parsed.bytes(), tracking);
    walk_preorder(parsed.root(), &mut extractor);
    Ok(extractor.into_records())
}

/// Read a file and extract its variable records.
///
/// The file is read completely and closed before parsing starts.
pub fn extract_file(
    path: &Path,
    tracking: ScopeTracking,
) -> Result<Vec<VariableRecord>, ParseError> {
    let file_path = path.to_string_lossy().to_string();
    let bytes = fs::read(path).map_err(|source| ParseError::Io {
        path: file_path.clone(),
        source,
    })?;
    let source = String::from_utf8(bytes).map_err(|source| ParseError::Decode {
        path: file_path.clone(),
        source,
    })?;
    extract_with_tracking(&source, &file_path, tracking)
}

/// Visitor collecting records for one file.
pub struct VariableExtractor<'a> {
    file_path: &'a str,
    source: &'a [u8],
    scope: ScopeTracker,
    records: Vec<VariableRecord>,
}

impl<'a> VariableExtractor<'a> {
    pub fn new(file_path: &'a str, source: &'a [u8], tracking: ScopeTracking) -> Self {
        Self {
            file_path,
            source,
            scope: ScopeTracker::new(tracking),
            records: Vec::new(),
        }
    }

    pub fn into_records(self) -> Vec<VariableRecord> {
        self.records
    }

    fn visit_function(&mut self, node: Node<'_>) {
        if self.scope.mode() == ScopeTracking::Flat && is_async(node) {
            return;
        }
        let name = node
            .child_by_field_name("name")
            .and_then(|name| name.utf8_text(self.source).ok());
        if let Some(name) = name {
            self.scope.enter_function(node.id(), name);
        }
    }

    /// Handle `a = b = value`, which tree-sitter nests as
    /// `assignment(a, assignment(b, value))`.
    fn visit_assignment(&mut self, node: Node<'_>) {
        // Annotated assignments (`x: int = 1`) are not simple assignments.
        if node.child_by_field_name("type").is_some() {
            return;
        }
        // The outer link of a chain already handled this node.
        if node.parent().is_some_and(|p| p.kind() == "assignment") {
            return;
        }

        let mut targets = Vec::new();
        let mut current = node;
        let value = loop {
            if let Some(left) = current.child_by_field_name("left") {
                targets.push(left);
            }
            match current.child_by_field_name("right") {
                Some(right) if right.kind() == "assignment" => current = right,
                right => break right,
            }
        };
        let Some(value) = value else {
            return;
        };

        let expression = Expression::from_node(value, self.source);
        let data_type = classify(&expression);
        let default_value = DefaultValue::from(expression.literal().cloned());
        let scope = self.scope.current();

        for target in targets {
            let target = unwrap_parenthesized(target);
            // Tuple, list, attribute and subscript targets produce nothing.
            if target.kind() != "identifier" {
                continue;
            }
            let Ok(name) = target.utf8_text(self.source) else {
                continue;
            };
            self.records.push(VariableRecord::new(
                name,
                data_type,
                default_value.clone(),
                scope.clone(),
                self.file_path,
                target.start_position().row + 1,
            ));
        }
    }
}

fn is_async(function: Node<'_>) -> bool {
    function.child(0).is_some_and(|first| first.kind() == "async")
}

/// `(a) = 5` binds `a`; tree-sitter parses the target as a one-element
/// `tuple_pattern` without a trailing comma.
fn unwrap_parenthesized(mut target: Node<'_>) -> Node<'_> {
    while matches!(target.kind(), "tuple_pattern" | "parenthesized_expression")
        && target.named_child_count() == 1
    {
        let mut cursor = target.walk();
        let has_comma = target.children(&mut cursor).any(|child| child.kind() == ",");
        match target.named_child(0) {
            Some(inner) if !has_comma => target = inner,
            _ => break,
        }
    }
    target
}

impl<'a, 'tree> SyntaxVisitor<'tree> for VariableExtractor<'a> {
    fn enter(&mut self, node: Node<'tree>) {
        match node.kind() {
            "function_definition" => self.visit_function(node),
            "assignment" => self.visit_assignment(node),
            _ => {}
        }
    }

    fn leave(&mut self, node: Node<'tree>) {
        if node.kind() == "function_definition" {
            self.scope.leave_function(node.id());
        }
    }
}
