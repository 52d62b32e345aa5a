use tree_sitter::Node;

/// Callbacks for a pre-order syntax tree traversal.
pub trait SyntaxVisitor<'tree> {
    /// Called before any of the node's children.
    fn enter(&mut self, node: Node<'tree>);

    /// Called after all of the node's children.
    fn leave(&mut self, _node: Node<'tree>) {}
}

/// Walk `root` in pre-order (node, then children in source order).
///
/// Iterative over a tree cursor, so nesting depth is bounded only by the
/// parser and not by the call stack.
pub fn walk_preorder<'tree, V: SyntaxVisitor<'tree>>(root: Node<'tree>, visitor: &mut V) {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        visitor.enter(node);
        if cursor.goto_first_child() {
            continue;
        }
        visitor.leave(node);

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
            visitor.leave(cursor.node());
        }
    }
}
