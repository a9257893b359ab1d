//! Walk functions for read-only traversal.
//!
//! These functions provide the traversal logic used by the default
//! implementations of the [`Visitor`] trait.

use std::ops::ControlFlow;

use crate::{Node, Root};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate kind-specific method.
///
/// Calls `enter_node` first, then the `visit_*` method for the node kind.
pub fn walk_node<V>(visitor: &mut V, node: &Node) -> VisitResult
where
    V: Visitor,
{
    visitor.enter_node(node)?;

    match node {
        Node::Root(root) => visitor.visit_root(root),
        Node::Element(element) => visitor.visit_element(element),
        Node::Text(text) => visitor.visit_text(text),
        Node::Opaque(opaque) => visitor.visit_opaque(opaque),
    }
}

/// Walks every node of a children list, in order.
///
/// Stops at the first `ControlFlow::Break`.
#[inline]
pub fn walk_children<V>(visitor: &mut V, children: &[Node]) -> VisitResult
where
    V: Visitor,
{
    for child in children {
        visitor.visit_node(child)?;
    }
    ControlFlow::Continue(())
}

/// Walks a whole tree, starting at its root.
#[inline]
pub fn walk_root<V>(visitor: &mut V, root: &Root) -> VisitResult
where
    V: Visitor,
{
    visitor.visit_root(root)
}
