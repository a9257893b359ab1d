//! MutVisitor trait for transforming trees in place.
//!
//! Unlike [`Visitor`](super::Visitor), the hooks here do not walk children
//! themselves. The walk functions call the hook for a node first and then
//! descend into that node's children as they are *after* the hook ran, so a
//! hook may append children or replace children with wrappers and the walk
//! still reaches every node exactly once:
//!
//! - appended children are visited as ordinary nodes,
//! - a wrapper inserted by a root hook is visited, then the wrapped node is
//!   reached through the wrapper's children.
//!
//! Text and opaque nodes have no hooks and are never descended into.

use std::ops::ControlFlow;

use crate::{Element, Node, Root};

/// Result type for mutable visitor hooks.
///
/// `ControlFlow::Break(b)` stops the traversal and is handed back to the
/// caller of the walk function.
pub type VisitMutResult<B = ()> = ControlFlow<B>;

/// Visitor trait for mutating a document tree in place.
pub trait MutVisitor: Sized {
    /// Value carried out of the traversal when a hook stops it.
    type Break;

    /// Called for every root node before its children are walked.
    fn visit_root_mut(&mut self, _root: &mut Root) -> VisitMutResult<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Called for every element node before its children are walked.
    fn visit_element_mut(&mut self, _element: &mut Element) -> VisitMutResult<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// Walks a node: runs the hook for its kind, then walks its children.
pub fn walk_node_mut<V>(visitor: &mut V, node: &mut Node) -> VisitMutResult<V::Break>
where
    V: MutVisitor,
{
    match node {
        Node::Root(root) => walk_root_mut(visitor, root),
        Node::Element(element) => {
            visitor.visit_element_mut(element)?;
            walk_children_mut(visitor, &mut element.children)
        }
        Node::Text(_) | Node::Opaque(_) => ControlFlow::Continue(()),
    }
}

/// Walks a whole tree, starting at its root.
pub fn walk_root_mut<V>(visitor: &mut V, root: &mut Root) -> VisitMutResult<V::Break>
where
    V: MutVisitor,
{
    visitor.visit_root_mut(root)?;
    walk_children_mut(visitor, &mut root.children)
}

/// Walks every node of a children list, in order.
#[inline]
pub fn walk_children_mut<V>(visitor: &mut V, children: &mut [Node]) -> VisitMutResult<V::Break>
where
    V: MutVisitor,
{
    for child in children.iter_mut() {
        walk_node_mut(visitor, child)?;
    }
    ControlFlow::Continue(())
}
