//! Visitor trait for traversing trees without modification.
//!
//! Each `visit_*` method has a default implementation that walks children,
//! allowing you to override only the node kinds you care about.

use std::ops::ControlFlow;

use crate::{Element, Node, Opaque, Root, Text};

use super::walk::{walk_children, walk_node};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing document trees without modification.
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor: Sized {
    /// Called before visiting any node.
    #[inline]
    fn enter_node(&mut self, _node: &Node) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits any node by dispatching to the kind-specific method.
    #[inline]
    fn visit_node(&mut self, node: &Node) -> VisitResult {
        walk_node(self, node)
    }

    /// Visit a Root node.
    fn visit_root(&mut self, root: &Root) -> VisitResult {
        walk_children(self, &root.children)
    }

    /// Visit an Element node.
    fn visit_element(&mut self, element: &Element) -> VisitResult {
        walk_children(self, &element.children)
    }

    /// Visit a Text node.
    fn visit_text(&mut self, _text: &Text) -> VisitResult {
        ControlFlow::Continue(()) // Leaf
    }

    /// Visit an Opaque node. Its children, if any, are not walked.
    fn visit_opaque(&mut self, _opaque: &Opaque) -> VisitResult {
        ControlFlow::Continue(())
    }
}
