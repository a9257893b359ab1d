//! Visitor pattern for document tree traversal.
//!
//! This module provides traits and functions for traversing trees.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`MutVisitor`] - In-place transformation trait
//! - [`walk_node`] / [`walk_node_mut`] - Dispatch functions for node kinds
//! - [`walk_children`] / [`walk_children_mut`] - Traverse a children list
//!
//! Both traversals are depth-first and pre-order. Only roots and elements are
//! descended into; text and opaque nodes are leaves for traversal purposes.
//!
//! # Examples
//!
//! ## Collecting Text Content
//!
//! ```rust
//! use hastform_ast::{Element, Node, Root, Text};
//! use hastform_ast::visitor::{Visitor, VisitResult, walk_root};
//! use std::ops::ControlFlow;
//!
//! struct TextCollector {
//!     texts: Vec<String>,
//! }
//!
//! impl Visitor for TextCollector {
//!     fn visit_text(&mut self, text: &Text) -> VisitResult {
//!         self.texts.push(text.value.clone());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let root = Root::new(vec![
//!     Element::new("p").with_children([Node::text("hello")]).into(),
//! ]);
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! walk_root(&mut collector, &root);
//! assert_eq!(collector.texts, vec!["hello"]);
//! ```
//!
//! ## Mutating In Place
//!
//! ```rust
//! use hastform_ast::{Element, Node, Root};
//! use hastform_ast::visitor::{MutVisitor, VisitMutResult, walk_root_mut};
//! use std::ops::ControlFlow;
//!
//! struct MarkParagraphs;
//!
//! impl MutVisitor for MarkParagraphs {
//!     type Break = ();
//!
//!     fn visit_element_mut(&mut self, element: &mut Element) -> VisitMutResult {
//!         if element.is("p") {
//!             element.set_property("class", "prose");
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut root = Root::new(vec![Node::element("p")]);
//! let _ = walk_root_mut(&mut MarkParagraphs, &mut root);
//! assert!(root.children[0].as_element().unwrap().property("class").is_some());
//! ```

mod visit;
mod visit_mut;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use visit_mut::{MutVisitor, VisitMutResult, walk_children_mut, walk_node_mut, walk_root_mut};
pub use walk::{walk_children, walk_node, walk_root};
