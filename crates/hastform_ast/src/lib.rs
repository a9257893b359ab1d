//! # hastform_ast
//!
//! HAST-shaped document tree definitions for hastform.
//!
//! This crate provides the node model that the hastform transforms operate on.
//! The model mirrors the [HAST](https://github.com/syntax-tree/hast) contract
//! used by Markdown-to-HTML pipelines, so trees can be exchanged with a host
//! parser and serializer as JSON.
//!
//! ## Architecture
//!
//! - [`Node`] is a closed sum type over root, element, text and opaque nodes
//! - Parents exclusively own their children (`Vec<Node>`), so a transform
//!   borrows the whole tree mutably for the duration of one call
//! - [`visitor`] provides depth-first, pre-order traversal for both
//!   read-only inspection and in-place mutation
//!
//! ## Example
//!
//! ```rust
//! use hastform_ast::{Element, Node, Root};
//!
//! let root = Root::new(vec![
//!     Element::new("h2")
//!         .with_property("id", "intro")
//!         .with_children([Node::text("Introduction")])
//!         .into(),
//! ]);
//!
//! let json = root.to_json().unwrap();
//! assert_eq!(Root::from_json(&json).unwrap(), root);
//! ```

mod error;
mod node;
mod property;
pub mod visitor;

pub use error::AstError;
pub use node::{Element, Extra, Node, Opaque, Root, Text};
pub use property::{ListItem, Properties, PropertyValue};

// Re-export commonly used visitor items for convenience
pub use visitor::{MutVisitor, VisitMutResult, VisitResult, Visitor};
