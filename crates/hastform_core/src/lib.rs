//! # hastform_core
//!
//! Structural rewrites for rendered documentation trees.
//!
//! This crate provides:
//! - Permalink anchors on `h1`..`h5` headings that carry an `id`
//! - Callout classes for blockquotes starting with `(warn)` or `(red)`
//! - Layout wrappers around root-level tables
//! - A single-pass [`DocsTransform`] applying all three in place
//!
//! ## Example
//!
//! ```rust
//! use hastform_ast::{Element, Node, Root};
//! use hastform_core::{DocsTransform, TreeTransform};
//!
//! let mut root = Root::new(vec![
//!     Element::new("h2").with_property("id", "intro").into(),
//! ]);
//!
//! DocsTransform::new().transform(&mut root)?;
//!
//! let heading = root.children[0].as_element().unwrap();
//! assert_eq!(heading.children.len(), 1);
//! # Ok::<(), hastform_core::TransformError>(())
//! ```

pub mod classify;
pub mod config;
mod error;
pub mod rules;
mod transform;

pub use config::TransformConfig;
pub use error::TransformError;
pub use transform::{DocsTransform, TreeTransform, docs_transform};
