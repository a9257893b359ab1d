//! The rewrite rules applied by [`DocsTransform`](crate::DocsTransform).
//!
//! - [`heading_anchor`] - permalink anchors on `h1`..`h5`
//! - [`callout`] - `(warn)` / `(red)` markers in blockquotes
//! - [`table_wrapper`] - layout containers around root-level tables

pub mod callout;
pub mod heading_anchor;
pub mod table_wrapper;
