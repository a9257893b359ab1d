//! AST error types.

use thiserror::Error;

/// Errors that can occur while decoding or encoding a document tree.
#[derive(Debug, Error)]
pub enum AstError {
    /// The input is not valid HAST JSON.
    #[error("Invalid HAST JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A node is missing a field required by its kind.
    #[error("Missing field `{field}` on {kind} node")]
    MissingField {
        /// Node kind (`element`, `text`, ...).
        kind: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },

    /// An element node carries an empty `tagName`.
    #[error("Element node has an empty tagName")]
    EmptyTagName,

    /// A tree was expected but the top-level node is not a root.
    #[error("Expected a root node, found `{0}`")]
    NotRoot(String),
}

impl AstError {
    /// Creates a missing field error.
    pub fn missing_field(kind: &'static str, field: &'static str) -> Self {
        Self::MissingField { kind, field }
    }
}
