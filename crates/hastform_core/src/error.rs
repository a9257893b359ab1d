//! Transform error types.

use hastform_ast::AstError;
use thiserror::Error;

/// Errors that can occur while configuring or running a transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A callout paragraph has no text child to read markers from.
    ///
    /// Only raised when `strict_callouts` is enabled.
    #[error("Callout paragraph at blockquote child {index} has no leading text")]
    MissingLeadText {
        /// Index of the paragraph within the blockquote's children.
        index: usize,
    },

    /// The tree could not be decoded or encoded.
    #[error("AST error: {0}")]
    Ast(#[from] AstError),
}

impl TransformError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
