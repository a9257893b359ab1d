//! Transform configuration.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};

use crate::TransformError;

/// Class applied to headings that host a permalink anchor.
pub const DEFAULT_HEADING_CLASS: &str = "relative block flex group";

/// Class applied to the permalink anchor itself.
pub const DEFAULT_PERMALINK_CLASS: &str = "w-4 -ml-5 pl-0.5 sm:pl-0 sm:-ml-6 absolute block group-hover:!text-main !text-zinc-200 shrink-0";

/// Accessible label of the permalink anchor.
pub const DEFAULT_PERMALINK_LABEL: &str = "Permalink";

/// Visible text of the permalink anchor.
pub const DEFAULT_PERMALINK_TEXT: &str = "#";

/// Class appended to every recognized blockquote.
pub const DEFAULT_CALLOUT_BASE_CLASS: &str = "bg-default";

/// Class of the container inserted around root-level tables.
pub const DEFAULT_TABLE_WRAPPER_CLASS: &str = "table-wrapper";

/// Configuration for [`DocsTransform`](crate::DocsTransform).
///
/// Every field is optional in JSON; missing fields take the defaults above.
///
/// ```rust
/// use hastform_core::TransformConfig;
///
/// let config = TransformConfig::from_json(r#"{
///     // JSONC comments are allowed
///     "tableWrapperClass": "overflow-x-auto",
/// }"#).unwrap();
///
/// assert_eq!(config.table_wrapper_class, "overflow-x-auto");
/// assert_eq!(config.callout_base_class, "bg-default");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Class written to anchored headings (replaces any existing class).
    pub heading_class: String,

    /// Class of the appended permalink anchor.
    pub permalink_class: String,

    /// `aria-label` of the permalink anchor.
    pub permalink_label: String,

    /// Text content of the permalink anchor.
    pub permalink_text: String,

    /// Class appended to blockquotes with a leading paragraph.
    pub callout_base_class: String,

    /// Class of the table wrapper `div`.
    pub table_wrapper_class: String,

    /// Fail the transform when a callout paragraph has no text child,
    /// instead of skipping that blockquote.
    pub strict_callouts: bool,
}

impl TransformConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            heading_class: DEFAULT_HEADING_CLASS.to_string(),
            permalink_class: DEFAULT_PERMALINK_CLASS.to_string(),
            permalink_label: DEFAULT_PERMALINK_LABEL.to_string(),
            permalink_text: DEFAULT_PERMALINK_TEXT.to_string(),
            callout_base_class: DEFAULT_CALLOUT_BASE_CLASS.to_string(),
            table_wrapper_class: DEFAULT_TABLE_WRAPPER_CLASS.to_string(),
            strict_callouts: false,
        }
    }

    /// Loads configuration from a JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TransformError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TransformError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// Comments and trailing commas are accepted. An empty document yields
    /// the default configuration.
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| TransformError::config(format!("Invalid JSON: {}", e)))?;

        match value {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| TransformError::config(format!("Invalid config: {}", e))),
            None => Ok(Self::new()),
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::new()
    }
}
