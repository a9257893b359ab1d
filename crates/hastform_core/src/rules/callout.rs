//! Blockquote callouts.
//!
//! A blockquote whose first paragraph starts with a marker is styled as a
//! callout:
//!
//! ```markdown
//! > (warn) Back up your data first.
//! ```
//!
//! Every blockquote with a property map and a paragraph gets the base class
//! appended. `(warn)` adds `bq-warn` and `(red)` adds `bq-red`; the marker is
//! removed from the text. Both markers are checked in turn, so
//! `(warn)(red) text` receives both classes.

use hastform_ast::{Element, PropertyValue};
use tracing::{debug, trace};

use crate::classify::{callout_paragraph_index, lead_text_mut};
use crate::{TransformConfig, TransformError};

/// Marker and class pairs, checked in this order.
pub const CALLOUT_MARKERS: [(&str, &str); 2] = [("(warn)", "bq-warn"), ("(red)", "bq-red")];

/// Styles a blockquote as a callout.
///
/// Returns `Ok(true)` if the blockquote was rewritten and `Ok(false)` if it
/// did not match. A matching blockquote whose paragraph has no text child is
/// skipped, or reported as [`TransformError::MissingLeadText`] when
/// `strict_callouts` is set. In both cases nothing is mutated.
pub fn style_callout(element: &mut Element, config: &TransformConfig) -> Result<bool, TransformError> {
    let Some(index) = callout_paragraph_index(element) else {
        return Ok(false);
    };

    let Element {
        properties,
        children,
        ..
    } = element;
    let Some(properties) = properties.as_mut() else {
        return Ok(false);
    };

    let Some(lead) = children[index].as_element_mut().and_then(lead_text_mut) else {
        if config.strict_callouts {
            return Err(TransformError::MissingLeadText { index });
        }
        debug!(index, "Skipping callout without leading text");
        return Ok(false);
    };

    let mut classes = class_list(properties.get("class"));
    classes.push(config.callout_base_class.clone());

    for (marker, class) in CALLOUT_MARKERS {
        if lead.value.starts_with(marker) {
            classes.push(class.to_string());
            lead.value = lead.value.replacen(marker, "", 1);
        }
    }

    let class = classes.join(" ");
    trace!(class = %class, "Styled callout");
    properties.insert("class".to_string(), PropertyValue::String(class));

    Ok(true)
}

/// Splits an existing `class` value on single spaces.
///
/// An absent or `null` class is an empty list. Other values are stringified
/// first, so a list value `["a", "b"]` becomes the single entry `a,b`.
fn class_list(class: Option<&PropertyValue>) -> Vec<String> {
    match class {
        None | Some(PropertyValue::Null) => Vec::new(),
        Some(value) => value.to_string().split(' ').map(str::to_string).collect(),
    }
}
