//! Trigger predicates for the rewrite rules.
//!
//! These are pure checks; they never mutate the node they inspect.

use hastform_ast::{Element, Node, Text};

/// Heading tags that receive a permalink anchor. `h6` is intentionally absent.
pub const ANCHOR_HEADING_TAGS: [&str; 5] = ["h1", "h2", "h3", "h4", "h5"];

/// Returns the identifier of a heading that should host a permalink anchor.
///
/// The element must be one of [`ANCHOR_HEADING_TAGS`] and carry a truthy `id`
/// property. Identifiers are assigned upstream; a heading without one is
/// simply not a match.
pub fn anchor_heading_id(element: &Element) -> Option<String> {
    if !ANCHOR_HEADING_TAGS.contains(&element.tag_name.as_str()) {
        return None;
    }

    let id = element.property("id")?;
    id.is_truthy().then(|| id.to_string())
}

/// Returns the index of the paragraph a callout marker would be read from.
///
/// Matches a `blockquote` that has a property map and at least one `p`
/// element child; the first such child wins.
pub fn callout_paragraph_index(element: &Element) -> Option<usize> {
    if !element.is("blockquote") || element.properties.is_none() {
        return None;
    }

    element
        .children
        .iter()
        .position(|child| child.is_element_with_tag("p"))
}

/// Returns the first text child of a paragraph, mutably.
pub fn lead_text_mut(paragraph: &mut Element) -> Option<&mut Text> {
    paragraph
        .children
        .iter_mut()
        .find_map(|child| child.as_text_mut())
}

/// Returns true if the node is a `table` element.
#[inline]
pub fn is_table(node: &Node) -> bool {
    node.is_element_with_tag("table")
}
