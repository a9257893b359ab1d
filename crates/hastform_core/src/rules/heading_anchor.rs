//! Heading permalink anchors.
//!
//! A heading with an identifier gets a fixed class and a trailing `a`
//! element linking to itself:
//!
//! ```text
//! <h2 id="intro">Intro</h2>
//! <h2 id="intro" class="relative block flex group">Intro<a href="#intro" class="..." aria-label="Permalink">#</a></h2>
//! ```

use hastform_ast::{Element, Node};
use tracing::trace;

use crate::TransformConfig;
use crate::classify::anchor_heading_id;

/// Adds a permalink anchor to a matching heading.
///
/// Overwrites the heading's `class` and appends the anchor as its last child.
/// Other properties, including `id`, are left as they are.
/// Returns true if the heading was rewritten.
pub fn add_permalink(element: &mut Element, config: &TransformConfig) -> bool {
    let Some(id) = anchor_heading_id(element) else {
        return false;
    };

    element.set_property("class", config.heading_class.as_str());
    element.children.push(permalink(&id, config));

    trace!(tag = %element.tag_name, id = %id, "Added heading permalink");
    true
}

/// Builds the permalink anchor for an identifier.
pub fn permalink(id: &str, config: &TransformConfig) -> Node {
    Element::new("a")
        .with_property("href", format!("#{}", id))
        .with_property("class", config.permalink_class.as_str())
        .with_property("aria-label", config.permalink_label.as_str())
        .with_children([Node::text(config.permalink_text.as_str())])
        .into()
}
