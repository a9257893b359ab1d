//! Table wrappers.
//!
//! Root-level tables are moved into a `div` so they can scroll independently
//! of the page. Only direct children of the root are inspected; tables nested
//! in other elements are left alone.

use std::mem;

use hastform_ast::{Element, Node, Root};
use tracing::trace;

use crate::TransformConfig;
use crate::classify::is_table;

/// Wraps every direct `table` child of the root, in place.
///
/// Each table keeps its index; it becomes the only child of the wrapper.
/// Returns the number of tables wrapped.
pub fn wrap_tables(root: &mut Root, config: &TransformConfig) -> usize {
    let mut wrapped = 0;

    for (position, child) in root.children.iter_mut().enumerate() {
        if !is_table(child) {
            continue;
        }

        let table = mem::replace(child, Node::Root(Root::default()));
        *child = Element::new("div")
            .with_property("class", config.table_wrapper_class.as_str())
            .with_children([table])
            .into();

        trace!(position, "Wrapped table");
        wrapped += 1;
    }

    wrapped
}
