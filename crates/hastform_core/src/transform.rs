//! Transform entry point.
//!
//! This module provides:
//!
//! - [`TreeTransform`] - The trait a host pipeline calls once per tree
//! - [`DocsTransform`] - The heading, callout and table rewrites in one pass
//! - [`docs_transform`] - Factory returning the transform as a plain callable
//!
//! # Architecture
//!
//! A single depth-first, pre-order walk applies the rules in a fixed order:
//!
//! 1. root: wrap direct `table` children
//! 2. element: style blockquote callouts, then add heading permalinks
//!
//! Rules mutate the tree in place. The walk then descends into the node's
//! children as they are after the rules ran, so a wrapped table is still
//! reached through its wrapper and an appended anchor is visited as a plain
//! `a` element.
//!
//! The transform itself holds only its configuration. Counters live in a
//! per-call visitor, so nothing carries over between trees and one
//! [`DocsTransform`] may be shared across threads.
//!
//! Running the transform twice on the same tree does not wrap tables twice,
//! but headings receive a second anchor and callouts a second base class.
//!
//! # Example
//!
//! ```rust
//! use hastform_ast::{Element, Node, Root};
//! use hastform_core::docs_transform;
//!
//! let transform = docs_transform();
//!
//! let mut root = Root::new(vec![Node::element("table"), Node::element("p")]);
//! transform(&mut root).unwrap();
//!
//! assert!(root.children[0].is_element_with_tag("div"));
//! ```

use std::ops::ControlFlow;

use hastform_ast::visitor::walk_root_mut;
use hastform_ast::{Element, MutVisitor, Root, VisitMutResult};
use tracing::debug;

use crate::rules::{callout, heading_anchor, table_wrapper};
use crate::{TransformConfig, TransformError};

/// Trait for whole-tree transforms.
///
/// Implementations must be `Send + Sync` so a host can share one instance
/// while converting several documents.
pub trait TreeTransform: Send + Sync {
    /// Human-readable name for this transform, used for logging.
    fn name(&self) -> &str;

    /// Applies the transform to a tree, in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree violates a precondition the transform
    /// does not tolerate. The tree may be partially rewritten in that case.
    fn transform(&self, root: &mut Root) -> Result<(), TransformError>;
}

/// Heading anchors, blockquote callouts and table wrappers.
#[derive(Debug, Clone, Default)]
pub struct DocsTransform {
    config: TransformConfig,
}

impl DocsTransform {
    /// Creates a transform with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transform with the given configuration.
    pub fn with_config(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Decodes a HAST JSON tree, transforms it and encodes it again.
    pub fn transform_json(&self, json: &str) -> Result<String, TransformError> {
        let mut root = Root::from_json(json)?;
        self.transform(&mut root)?;
        Ok(root.to_json()?)
    }
}

impl TreeTransform for DocsTransform {
    fn name(&self) -> &str {
        "docs"
    }

    fn transform(&self, root: &mut Root) -> Result<(), TransformError> {
        let mut rules = RuleVisitor::new(&self.config);

        if let ControlFlow::Break(err) = walk_root_mut(&mut rules, root) {
            return Err(err);
        }

        debug!(
            transform = self.name(),
            headings = rules.stats.headings,
            callouts = rules.stats.callouts,
            tables = rules.stats.tables,
            "Transformed document tree"
        );
        Ok(())
    }
}

/// Returns the default transform as a callable.
///
/// Call the factory once and apply the returned function to each tree.
pub fn docs_transform() -> impl Fn(&mut Root) -> Result<(), TransformError> + Send + Sync {
    let transform = DocsTransform::new();
    move |root: &mut Root| transform.transform(root)
}

/// Number of times each rule fired during one call.
#[derive(Debug, Default)]
struct RuleStats {
    headings: usize,
    callouts: usize,
    tables: usize,
}

/// Per-call rule dispatcher.
struct RuleVisitor<'a> {
    config: &'a TransformConfig,
    stats: RuleStats,
}

impl<'a> RuleVisitor<'a> {
    fn new(config: &'a TransformConfig) -> Self {
        Self {
            config,
            stats: RuleStats::default(),
        }
    }
}

impl MutVisitor for RuleVisitor<'_> {
    type Break = TransformError;

    fn visit_root_mut(&mut self, root: &mut Root) -> VisitMutResult<TransformError> {
        self.stats.tables += table_wrapper::wrap_tables(root, self.config);
        ControlFlow::Continue(())
    }

    fn visit_element_mut(&mut self, element: &mut Element) -> VisitMutResult<TransformError> {
        match callout::style_callout(element, self.config) {
            Ok(true) => self.stats.callouts += 1,
            Ok(false) => {}
            Err(err) => return ControlFlow::Break(err),
        }

        if heading_anchor::add_permalink(element, self.config) {
            self.stats.headings += 1;
        }

        ControlFlow::Continue(())
    }
}
