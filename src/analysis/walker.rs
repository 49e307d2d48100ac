// Copyright (c) 2025 Nicholas D. Crosbie
use std::collections::HashSet;

use tracing::{debug, trace};

use super::{Inspect, ValueKind};
use crate::models::IntrospectionNode;

pub const DEFAULT_MAX_DEPTH: usize = 4;
pub const DEFAULT_MAX_ITEMS: usize = 20;
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Hard ceiling on expanded levels, whatever `max_depth` asks for.
///
/// The walk recurses once per level; deeper values become terminal nodes.
pub const MAX_WALK_DEPTH: usize = 128;

/// Bounds applied to a single walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkLimits {
    /// Levels expanded below and including the root, capped at [`MAX_WALK_DEPTH`].
    pub max_depth: usize,
    /// Children built per node.
    pub max_items: usize,
    /// Characters kept from a value's rendering.
    pub preview_chars: usize,
}

impl Default for WalkLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_items: DEFAULT_MAX_ITEMS,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Expands `value` into a tree of access expressions rooted at `root_expression`.
pub fn introspect<V: Inspect>(
    value: V,
    root_expression: &str,
    limits: WalkLimits,
) -> IntrospectionNode {
    let mut walk = Walk {
        limits,
        visited: HashSet::new(),
        retained: Vec::new(),
    };
    let depth = limits.max_depth.min(MAX_WALK_DEPTH);
    if depth < limits.max_depth {
        debug!(requested = limits.max_depth, depth, "depth limit capped");
    }
    let root = walk.visit(value, root_expression.to_string(), depth);
    debug!(
        root = root_expression,
        nodes = root.node_count(),
        visited = walk.visited.len(),
        "introspection finished"
    );
    root
}

struct Walk<V> {
    limits: WalkLimits,
    visited: HashSet<usize>,
    // Every visited value stays alive until the walk ends so its identity
    // cannot be handed out again to a later value.
    retained: Vec<V>,
}

impl<V: Inspect> Walk<V> {
    fn visit(&mut self, value: V, expression: String, depth: usize) -> IntrospectionNode {
        let type_name = value.type_name();

        if depth == 0 || !self.visited.insert(value.identity()) {
            trace!(%expression, depth, "terminal node");
            return IntrospectionNode::terminal(expression, type_name);
        }

        let preview = match value.preview() {
            Ok(text) => truncate(&text, self.limits.preview_chars),
            Err(_) => format!("<{type_name} object>"),
        };

        let mut node = IntrospectionNode::new(expression, type_name, preview);
        if let Err(err) = self.expand(&value, &mut node, depth - 1) {
            debug!(expression = %node.expression, error = %err, "enumeration failed");
            node.error = Some(err.to_string());
        }

        self.retained.push(value);
        node
    }

    fn expand(
        &mut self,
        value: &V,
        node: &mut IntrospectionNode,
        depth: usize,
    ) -> Result<(), V::Error> {
        let kind = value.kind()?;
        trace!(expression = %node.expression, %kind, "expanding");

        match kind {
            ValueKind::Scalar => {}
            ValueKind::Mapping => {
                for key in value.keys()?.take(self.limits.max_items) {
                    let key = key?;
                    let entry = key
                        .key_literal()
                        .and_then(|literal| value.lookup(&key).map(|child| (literal, child)));
                    match entry {
                        Ok((literal, child)) => {
                            let expression = format!("{}[{}]", node.expression, literal);
                            node.children.push(self.visit(child, expression, depth));
                        }
                        Err(err) => skip(&node.expression, &err),
                    }
                }
            }
            ValueKind::Sequence => {
                let length = value.length()?.min(self.limits.max_items);
                for index in 0..length {
                    match value.item(index) {
                        Ok(child) => {
                            let expression = format!("{}[{}]", node.expression, index);
                            node.children.push(self.visit(child, expression, depth));
                        }
                        Err(err) => skip(&node.expression, &err),
                    }
                }
            }
            ValueKind::Object => {
                let names = value.attribute_names()?;
                for name in names.into_iter().take(self.limits.max_items) {
                    match value.attribute(&name) {
                        Ok(child) => {
                            let expression = format!("{}.{}", node.expression, name);
                            node.children.push(self.visit(child, expression, depth));
                        }
                        Err(err) => skip(&node.expression, &err),
                    }
                }
            }
        }

        Ok(())
    }
}

fn skip(parent: &str, err: &impl std::fmt::Display) {
    trace!(parent, error = %err, "child skipped");
}

/// Keeps at most `max_chars` characters of `text`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
