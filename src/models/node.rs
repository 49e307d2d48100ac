// Copyright (c) 2025 Nicholas D. Crosbie
use serde::{Deserialize, Serialize};

/// Preview shown for nodes cut off by the depth budget or the cycle guard.
pub const TERMINAL_PREVIEW: &str = "...";

/// One reachable value and the expression that reaches it from the root.
///
/// Field names on the wire are the ones the editor panel reads
/// (`expr`, `type`, `preview`, `children`, `error`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionNode {
    #[serde(rename = "expr")]
    pub expression: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub preview: String,
    pub children: Vec<IntrospectionNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntrospectionNode {
    pub fn new(expression: String, type_name: String, preview: String) -> Self {
        Self {
            expression,
            type_name,
            preview,
            children: Vec::new(),
            error: None,
        }
    }

    /// A node that is never expanded: depth exhausted or already visited.
    pub fn terminal(expression: String, type_name: String) -> Self {
        Self::new(expression, type_name, TERMINAL_PREVIEW.to_string())
    }

    pub fn is_terminal(&self) -> bool {
        self.preview == TERMINAL_PREVIEW && self.children.is_empty()
    }

    /// Looks up a descendant (or this node) by its access expression.
    pub fn find(&self, expression: &str) -> Option<&IntrospectionNode> {
        if self.expression == expression {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(expression))
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(IntrospectionNode::node_count)
            .sum::<usize>()
    }
}
