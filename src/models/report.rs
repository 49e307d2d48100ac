// Copyright (c) 2025 Nicholas D. Crosbie
use serde::Serialize;

use super::IntrospectionNode;
use crate::error::ExploreError;

/// The single JSON document written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Tree {
        #[serde(flatten)]
        root: IntrospectionNode,
        #[serde(skip_serializing_if = "Option::is_none")]
        patterns: Option<Vec<String>>,
    },
    Error {
        error: String,
    },
}

impl Report {
    pub fn tree(root: IntrospectionNode) -> Self {
        Report::Tree {
            root,
            patterns: None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Report::Error { .. })
    }
}

impl From<ExploreError> for Report {
    fn from(err: ExploreError) -> Self {
        Report::Error {
            error: err.to_string(),
        }
    }
}
