// Copyright (c) 2025 Nicholas D. Crosbie
//! Re-executes a Python file up to a line and describes one of its variables
//! as a tree of access expressions (`obj['key'][0].attr`).
pub mod analysis;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod python;
pub mod utils;

use std::path::PathBuf;

use pyo3::prelude::*;
use tracing::{debug, warn};

use crate::analysis::{introspect, WalkLimits};
use crate::args::Args;
use crate::config::Config;
use crate::error::{ExploreError, Result};
use crate::models::Report;
use crate::python::{framework_patterns, run_prefix, with_stdout_to_stderr};

/// Everything needed for one exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreRequest {
    pub file: PathBuf,
    pub line: usize,
    pub variable: String,
    pub limits: WalkLimits,
    pub patterns: bool,
}

/// Settings after merging command-line flags over the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub request: ExploreRequest,
    pub pretty: bool,
}

impl Settings {
    pub fn resolve(args: &Args) -> Result<Self> {
        let config = Config::resolve(args.config.as_deref(), &args.file)?;
        let mut limits = config.limits();
        if let Some(max_depth) = args.max_depth {
            limits.max_depth = max_depth;
        }
        if let Some(max_items) = args.max_items {
            limits.max_items = max_items;
        }

        Ok(Self {
            request: ExploreRequest {
                file: args.file.clone(),
                line: args.line,
                variable: args.variable.clone(),
                limits,
                patterns: args.patterns || config.output.patterns.unwrap_or(false),
            },
            pretty: !args.compact && config.output.pretty.unwrap_or(true),
        })
    }
}

/// Runs the file prefix and walks the requested variable.
///
/// Never fails: execution and lookup problems become an error report.
pub fn explore(request: &ExploreRequest) -> Report {
    Python::with_gil(|py| match explore_with(py, request) {
        Ok(report) => report,
        Err(err) => {
            if let ExploreError::Read { path, .. } = &err {
                warn!(file = %path.display(), "source file unreadable");
            }
            debug!(error = %err, "exploration ended without a tree");
            Report::from(err)
        }
    })
}

fn explore_with(py: Python<'_>, request: &ExploreRequest) -> Result<Report> {
    with_stdout_to_stderr(py, || walk_variable(py, request))?
}

fn walk_variable(py: Python<'_>, request: &ExploreRequest) -> Result<Report> {
    let bindings = run_prefix(py, &request.file, request.line)?;
    let target = bindings.lookup(&request.variable)?;

    let patterns = request.patterns.then(|| {
        framework_patterns(&target).unwrap_or_else(|err| {
            warn!(error = %err, "pattern suggestions unavailable");
            Vec::new()
        })
    });
    let root = introspect(target, &request.variable, request.limits);

    Ok(Report::Tree { root, patterns })
}
