// Copyright (c) 2025 Nicholas D. Crosbie
use std::io;
use std::path::PathBuf;

use pyo3::{PyErr, Python};
use thiserror::Error;

use crate::python::exception_message;

/// Failures that end an exploration before a tree can be produced.
///
/// The `Display` text of each variant is exactly the message placed in the
/// `error` field of the JSON report.
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("Execution failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The executed prefix raised. Holds `str(exception)`.
    #[error("Execution failed: {0}")]
    Execution(String),

    /// Interpreter-level failure outside the executed prefix.
    #[error("Execution failed: {0}")]
    Python(String),

    #[error("Variable '{0}' not found")]
    NotFound(String),

    #[error("Invalid configuration: {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl From<PyErr> for ExploreError {
    fn from(err: PyErr) -> Self {
        Python::with_gil(|py| ExploreError::Python(exception_message(py, &err)))
    }
}

pub type Result<T, E = ExploreError> = std::result::Result<T, E>;
