// Copyright (c) 2025 Nicholas D. Crosbie
//! CPython backend: prefix execution and reflection over live Python objects.
pub mod patterns;
pub mod runner;
pub mod value;

pub use patterns::*;
pub use runner::*;
pub use value::*;

use pyo3::prelude::*;

/// `str(exception)` for a raised Python error.
pub fn exception_message(py: Python<'_>, err: &PyErr) -> String {
    err.value_bound(py).to_string()
}
