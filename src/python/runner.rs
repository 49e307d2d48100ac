// Copyright (c) 2025 Nicholas D. Crosbie
use std::path::Path;

use pyo3::prelude::*;
use pyo3::types::PyDict;
use tracing::{debug, info};

use super::exception_message;
use crate::error::{ExploreError, Result};
use crate::utils::{read_file_to_string, source_prefix};

/// The two scopes left behind by an executed prefix.
pub struct Bindings<'py> {
    pub globals: Bound<'py, PyDict>,
    pub locals: Bound<'py, PyDict>,
}

impl<'py> Bindings<'py> {
    /// Finds `name` in the local scope, then in the module scope.
    ///
    /// Presence decides, so names bound to `None` or other falsy values are found.
    pub fn lookup(&self, name: &str) -> Result<Bound<'py, PyAny>> {
        for scope in [&self.locals, &self.globals] {
            if let Some(value) = scope.get_item(name)? {
                return Ok(value);
            }
        }
        Err(ExploreError::NotFound(name.to_string()))
    }

    /// Names bound by the prefix itself, locals first, skipping dunder entries.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for scope in [&self.locals, &self.globals] {
            for key in scope.keys() {
                if let Ok(name) = key.extract::<String>() {
                    if !name.starts_with("__") && !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
        }
        names
    }
}

/// Executes the first `line_count` lines of `file_path` in fresh scopes.
///
/// Output of the executed code is not redirected here; see
/// [`with_stdout_to_stderr`].
pub fn run_prefix<'py>(
    py: Python<'py>,
    file_path: &Path,
    line_count: usize,
) -> Result<Bindings<'py>> {
    let content = read_file_to_string(file_path).map_err(|source| ExploreError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    let code = source_prefix(&content, line_count);
    debug!(
        file = %file_path.display(),
        line_count,
        bytes = code.len(),
        "executing source prefix"
    );

    let globals = PyDict::new_bound(py);
    globals.set_item("__name__", "__main__")?;
    globals.set_item("__file__", &*file_path.to_string_lossy())?;
    let locals = PyDict::new_bound(py);

    if let Err(err) = py.run_bound(code, Some(&globals), Some(&locals)) {
        if let Some(traceback) = err.traceback_bound(py) {
            if let Ok(formatted) = traceback.format() {
                debug!(traceback = %formatted, "prefix raised");
            }
        }
        return Err(ExploreError::Execution(exception_message(py, &err)));
    }

    let bindings = Bindings { globals, locals };
    info!(names = ?bindings.names(), "prefix executed");
    Ok(bindings)
}

/// Runs `f` with Python's `sys.stdout` pointed at `sys.stderr`, keeping
/// stdout free for the report.
///
/// Wrap every step that can run user code: the prefix itself, but also the
/// `repr`s, properties and `__getitem__`s reached while walking.
pub fn with_stdout_to_stderr<T>(py: Python<'_>, f: impl FnOnce() -> T) -> Result<T> {
    let sys = py.import_bound("sys")?;
    let stdout = sys.getattr("stdout")?;
    let stderr = sys.getattr("stderr")?;
    sys.setattr("stdout", &stderr)?;

    let result = f();

    sys.setattr("stdout", stdout)?;
    if !stderr.is_none() {
        stderr.call_method0("flush")?;
    }
    Ok(result)
}
