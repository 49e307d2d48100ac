// Copyright (c) 2025 Nicholas D. Crosbie
use std::fmt;
use std::iter;

use pyo3::exceptions::PyAttributeError;
use pyo3::prelude::*;
use pyo3::types::{PyByteArray, PyBytes, PyFloat, PyIterator, PyLong, PyString};

use super::exception_message;
use crate::analysis::{Inspect, ValueKind};

/// A Python exception raised while reflecting on a value, as `str(exception)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectError(pub String);

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PyErr> for InspectError {
    fn from(err: PyErr) -> Self {
        InspectError(Python::with_gil(|py| exception_message(py, &err)))
    }
}

type KeyResult<'py> = Result<Bound<'py, PyAny>, InspectError>;

fn key_result(item: PyResult<Bound<'_, PyAny>>) -> KeyResult<'_> {
    item.map_err(InspectError::from)
}

fn is_scalar(value: &Bound<'_, PyAny>) -> bool {
    // `bool` is a subclass of `int`.
    value.is_none()
        || value.is_instance_of::<PyLong>()
        || value.is_instance_of::<PyFloat>()
        || value.is_instance_of::<PyString>()
        || value.is_instance_of::<PyBytes>()
        || value.is_instance_of::<PyByteArray>()
}

impl<'py> Inspect for Bound<'py, PyAny> {
    type Error = InspectError;
    type Keys = iter::Map<Bound<'py, PyIterator>, fn(PyResult<Bound<'py, PyAny>>) -> KeyResult<'py>>;

    fn identity(&self) -> usize {
        self.as_ptr() as usize
    }

    fn type_name(&self) -> String {
        self.get_type()
            .getattr("__name__")
            .and_then(|name| name.extract::<String>())
            .unwrap_or_else(|_| "object".to_string())
    }

    fn preview(&self) -> Result<String, InspectError> {
        Ok(self.repr()?.to_string_lossy().into_owned())
    }

    fn kind(&self) -> Result<ValueKind, InspectError> {
        if is_scalar(self) {
            return Ok(ValueKind::Scalar);
        }
        let subscriptable = self.hasattr("__getitem__")?;
        if subscriptable && self.hasattr("keys")? {
            Ok(ValueKind::Mapping)
        } else if subscriptable && self.hasattr("__len__")? {
            Ok(ValueKind::Sequence)
        } else {
            Ok(ValueKind::Object)
        }
    }

    fn keys(&self) -> Result<Self::Keys, InspectError> {
        let keys = self.call_method0("keys")?.iter()?;
        Ok(keys.map(key_result as fn(PyResult<Bound<'py, PyAny>>) -> KeyResult<'py>))
    }

    fn key_literal(&self) -> Result<String, InspectError> {
        self.preview()
    }

    fn lookup(&self, key: &Self) -> Result<Self, InspectError> {
        Ok(self.get_item(key)?)
    }

    fn length(&self) -> Result<usize, InspectError> {
        Ok(self.len()?)
    }

    fn item(&self, index: usize) -> Result<Self, InspectError> {
        Ok(self.get_item(index)?)
    }

    fn attribute_names(&self) -> Result<Vec<String>, InspectError> {
        let py = self.py();
        let mut names = Vec::new();
        for name in self.dir()? {
            let name: String = name.extract()?;
            if name.starts_with('_') {
                continue;
            }
            // A missing attribute reads as `None`, which is not callable.
            match self.getattr(name.as_str()) {
                Ok(attr) if attr.is_callable() => continue,
                Ok(_) => {}
                Err(err) if err.is_instance_of::<PyAttributeError>(py) => {}
                Err(err) => return Err(err.into()),
            }
            names.push(name);
        }
        Ok(names)
    }

    fn attribute(&self, name: &str) -> Result<Self, InspectError> {
        Ok(self.getattr(name)?)
    }
}
