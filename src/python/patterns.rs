// Copyright (c) 2025 Nicholas D. Crosbie
use pyo3::prelude::*;

const MAX_COLUMNS: usize = 5;

/// Suggests library-specific access idioms for data frames and arrays.
///
/// Purely advisory; an ordinary value yields no suggestions.
pub fn framework_patterns(value: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    let mut patterns = Vec::new();

    if value.hasattr("columns")? && value.hasattr("iloc")? {
        patterns.extend(["df.head()", "df.info()", "df.describe()"].map(String::from));
        for column in value.getattr("columns")?.iter()?.take(MAX_COLUMNS) {
            let column = column?.str()?.to_string_lossy().into_owned();
            patterns.push(format!("df['{column}']"));
            patterns.push(format!("df.loc[:, '{column}']"));
        }
    } else if value.hasattr("shape")? && value.hasattr("dtype")? {
        let shape = value.getattr("shape")?;
        let dtype = value.getattr("dtype")?;
        patterns.push(format!("arr.shape  # {}", shape.str()?.to_string_lossy()));
        patterns.push(format!("arr.dtype  # {}", dtype.str()?.to_string_lossy()));

        let dimensions = shape.len()?;
        if dimensions >= 1 {
            patterns.push("arr[0]".to_string());
        }
        if dimensions >= 2 {
            patterns.push("arr[:, 0]".to_string());
        }
    }

    Ok(patterns)
}
