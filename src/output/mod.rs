// Copyright (c) 2025 Nicholas D. Crosbie
pub mod formatter;

pub use formatter::*;
