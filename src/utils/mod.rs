// Copyright (c) 2025 Nicholas D. Crosbie
pub mod file_utils;

pub use file_utils::*;
