// Copyright (c) 2025 Nicholas D. Crosbie
pub mod kind;
pub mod walker;

pub use kind::*;
pub use walker::*;
