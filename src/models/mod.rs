// Copyright (c) 2025 Nicholas D. Crosbie
pub mod node;
pub mod report;

pub use node::*;
pub use report::*;
