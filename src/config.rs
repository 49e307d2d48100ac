// Copyright (c) 2025 Nicholas D. Crosbie
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::analysis::WalkLimits;
use crate::error::{ExploreError, Result};
use crate::utils::{find_config_file, read_file_to_string};

pub const CONFIG_FILE_NAME: &str = "objpath.toml";

/// Contents of an `objpath.toml` file. Every key is optional.
///
/// ```toml
/// [walk]
/// max_depth = 6
/// max_items = 50
/// preview_chars = 80
///
/// [output]
/// pretty = false
/// patterns = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub walk: WalkConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    pub max_depth: Option<usize>,
    pub max_items: Option<usize>,
    pub preview_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
    pub patterns: Option<bool>,
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|err| ExploreError::Config {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = read_file_to_string(path).map_err(|err| ExploreError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Loads the explicit `path` if given, otherwise the nearest
    /// `objpath.toml` above `source_file`, otherwise the defaults.
    pub fn resolve(path: Option<&Path>, source_file: &Path) -> Result<Self> {
        let located = match path {
            Some(path) => Some(path.to_path_buf()),
            None => discover(source_file),
        };

        match located {
            Some(path) => {
                debug!(config = %path.display(), "loading configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn limits(&self) -> WalkLimits {
        let defaults = WalkLimits::default();
        WalkLimits {
            max_depth: self.walk.max_depth.unwrap_or(defaults.max_depth),
            max_items: self.walk.max_items.unwrap_or(defaults.max_items),
            preview_chars: self.walk.preview_chars.unwrap_or(defaults.preview_chars),
        }
    }
}

fn discover(source_file: &Path) -> Option<PathBuf> {
    let absolute = source_file.canonicalize().ok()?;
    find_config_file(absolute.parent()?, CONFIG_FILE_NAME)
}
