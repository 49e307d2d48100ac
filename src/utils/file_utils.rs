// Copyright (c) 2025 Nicholas D. Crosbie
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub fn read_file_to_string(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Searches `start_dir` and its ancestors for a file called `file_name`.
pub fn find_config_file(start_dir: &Path, file_name: &str) -> Option<PathBuf> {
    let candidate = start_dir.join(file_name);
    if candidate.is_file() {
        return Some(candidate);
    }

    let parent = start_dir.parent()?;
    find_config_file(parent, file_name)
}

/// The first `line_count` lines of `content`, line terminators included.
///
/// Returns all of `content` when it has fewer lines.
pub fn source_prefix(content: &str, line_count: usize) -> &str {
    if line_count == 0 {
        return "";
    }
    content
        .match_indices('\n')
        .nth(line_count - 1)
        .map_or(content, |(end, _)| &content[..=end])
}
