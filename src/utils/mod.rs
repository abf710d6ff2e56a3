pub mod sample_name;

use crate::Result;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// List the direct children of a directory, in listing order unless sorted
pub fn list_children(dir: &Path, sorted: bool) -> Result<Vec<PathBuf>> {
    let walker = if sorted {
        WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name()
    } else {
        WalkDir::new(dir).min_depth(1).max_depth(1)
    };

    let mut children = Vec::new();
    for entry in walker {
        children.push(entry?.into_path());
    }
    Ok(children)
}

// Text after the last separator of the path as given; empty for "kit/" or "/"
pub fn base_name(path: &Path) -> String {
    let text = path.as_os_str().to_string_lossy();
    text.rsplit(std::path::is_separator)
        .next()
        .unwrap_or_default()
        .to_string()
}
