//! Directory lister: find the function files directly inside a directory.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// List the filenames in `dir` that end with `.<extension>`.
///
/// Only regular files directly inside `dir` are returned (no recursion).
/// The suffix match is case-sensitive. Names are sorted byte-wise so that
/// repeated runs over the same directory see the same order.
pub fn list_function_files(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let suffix = format!(".{}", extension);
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            warn!(entry = ?name, "skipping entry with non UTF-8 name");
            continue;
        };
        if !name.ends_with(&suffix) {
            continue;
        }
        if !entry.path().is_file() {
            debug!(entry = name, "skipping non-file entry");
            continue;
        }
        files.push(name.to_string());
    }

    files.sort();
    Ok(files)
}
