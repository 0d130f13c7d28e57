//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to root.

use std::path::{Component, Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Resolve a possibly-relative path against root
pub fn resolve_under(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Resolve '.' and '..' components without touching the filesystem
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Spell a file path the way a walk from a canonical root reaches it.
///
/// The parent directory is canonicalized (the file itself may not exist yet)
/// and the file name joined back on. When the parent cannot be resolved the
/// path is normalized lexically instead.
pub fn canonical_file_path(path: &Path) -> PathBuf {
    let resolved = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent.canonicalize().ok().map(|dir| dir.join(name))
        }
        _ => None,
    };
    resolved.unwrap_or_else(|| normalize_lexically(path))
}

/// Whether two paths name the same file, comparing canonical forms when the
/// literal spellings differ
pub fn same_file_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Strip a leading '.' so `.go` and `go` name the same extension
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}

/// Check whether a file name ends in `.<ext>` for any of the extensions.
///
/// The name must be longer than the suffix, so a bare `.go` does not match.
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    extensions.iter().any(|ext| {
        let suffix_len = ext.len() + 1;
        name.len() > suffix_len
            && name.ends_with(ext.as_str())
            && name[..name.len() - ext.len()].ends_with('.')
    })
}
