//! File collection backend
//!
//! Uses the ignore crate for traversal. By default nothing is filtered by
//! ignore files, and hidden entries below the root are skipped.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::model::CollectError;
use crate::core::paths::{make_relative, matches_extension, same_file_path};

/// Options controlling which files the collector reports
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extensions without the leading '.'
    pub extensions: Vec<String>,
    /// Include dotfiles and dot-directories
    pub hidden: bool,
    /// Honor .gitignore / .ignore files
    pub respect_ignore: bool,
    /// Absolute path never reported (the output file)
    pub exclude: Option<PathBuf>,
}

impl ScanOptions {
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            extensions,
            hidden: false,
            respect_ignore: false,
            exclude: None,
        }
    }
}

/// Collect matching files under root.
///
/// Returns root-relative, '/'-separated paths sorted lexicographically with
/// no duplicates. An empty list is a valid result.
pub fn collect_files(root: &Path, options: &ScanOptions) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(CollectError::RootNotFound(root.to_path_buf()).into());
    }

    let respect = options.respect_ignore;
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(!options.hidden)
        .ignore(respect)
        .parents(respect)
        .git_ignore(respect)
        .git_global(respect)
        .git_exclude(respect)
        .require_git(false)
        .follow_links(false);

    let mut files = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();

        // Symlinks to files count; directory symlinks are never descended.
        if !path.is_file() || !matches_extension(path, &options.extensions) {
            continue;
        }

        if options
            .exclude
            .as_deref()
            .is_some_and(|output| same_file_path(output, path))
        {
            debug!(path = %path.display(), "skipping output file");
            continue;
        }

        let relative = match make_relative(path, root) {
            Some(r) => r,
            None => continue,
        };

        debug!(path = %relative, "discovered");
        files.push(relative);
    }

    files.sort();
    files.dedup();
    Ok(files)
}
