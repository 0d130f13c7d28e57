//! Collection model
//!
//! A run produces a `Collection`: one `FileRecord` per discovered path, in
//! discovery order. Records live only until they are rendered.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// The text that stands in for a file's content in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    /// Content read successfully, verbatim
    Text(String),
    /// The file could not be read; holds the error description
    Unreadable(String),
}

impl FileBody {
    /// Prefix of the placeholder written in place of unreadable content
    pub const PLACEHOLDER_PREFIX: &'static str = "Error reading file: ";

    /// The text emitted into the output buffer for this body
    pub fn as_output(&self) -> String {
        match self {
            FileBody::Text(content) => content.clone(),
            FileBody::Unreadable(reason) => format!("{}{}", Self::PLACEHOLDER_PREFIX, reason),
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileBody::Unreadable(_))
    }
}

/// A discovered path paired with its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to root, using '/' as separator
    pub path: String,
    pub body: FileBody,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, body: FileBody) -> Self {
        Self {
            path: path.into(),
            body,
        }
    }
}

/// Ordered records of one run
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub records: Vec<FileRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that carry a placeholder instead of content
    pub fn unreadable_count(&self) -> usize {
        self.records.iter().filter(|r| r.body.is_unreadable()).count()
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectStatus {
    Written,
    NoFiles,
    WriteFailed,
}

/// Serializable outcome of one run, used by the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct CollectSummary {
    pub status: CollectStatus,
    pub root: String,
    pub extensions: Vec<String>,
    pub files: Vec<String>,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_chars: Option<usize>,
    pub unreadable: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Errors a run can end with
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("no {extensions} files found under {}", .root.display())]
    NoMatchingFiles { extensions: String, root: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
