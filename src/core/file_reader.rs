//! File reading with placeholder substitution
//!
//! A file that cannot be read never aborts a run. Its failure is captured as
//! `FileBody::Unreadable` and rendered as a placeholder in the output.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::model::FileBody;

/// Read a file's entire content as UTF-8, verbatim.
///
/// The file handle is scoped to this call and released on every path.
pub fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Read a file, turning any failure into an unreadable body
pub fn read_body(path: &Path) -> FileBody {
    match read_text(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "read file");
            FileBody::Text(content)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read file");
            FileBody::Unreadable(describe_io_error(&e))
        }
    }
}

/// Human-readable description of a read failure
fn describe_io_error(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::InvalidData => format!("invalid UTF-8 content ({})", e),
        _ => e.to_string(),
    }
}
