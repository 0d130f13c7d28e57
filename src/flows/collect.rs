//! Collect flow - discover, read, render, write
//!
//! Straight-line pipeline: the collector lists files, each is read once in
//! order, the records are rendered into one buffer, and the buffer is written
//! with a single call.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::backends::scan::{collect_files, ScanOptions};
use crate::core::file_reader::read_body;
use crate::core::model::{CollectError, CollectStatus, CollectSummary, Collection, FileRecord};
use crate::core::paths::{make_relative, normalize_path};
use crate::core::render::{
    extension_label, render_collection, render_found, render_no_files, render_summary_json,
    render_write_failed, render_written, RenderConfig, ReportFormat,
};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "go_code_collection.txt";

/// Default extension
pub const DEFAULT_EXTENSION: &str = "go";

/// Options for one collect run
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Absolute root to walk
    pub root: PathBuf,
    /// Root as the user wrote it, for messages
    pub root_display: String,
    /// Absolute output path
    pub output: PathBuf,
    pub scan: ScanOptions,
    pub render: RenderConfig,
    pub report: ReportFormat,
    /// Omit the per-file listing from the text report
    pub quiet: bool,
    /// Treat "no files" and write failures as errors
    pub strict: bool,
}

/// Read every path in order into a collection
pub fn build_collection(root: &Path, files: &[String]) -> Collection {
    let mut collection = Collection::new();
    for relative in files {
        let body = read_body(&root.join(relative));
        collection.push(FileRecord::new(relative.as_str(), body));
    }
    collection
}

/// Write the buffer, creating or overwriting the file.
///
/// Returns the number of characters written.
pub fn write_output(path: &Path, text: &str) -> io::Result<usize> {
    fs::write(path, text)?;
    Ok(text.chars().count())
}

/// Run the whole pipeline and print the report
pub fn run_collect(options: &CollectOptions) -> Result<CollectSummary> {
    let label = extension_label(&options.scan.extensions);
    let output_display = make_relative(&options.output, &options.root)
        .unwrap_or_else(|| normalize_path(&options.output));

    let files = collect_files(&options.root, &options.scan)?;

    let mut summary = CollectSummary {
        status: CollectStatus::NoFiles,
        root: normalize_path(&options.root),
        extensions: options.scan.extensions.clone(),
        files: files.clone(),
        output: output_display.clone(),
        total_chars: None,
        unreadable: 0,
        error: None,
    };

    let text_report = options.report == ReportFormat::Text;

    if files.is_empty() {
        if text_report {
            println!("{}", render_no_files(&label, &options.root_display));
        } else {
            println!("{}", render_summary_json(&summary));
        }
        if options.strict {
            return Err(CollectError::NoMatchingFiles {
                extensions: label,
                root: options.root.clone(),
            }
            .into());
        }
        return Ok(summary);
    }

    if text_report {
        println!("{}", render_found(&label, &files, options.quiet));
    }

    let collection = build_collection(&options.root, &files);
    summary.unreadable = collection.unreadable_count();
    let buffer = render_collection(&collection, &options.render);

    match write_output(&options.output, &buffer) {
        Ok(total_chars) => {
            info!(output = %options.output.display(), total_chars, "wrote collection");
            summary.status = CollectStatus::Written;
            summary.total_chars = Some(total_chars);
            if text_report {
                println!("{}", render_written(&label, &output_display, total_chars));
            } else {
                println!("{}", render_summary_json(&summary));
            }
            Ok(summary)
        }
        Err(source) => {
            let reason = source.to_string();
            summary.status = CollectStatus::WriteFailed;
            summary.error = Some(reason.clone());
            if text_report {
                println!("{}", render_write_failed(&reason));
            } else {
                println!("{}", render_summary_json(&summary));
            }
            if options.strict {
                return Err(CollectError::Write {
                    path: options.output.clone(),
                    source,
                }
                .into());
            }
            Ok(summary)
        }
    }
}
