//! Renderer module
//!
//! Two outputs: the collection text written to the output file, and the
//! console report (text or json) describing the run.

use colored::Colorize;

use crate::core::model::{Collection, CollectSummary};

/// Default header prefix placed before each path
pub const DEFAULT_HEADER_PREFIX: &str = "// File: ";

/// Console report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Render configuration for the collection text
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub header_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_header_prefix(prefix: impl Into<String>) -> Self {
        Self {
            header_prefix: prefix.into(),
        }
    }
}

/// Build the output buffer for a collection.
///
/// Per record: header, body, then an empty separator fragment except after
/// the last record. Fragments are joined with '\n'.
pub fn render_collection(collection: &Collection, config: &RenderConfig) -> String {
    let last = collection.len().saturating_sub(1);
    let mut fragments: Vec<String> = Vec::with_capacity(collection.len() * 3);

    for (i, record) in collection.records.iter().enumerate() {
        fragments.push(format!("{}{}", config.header_prefix, record.path));
        fragments.push(record.body.as_output());
        if i < last {
            fragments.push(String::new());
        }
    }

    fragments.join("\n")
}

/// Console wording for an extension list, e.g. ".go" or ".go/.mod"
pub fn extension_label(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join("/")
}

/// Text lines announcing the discovered files
pub fn render_found(label: &str, files: &[String], quiet: bool) -> String {
    let mut out = format!(
        "{} {} {} files:",
        "Found".green().bold(),
        files.len(),
        label
    );
    if !quiet {
        for file in files {
            out.push_str(&format!("\n  - {}", file));
        }
    }
    out
}

/// Text line for an empty run
pub fn render_no_files(label: &str, root_display: &str) -> String {
    format!(
        "No {} files found in {} and its subdirectories.",
        label, root_display
    )
    .yellow()
    .to_string()
}

/// Text lines for a successful write
pub fn render_written(label: &str, output: &str, total_chars: usize) -> String {
    format!(
        "\n{} {} code to: {}\nTotal characters: {}",
        "Successfully wrote all".green().bold(),
        label,
        output,
        total_chars
    )
}

/// Text line for a failed write
pub fn render_write_failed(error: &str) -> String {
    format!("{} {}", "Error writing to file:".red().bold(), error)
}

/// JSON report for the whole run
pub fn render_summary_json(summary: &CollectSummary) -> String {
    serde_json::to_string(summary).unwrap_or_else(|e| {
        format!(
            r#"{{"status":"error","error":{}}}"#,
            serde_json::Value::String(e.to_string())
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{CollectStatus, FileBody, FileRecord};

    fn text(path: &str, content: &str) -> FileRecord {
        FileRecord::new(path, FileBody::Text(content.to_string()))
    }

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_two_files() {
        let mut collection = Collection::new();
        collection.push(text("a/x.go", "package a"));
        collection.push(text("b/y.go", "package b"));

        let out = render_collection(&collection, &RenderConfig::default());
        assert_eq!(
            out,
            "// File: a/x.go\npackage a\n\n// File: b/y.go\npackage b"
        );
    }

    #[test]
    fn test_render_single_file_has_no_separator() {
        let mut collection = Collection::new();
        collection.push(text("main.go", "package main\n"));

        let out = render_collection(&collection, &RenderConfig::default());
        assert_eq!(out, "// File: main.go\npackage main\n");
    }

    #[test]
    fn test_render_empty_collection() {
        let out = render_collection(&Collection::new(), &RenderConfig::default());
        assert_eq!(out, "");
    }

    #[test]
    fn test_render_n_headers_and_separators() {
        let mut collection = Collection::new();
        for name in ["a.go", "b.go", "c.go", "d.go"] {
            collection.push(text(name, "x"));
        }

        let out = render_collection(&collection, &RenderConfig::default());
        assert_eq!(out.matches("// File: ").count(), 4);
        assert_eq!(out.matches("x\n\n").count(), 3);
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_render_placeholder_body() {
        let mut collection = Collection::new();
        collection.push(FileRecord::new(
            "bad.go",
            FileBody::Unreadable("permission denied".into()),
        ));

        let out = render_collection(&collection, &RenderConfig::default());
        assert_eq!(
            out,
            "// File: bad.go\nError reading file: permission denied"
        );
    }

    #[test]
    fn test_render_custom_prefix() {
        let mut collection = Collection::new();
        collection.push(text("lib.rs", "fn x() {}"));

        let out = render_collection(&collection, &RenderConfig::with_header_prefix("# "));
        assert_eq!(out, "# lib.rs\nfn x() {}");
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("xml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_extension_label() {
        assert_eq!(extension_label(&["go".to_string()]), ".go");
        assert_eq!(
            extension_label(&["go".to_string(), "mod".to_string()]),
            ".go/.mod"
        );
    }

    #[test]
    fn test_render_found_lists_files_unless_quiet() {
        no_color();
        let files = vec!["a/x.go".to_string(), "b/y.go".to_string()];

        assert_eq!(
            render_found(".go", &files, false),
            "Found 2 .go files:\n  - a/x.go\n  - b/y.go"
        );
        assert_eq!(render_found(".go", &files, true), "Found 2 .go files:");
    }

    #[test]
    fn test_render_written() {
        no_color();
        assert_eq!(
            render_written(".go", "out.txt", 42),
            "\nSuccessfully wrote all .go code to: out.txt\nTotal characters: 42"
        );
    }

    #[test]
    fn test_render_summary_json() {
        let summary = CollectSummary {
            status: CollectStatus::Written,
            root: "/src".into(),
            extensions: vec!["go".into()],
            files: vec!["a.go".into()],
            output: "/src/go_code_collection.txt".into(),
            total_chars: Some(20),
            unreadable: 0,
            error: None,
        };

        let value: serde_json::Value =
            serde_json::from_str(&render_summary_json(&summary)).unwrap();
        assert_eq!(value["status"], "written");
        assert_eq!(value["total_chars"], 20);
        assert_eq!(value["files"][0], "a.go");
    }
}
