//! CLI module - Command-line interface definition and handler

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::backends::scan::ScanOptions;
use crate::core::paths::{canonical_file_path, normalize_extension, resolve_under};
use crate::core::render::{RenderConfig, ReportFormat, DEFAULT_HEADER_PREFIX};
use crate::flows::collect::{run_collect, CollectOptions, DEFAULT_EXTENSION, DEFAULT_OUTPUT};

/// codecollect - gather every source file of one extension into a single file.
#[derive(Parser, Debug)]
#[command(name = "codecollect")]
#[command(
    author,
    version,
    about,
    long_about = r#"codecollect walks ROOT recursively, finds every file whose name ends in
the selected extension, and writes them all into one output file.

Each file appears as a header line followed by its content verbatim. Files are
separated by one blank line and ordered lexicographically by path. A file that
cannot be read is replaced by an "Error reading file: ..." placeholder.

With no arguments, all .go files under the current directory are written to
go_code_collection.txt.

Examples:
    codecollect
    codecollect --ext rs --output rust_code.txt --header-prefix "// File: "
    codecollect --root services --ext go,mod --report json
"#
)]
pub struct Cli {
    /// Root directory to collect from.
    #[arg(
        long,
        env = "CODECOLLECT_ROOT",
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to collect from (defaults to the current directory).\n\n\
Paths in headers are relative to this root. A relative --output is resolved\n\
against it."
    )]
    pub root: PathBuf,

    /// File extensions to collect (comma-separated).
    #[arg(
        short,
        long = "ext",
        env = "CODECOLLECT_EXT",
        value_name = "EXT",
        value_delimiter = ',',
        default_value = DEFAULT_EXTENSION,
        long_help = "File extensions to collect, without or with the leading dot.\n\n\
Matching is case-sensitive on the file name suffix.\n\n\
Example: --ext go,mod"
    )]
    pub ext: Vec<String>,

    /// Output file.
    #[arg(
        short,
        long,
        env = "CODECOLLECT_OUTPUT",
        default_value = DEFAULT_OUTPUT,
        value_name = "FILE",
        long_help = "Output file, created or overwritten. Relative paths are resolved against\n\
ROOT. The output file itself is never collected."
    )]
    pub output: PathBuf,

    /// Text placed before each path in the header line.
    #[arg(long, default_value = DEFAULT_HEADER_PREFIX, value_name = "TEXT")]
    pub header_prefix: String,

    /// Include hidden files and directories (dotfiles).
    #[arg(long)]
    pub hidden: bool,

    /// Honor .gitignore and .ignore files.
    #[arg(
        long,
        long_help = "Honor .gitignore, .ignore and global git excludes while walking.\n\n\
By default every matching file is collected regardless of ignore rules."
    )]
    pub respect_ignore: bool,

    /// Exit non-zero when nothing is found or the write fails.
    #[arg(
        long,
        long_help = "Treat \"no matching files\" and output write failures as errors with a\n\
non-zero exit status. Without this flag both are reported and the process\n\
exits successfully."
    )]
    pub strict: bool,

    /// Console report format (text/json).
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub report: String,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (do not list discovered files).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed arguments into run options
    pub fn into_options(self) -> Result<CollectOptions> {
        let extensions: Vec<String> = self
            .ext
            .iter()
            .map(|e| normalize_extension(e))
            .filter(|e| !e.is_empty())
            .collect();
        if extensions.is_empty() {
            bail!("at least one non-empty extension is required");
        }

        let report: ReportFormat = self
            .report
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let root_display = self.root.display().to_string();
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("cannot access root directory {}", root_display))?;
        let output = canonical_file_path(&resolve_under(&root, &self.output));

        let mut scan = ScanOptions::new(extensions);
        scan.hidden = self.hidden;
        scan.respect_ignore = self.respect_ignore;
        scan.exclude = Some(output.clone());

        Ok(CollectOptions {
            root,
            root_display,
            output,
            scan,
            render: RenderConfig::with_header_prefix(self.header_prefix),
            report,
            quiet: self.quiet,
            strict: self.strict,
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let options = cli.into_options()?;
    run_collect(&options)?;
    Ok(())
}
