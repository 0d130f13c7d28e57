//! codecollect - gather source files of one extension into a single text file
//!
//! codecollect:
//! - Walks a root directory for files ending in a given extension
//! - Reads each one as UTF-8, substituting a placeholder when it cannot
//! - Writes every file, headed by its path, into one output file

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    cli::run(cli)
}
