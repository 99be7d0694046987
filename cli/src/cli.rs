//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure. Individual command
//! definitions are in the `commands` module.

use clap::Parser;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reports over the Fakebook social graph", long_about = None)]
pub struct Args {
    /// Database location: a file path, `sqlite://path`, `:memory:` or `postgres://...`
    ///
    /// If not specified, resolves in order:
    ///   1. .fakebook.json in the current directory
    ///   2. DATABASE_URL or FAKEBOOK_DB_PATH environment variables
    ///   3. .fakebook/cozo.sqlite (project-local)
    ///   4. ~/.fakebook/cozo.sqlite (user-global, when it exists)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log every script the reports run
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}
