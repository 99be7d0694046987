mod cli_tests;
mod execute;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Import a social graph JSON file into the database
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook import graph.json                 # Add rows, replacing rows with the same key
  fakebook import graph.json --clear         # Empty every relation first

The file holds one array per relation: users, friends, cities,
user_current_cities, user_hometown_cities, albums, photos, tags, events.
Missing arrays are treated as empty.")]
pub struct ImportCmd {
    /// Path to the dataset JSON file
    pub file: PathBuf,

    /// Delete existing rows before importing
    #[arg(long, default_value_t = false)]
    pub clear: bool,
}

impl CommandRunner for ImportCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
