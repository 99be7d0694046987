mod execute;
mod output;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Longest, shortest and most common first names
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook first-names                       # Extremes over distinct first names
  fakebook first-names -o toon")]
pub struct FirstNamesCmd {}

impl CommandRunner for FirstNamesCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
