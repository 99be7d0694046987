mod execute;
mod output;
mod output_tests;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// States hosting the most events
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook event-states                      # Busiest states and their event count

Every state tied for the highest count is listed, alphabetically.")]
pub struct EventStatesCmd {}

impl CommandRunner for EventStatesCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
