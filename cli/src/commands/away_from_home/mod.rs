mod execute;
mod output;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Users whose current city differs from their hometown
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook away-from-home                    # Users living outside their hometown

Users without both a current city and a hometown are not listed.")]
pub struct AwayFromHomeCmd {}

impl CommandRunner for AwayFromHomeCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
