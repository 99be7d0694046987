mod cli_tests;
mod execute;
mod output;
mod output_tests;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Users with no friends at all
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook lonely                            # Users appearing in no friendship
  fakebook lonely -o json")]
pub struct LonelyCmd {}

impl CommandRunner for LonelyCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
