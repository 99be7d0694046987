mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Most and least common birth months
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook birth-months                      # Users born in the most and least common months
  fakebook birth-months -o json

Users without a birth month are not counted. Ties go to the earlier month.")]
pub struct BirthMonthsCmd {}

impl CommandRunner for BirthMonthsCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
