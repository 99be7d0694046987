mod execute;
mod output;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Friends who could be siblings
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook siblings                          # Friends sharing a last name and hometown

Both users need a birth year, and the years must differ by less than 10.")]
pub struct SiblingsCmd {}

impl CommandRunner for SiblingsCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
