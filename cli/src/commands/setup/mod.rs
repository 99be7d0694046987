mod execute;
mod output;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Create the database relations
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook setup                             # Create missing relations
  fakebook setup --clear                     # Create missing relations, then empty all of them
  fakebook --db postgres://localhost/fb setup")]
pub struct SetupCmd {
    /// Delete every row after making sure the relations exist
    #[arg(long, default_value_t = false)]
    pub clear: bool,
}

impl CommandRunner for SetupCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
