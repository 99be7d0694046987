mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Photos with the most tagged users
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook tagged-photos                     # Top 5 photos by tag count
  fakebook tagged-photos -n 20               # Top 20

Ties are broken by ascending photo id. Untagged photos are never listed.")]
pub struct TaggedPhotosCmd {
    /// Number of photos to return (1-1000)
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub num: u32,
}

impl CommandRunner for TaggedPhotosCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
