mod execute;
mod output;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Pair up non-friends of the same gender who appear in photos together
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook match-maker                       # Top 5 pairs born at most 2 years apart
  fakebook match-maker -n 10 --year-diff 5   # Top 10 pairs born at most 5 years apart

Pairs are ranked by the number of photos both users are tagged in.")]
pub struct MatchMakerCmd {
    /// Number of pairs to return (1-1000)
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub num: u32,

    /// Largest allowed difference between birth years
    #[arg(short = 'y', long, default_value_t = 2)]
    pub year_diff: u32,
}

impl CommandRunner for MatchMakerCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
