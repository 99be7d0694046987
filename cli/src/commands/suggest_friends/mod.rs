mod execute;
mod output;
mod output_tests;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Suggest friendships from mutual friends
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook suggest-friends                   # Top 5 non-friend pairs by mutual friends
  fakebook suggest-friends -n 25 -o json")]
pub struct SuggestFriendsCmd {
    /// Number of suggestions to return (1-1000)
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub num: u32,
}

impl CommandRunner for SuggestFriendsCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
