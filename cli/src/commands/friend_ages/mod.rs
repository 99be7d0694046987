mod execute;
mod output;
mod output_tests;

use std::error::Error;

use clap::Args;
use db::Database;

use crate::commands::{CommandRunner, Execute};
use crate::output::{OutputFormat, Outputable};

/// Oldest and youngest friend of a user
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  fakebook friend-ages 42                    # Oldest and youngest friend of user 42

Unknown birth date components sort after known ones.")]
pub struct FriendAgesCmd {
    /// User whose friends are compared
    pub user_id: i64,
}

impl CommandRunner for FriendAgesCmd {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}
