//! Command definitions and implementations.
//!
//! Each command lives in its own module with:
//! - `mod.rs`: the clap struct and its [`CommandRunner`] impl
//! - `execute.rs`: the [`Execute`] impl and result type
//! - `output.rs`: the [`Outputable`] impl for the result
//! - `*_tests.rs`: parsing, execution and formatting tests

mod away_from_home;
mod birth_months;
mod event_states;
mod first_names;
mod friend_ages;
mod import;
mod lonely;
mod match_maker;
mod setup;
mod siblings;
mod suggest_friends;
mod tagged_photos;

pub use away_from_home::AwayFromHomeCmd;
pub use birth_months::BirthMonthsCmd;
pub use event_states::EventStatesCmd;
pub use first_names::FirstNamesCmd;
pub use friend_ages::FriendAgesCmd;
pub use import::ImportCmd;
pub use lonely::LonelyCmd;
pub use match_maker::MatchMakerCmd;
pub use setup::SetupCmd;
pub use siblings::SiblingsCmd;
pub use suggest_friends::SuggestFriendsCmd;
pub use tagged_photos::TaggedPhotosCmd;

use std::error::Error;

use clap::Subcommand;
use db::Database;

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>>;
}

/// Execute a command and format its result.
pub trait CommandRunner {
    fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database relations
    Setup(SetupCmd),

    /// Import a social graph JSON file into the database
    Import(ImportCmd),

    /// Most and least common birth months
    BirthMonths(BirthMonthsCmd),

    /// Longest, shortest and most common first names
    FirstNames(FirstNamesCmd),

    /// Users with no friends at all
    Lonely(LonelyCmd),

    /// Users whose current city differs from their hometown
    AwayFromHome(AwayFromHomeCmd),

    /// Photos with the most tagged users
    TaggedPhotos(TaggedPhotosCmd),

    /// Pair up non-friends of the same gender who appear in photos together
    MatchMaker(MatchMakerCmd),

    /// Suggest friendships from mutual friends
    SuggestFriends(SuggestFriendsCmd),

    /// States hosting the most events
    EventStates(EventStatesCmd),

    /// Oldest and youngest friend of a user
    FriendAges(FriendAgesCmd),

    /// Friends who could be siblings
    Siblings(SiblingsCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, db: &dyn Database, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Setup(cmd) => cmd.run(db, format),
            Command::Import(cmd) => cmd.run(db, format),
            Command::BirthMonths(cmd) => cmd.run(db, format),
            Command::FirstNames(cmd) => cmd.run(db, format),
            Command::Lonely(cmd) => cmd.run(db, format),
            Command::AwayFromHome(cmd) => cmd.run(db, format),
            Command::TaggedPhotos(cmd) => cmd.run(db, format),
            Command::MatchMaker(cmd) => cmd.run(db, format),
            Command::SuggestFriends(cmd) => cmd.run(db, format),
            Command::EventStates(cmd) => cmd.run(db, format),
            Command::FriendAges(cmd) => cmd.run(db, format),
            Command::Siblings(cmd) => cmd.run(db, format),
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().map(String::as_str).unwrap_or("")).into())
            }
        }
    }
}
