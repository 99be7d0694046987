use std::error::Error;

use db::queries::match_maker::{find_match_pairs, MatchPair};
use db::Database;
use serde::Serialize;

use super::MatchMakerCmd;
use crate::commands::Execute;

/// Result of the match-maker command execution
#[derive(Debug, Default, Serialize)]
pub struct MatchMakerResult {
    pub num: u32,
    pub year_diff: u32,
    pub pairs: Vec<MatchPair>,
}

impl Execute for MatchMakerCmd {
    type Output = MatchMakerResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(MatchMakerResult {
            num: self.num,
            year_diff: self.year_diff,
            pairs: find_match_pairs(db, self.num, self.year_diff)?,
        })
    }
}
