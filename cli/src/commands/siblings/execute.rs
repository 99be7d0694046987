use std::error::Error;

use db::queries::potential_siblings::{find_potential_siblings, SiblingPair};
use db::Database;
use serde::Serialize;

use super::SiblingsCmd;
use crate::commands::Execute;

/// Result of the siblings command execution
#[derive(Debug, Default, Serialize)]
pub struct SiblingsResult {
    pub pairs: Vec<SiblingPair>,
}

impl Execute for SiblingsCmd {
    type Output = SiblingsResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(SiblingsResult {
            pairs: find_potential_siblings(db)?,
        })
    }
}
