use std::error::Error;

use db::queries::schema;
use db::Database;
use serde::Serialize;

use super::SetupCmd;
use crate::commands::Execute;

/// Status of a database relation (table)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RelationState {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "exists")]
    AlreadyExists,
}

/// Status information for a single database relation
#[derive(Debug, Clone, Serialize)]
pub struct RelationStatus {
    pub name: String,
    pub status: RelationState,
}

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub backend: String,
    pub relations: Vec<RelationStatus>,
    pub cleared: bool,
}

impl SetupResult {
    pub fn created_count(&self) -> usize {
        self.relations
            .iter()
            .filter(|r| r.status == RelationState::Created)
            .count()
    }
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        let relations = schema::create_schema(db)?
            .into_iter()
            .map(|r| RelationStatus {
                name: r.relation,
                status: if r.created {
                    RelationState::Created
                } else {
                    RelationState::AlreadyExists
                },
            })
            .collect();

        if self.clear {
            schema::clear_all(db)?;
        }

        Ok(SetupResult {
            backend: db.backend_name().to_string(),
            relations,
            cleared: self.clear,
        })
    }
}
