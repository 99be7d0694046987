use std::error::Error;

use db::queries::import::{import_file, ImportResult};
use db::Database;

use super::ImportCmd;
use crate::commands::Execute;

impl Execute for ImportCmd {
    type Output = ImportResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        tracing::info!(file = %self.file.display(), clear = self.clear, "importing dataset");
        Ok(import_file(db, &self.file, self.clear)?)
    }
}
