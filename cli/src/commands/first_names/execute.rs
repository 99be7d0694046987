use std::error::Error;

use db::queries::first_names::{find_first_name_info, FirstNameInfo};
use db::Database;

use super::FirstNamesCmd;
use crate::commands::Execute;

impl Execute for FirstNamesCmd {
    type Output = FirstNameInfo;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(find_first_name_info(db)?)
    }
}
