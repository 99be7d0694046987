use std::error::Error;

use db::queries::birth_months::{find_birth_month_info, BirthMonthInfo};
use db::Database;

use super::BirthMonthsCmd;
use crate::commands::Execute;

impl Execute for BirthMonthsCmd {
    type Output = BirthMonthInfo;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(find_birth_month_info(db)?)
    }
}
