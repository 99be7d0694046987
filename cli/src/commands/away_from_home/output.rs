//! Output formatting for away-from-home command results.

use super::execute::AwayFromHomeResult;
use crate::output::{render_columns, Outputable};

impl Outputable for AwayFromHomeResult {
    fn to_table(&self) -> String {
        let mut lines = vec!["Users living away from their hometown".to_string(), String::new()];

        if self.users.is_empty() {
            lines.push("No users found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found {} user(s):", self.users.len()));
        lines.push(String::new());
        let rows: Vec<Vec<String>> = self
            .users
            .iter()
            .map(|u| vec![u.id.to_string(), u.full_name()])
            .collect();
        lines.extend(render_columns(&["ID", "NAME"], &rows));

        lines.join("\n")
    }
}
