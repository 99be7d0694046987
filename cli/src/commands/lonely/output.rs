//! Output formatting for lonely command results.

use super::execute::LonelyResult;
use crate::output::{render_columns, Outputable};

impl Outputable for LonelyResult {
    fn to_table(&self) -> String {
        let mut lines = vec!["Users without friends".to_string(), String::new()];

        if self.users.is_empty() {
            lines.push("Everyone has at least one friend.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found {} user(s):", self.users.len()));
        lines.push(String::new());
        let rows: Vec<Vec<String>> = self
            .users
            .iter()
            .map(|u| vec![u.id.to_string(), u.first_name.clone(), u.last_name.clone()])
            .collect();
        lines.extend(render_columns(&["ID", "FIRST NAME", "LAST NAME"], &rows));

        lines.join("\n")
    }
}
