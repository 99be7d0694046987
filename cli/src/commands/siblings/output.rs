//! Output formatting for siblings command results.

use super::execute::SiblingsResult;
use crate::output::{render_columns, user_label, Outputable};

impl Outputable for SiblingsResult {
    fn to_table(&self) -> String {
        let mut lines = vec!["Potential siblings".to_string(), String::new()];

        if self.pairs.is_empty() {
            lines.push("No potential siblings found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found {} pair(s):", self.pairs.len()));
        lines.push(String::new());
        let rows: Vec<Vec<String>> = self
            .pairs
            .iter()
            .map(|p| vec![user_label(&p.user1), user_label(&p.user2)])
            .collect();
        lines.extend(render_columns(&["USER", "SIBLING"], &rows));

        lines.join("\n")
    }
}
