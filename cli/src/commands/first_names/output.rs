//! Output formatting for first-names command results.

use db::queries::first_names::FirstNameInfo;

use crate::output::Outputable;

impl Outputable for FirstNameInfo {
    fn to_table(&self) -> String {
        let mut lines = vec!["First names".to_string(), String::new()];

        if self.longest_names.is_empty() {
            lines.push("No users found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Longest:     {}", self.longest_names.join(", ")));
        lines.push(format!("Shortest:    {}", self.shortest_names.join(", ")));
        lines.push(format!(
            "Most common: {} ({} user(s) each)",
            self.most_common_names.join(", "),
            self.most_common_count
        ));

        lines.join("\n")
    }
}
