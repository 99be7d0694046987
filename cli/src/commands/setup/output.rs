//! Output formatting for setup command results.

use super::execute::{RelationState, SetupResult};
use crate::output::Outputable;

impl Outputable for SetupResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Database setup ({})", self.backend));
        lines.push(String::new());

        let created = self.created_count();
        if created == 0 {
            lines.push("All relations already exist.".to_string());
        } else {
            lines.push(format!(
                "Created {} of {} relation(s):",
                created,
                self.relations.len()
            ));
        }

        for relation in &self.relations {
            let status = match relation.status {
                RelationState::Created => "created",
                RelationState::AlreadyExists => "exists",
            };
            lines.push(format!("  {:<22} {}", relation.name, status));
        }

        if self.cleared {
            lines.push(String::new());
            lines.push("Cleared all relations.".to_string());
        }

        lines.join("\n")
    }
}
