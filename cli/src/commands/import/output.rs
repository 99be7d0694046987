//! Output formatting for import command results.

use db::queries::import::ImportResult;

use crate::output::Outputable;

impl Outputable for ImportResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        if self.cleared {
            lines.push("Cleared existing data.".to_string());
            lines.push(String::new());
        }

        lines.push("Import Summary:".to_string());
        lines.push(format!("  Users: {}", self.users_imported));
        if self.friends_skipped > 0 {
            lines.push(format!(
                "  Friendships: {} ({} skipped)",
                self.friends_imported, self.friends_skipped
            ));
        } else {
            lines.push(format!("  Friendships: {}", self.friends_imported));
        }
        lines.push(format!("  Cities: {}", self.cities_imported));
        lines.push(format!("  Current cities: {}", self.current_cities_imported));
        lines.push(format!("  Hometowns: {}", self.hometown_cities_imported));
        lines.push(format!("  Albums: {}", self.albums_imported));
        lines.push(format!("  Photos: {}", self.photos_imported));
        lines.push(format!("  Tags: {}", self.tags_imported));
        lines.push(format!("  Events: {}", self.events_imported));
        lines.push(format!("  Total rows: {}", self.total_rows()));

        if !self.schemas.created.is_empty() {
            lines.push(String::new());
            lines.push("Created Schemas:".to_string());
            for schema in &self.schemas.created {
                lines.push(format!("  - {}", schema));
            }
        }

        lines.join("\n")
    }
}
