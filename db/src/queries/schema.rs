//! Database schema creation and management.
//!
//! Shared by the `setup` and `import` commands. Relation definitions live in
//! [`crate::schema`]; this module applies them to a store.

use crate::backend::Database;
use crate::db::DbError;
use crate::schema::ALL_RELATIONS;

/// Result of schema creation for one relation
#[derive(Debug, Clone)]
pub struct SchemaCreationResult {
    pub relation: String,
    pub created: bool,
}

/// Create every relation that does not exist yet.
///
/// Returns all relations with their creation status. Running it again on an
/// initialized store reports `created: false` everywhere.
pub fn create_schema(db: &dyn Database) -> Result<Vec<SchemaCreationResult>, DbError> {
    let mut result = Vec::with_capacity(ALL_RELATIONS.len());

    for relation in ALL_RELATIONS {
        let created = db.create_relation(relation)?;
        tracing::debug!(relation = relation.name, created, "schema relation");
        result.push(SchemaCreationResult {
            relation: relation.name.to_string(),
            created,
        });
    }

    Ok(result)
}

/// Remove every row from every relation, keeping the schema.
pub fn clear_all(db: &dyn Database) -> Result<(), DbError> {
    for relation in ALL_RELATIONS {
        db.clear_relation(relation)?;
    }
    Ok(())
}

/// Get list of all relation names managed by the schema
pub fn relation_names() -> Vec<&'static str> {
    ALL_RELATIONS.iter().map(|r| r.name).collect()
}
