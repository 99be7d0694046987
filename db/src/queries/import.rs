use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::backend::{Database, ValueType};
use crate::queries::friendship::canonical_pair;
use crate::queries::import_models::{Dataset, ToRow};
use crate::queries::schema;
use crate::schema::{
    SchemaRelation, ALBUMS, CITIES, EVENTS, FRIENDS, PHOTOS, TAGS, USERS, USER_CURRENT_CITIES,
    USER_HOMETOWN_CITIES,
};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read dataset file '{path}': {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Failed to parse dataset JSON: {message}")]
    JsonParseFailed { message: String },

    #[error("Schema creation failed: {message}")]
    SchemaCreationFailed { message: String },

    #[error("Failed to clear data: {message}")]
    ClearFailed { message: String },

    #[error("Failed to import {data_type}: {message}")]
    ImportFailed { data_type: String, message: String },
}

/// Result of an import
#[derive(Debug, Default, Serialize)]
pub struct ImportResult {
    pub schemas: SchemaResult,
    pub cleared: bool,
    pub users_imported: usize,
    pub friends_imported: usize,
    pub friends_skipped: usize,
    pub cities_imported: usize,
    pub current_cities_imported: usize,
    pub hometown_cities_imported: usize,
    pub albums_imported: usize,
    pub photos_imported: usize,
    pub tags_imported: usize,
    pub events_imported: usize,
}

impl ImportResult {
    pub fn total_rows(&self) -> usize {
        self.users_imported
            + self.friends_imported
            + self.cities_imported
            + self.current_cities_imported
            + self.hometown_cities_imported
            + self.albums_imported
            + self.photos_imported
            + self.tags_imported
            + self.events_imported
    }
}

/// Result of schema creation
#[derive(Debug, Default, Serialize)]
pub struct SchemaResult {
    pub created: Vec<String>,
    pub already_existed: Vec<String>,
}

pub fn create_schema(db: &dyn Database) -> Result<SchemaResult, ImportError> {
    let mut result = SchemaResult::default();

    let schema_results =
        schema::create_schema(db).map_err(|e| ImportError::SchemaCreationFailed {
            message: e.to_string(),
        })?;

    for schema_result in schema_results {
        if schema_result.created {
            result.created.push(schema_result.relation);
        } else {
            result.already_existed.push(schema_result.relation);
        }
    }

    Ok(result)
}

fn import_rows(
    db: &dyn Database,
    relation: &SchemaRelation,
    rows: Vec<Vec<ValueType>>,
) -> Result<usize, ImportError> {
    if rows.is_empty() {
        return Ok(0);
    }
    let count = db
        .insert_rows(relation, &rows)
        .map_err(|e| ImportError::ImportFailed {
            data_type: relation.name.to_string(),
            message: e.to_string(),
        })?;
    tracing::info!(relation = relation.name, rows = count, "imported");
    Ok(count)
}

fn import_records<T: ToRow>(
    db: &dyn Database,
    relation: &SchemaRelation,
    records: &[T],
) -> Result<usize, ImportError> {
    import_rows(db, relation, records.iter().map(ToRow::to_row).collect())
}

/// Canonicalize friendship pairs: smaller id first, no self pairs, no duplicates.
///
/// Returns the rows to store and the number of input pairs dropped.
fn friendship_rows(dataset: &Dataset) -> (Vec<Vec<ValueType>>, usize) {
    let mut pairs = BTreeSet::new();
    let mut skipped = 0;

    for record in &dataset.friends {
        match canonical_pair(record.user1_id, record.user2_id) {
            Some(pair) => {
                if !pairs.insert(pair) {
                    skipped += 1;
                }
            }
            None => {
                tracing::warn!(user_id = record.user1_id, "dropping self friendship");
                skipped += 1;
            }
        }
    }

    let rows = pairs
        .into_iter()
        .map(|(a, b)| vec![ValueType::Int(a), ValueType::Int(b)])
        .collect();
    (rows, skipped)
}

/// Import a parsed dataset.
///
/// Creates missing relations first. With `clear`, every relation is emptied
/// before loading; otherwise rows are upserted by key.
pub fn import_dataset(
    db: &dyn Database,
    dataset: &Dataset,
    clear: bool,
) -> Result<ImportResult, ImportError> {
    let mut result = ImportResult {
        schemas: create_schema(db)?,
        ..ImportResult::default()
    };

    if clear {
        schema::clear_all(db).map_err(|e| ImportError::ClearFailed {
            message: e.to_string(),
        })?;
        result.cleared = true;
    }

    result.users_imported = import_records(db, &USERS, &dataset.users)?;
    let (friend_rows, skipped) = friendship_rows(dataset);
    result.friends_imported = import_rows(db, &FRIENDS, friend_rows)?;
    result.friends_skipped = skipped;
    result.cities_imported = import_records(db, &CITIES, &dataset.cities)?;
    result.current_cities_imported =
        import_records(db, &USER_CURRENT_CITIES, &dataset.user_current_cities)?;
    result.hometown_cities_imported =
        import_records(db, &USER_HOMETOWN_CITIES, &dataset.user_hometown_cities)?;
    result.albums_imported = import_records(db, &ALBUMS, &dataset.albums)?;
    result.photos_imported = import_records(db, &PHOTOS, &dataset.photos)?;
    result.tags_imported = import_records(db, &TAGS, &dataset.tags)?;
    result.events_imported = import_records(db, &EVENTS, &dataset.events)?;

    Ok(result)
}

/// Import a dataset from a JSON string.
pub fn import_json_str(
    db: &dyn Database,
    content: &str,
    clear: bool,
) -> Result<ImportResult, ImportError> {
    let dataset: Dataset =
        serde_json::from_str(content).map_err(|e| ImportError::JsonParseFailed {
            message: e.to_string(),
        })?;

    import_dataset(db, &dataset, clear)
}

/// Import a dataset from a JSON file.
pub fn import_file(db: &dyn Database, path: &Path, clear: bool) -> Result<ImportResult, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ImportError::FileReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    import_json_str(db, &content, clear)
}
