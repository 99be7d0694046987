//! Shared test utilities for database and command tests.
//!
//! Helpers for setting up in-memory databases loaded with fixture data.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::backend::Database;
use crate::db::open_mem_db;
use crate::fixtures;
use crate::queries::import::import_json_str;
use crate::queries::schema::create_schema;

/// Create a temporary file containing the given content.
///
/// Used to create JSON files for importing test data.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Create an in-memory database and import JSON content.
///
/// This is the standard setup for execute tests: create an in-memory DB,
/// import test data, return the DB instance for command execution.
pub fn setup_test_db(json_content: &str) -> Box<dyn Database> {
    let db = open_mem_db().expect("Failed to create in-memory DB");
    import_json_str(&*db, json_content, false).expect("Import should succeed");
    db
}

/// Create an in-memory database with the schema but no rows.
pub fn setup_empty_test_db() -> Box<dyn Database> {
    let db = open_mem_db().expect("Failed to create in-memory DB");
    create_schema(&*db).expect("Schema creation should succeed");
    db
}

/// Create an in-memory database with no relations at all.
///
/// Used to verify queries surface store errors instead of empty results.
pub fn setup_uninitialized_db() -> Box<dyn Database> {
    open_mem_db().expect("Failed to create in-memory DB")
}

/// Create a test database loaded with the social graph fixture.
pub fn social_graph_db() -> Box<dyn Database> {
    setup_test_db(fixtures::SOCIAL_GRAPH)
}
