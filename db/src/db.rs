//! Database connection and query utilities.
//!
//! This module provides the database abstraction layer for the query library:
//! - Connection management (SQLite-backed Cozo, in-memory Cozo for tests, PostgreSQL)
//! - Query execution with parameter binding and dialect selection
//! - Result row extraction with type-safe helpers
//!
//! # Architecture
//!
//! Every query is written once per backend dialect (CozoScript and SQL) with
//! identical output column names. Rows come back as `Box<dyn Row>` holding
//! `&dyn Value` cells that must be extracted into Rust types.
//!
//! # Type Decisions
//!
//! **Why `i64` for ids and birth years?**
//! CozoDB returns all integers as `Num::Int(i64)` and the SQL schema uses
//! `BIGINT`. Using `i64` throughout avoids lossy conversions.
//!
//! **Why column lookup by header name instead of serde deserialization?**
//! Rows are positional vectors, not JSON objects. `UserRowLayout` resolves
//! column positions once from the result headers, so the Cozo and SQL variants
//! of a query only have to agree on column names, not on column order.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::backend::{Database, QueryParams, QueryResult, Row, Script, Value};
use crate::types::UserInfo;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Missing column '{name}' in query result")]
    MissingColumn { name: String },

    #[error("Column {index} does not hold an integer id")]
    InvalidId { index: usize },
}

/// Open a Cozo database backed by SQLite storage at the specified path.
///
/// Returns a trait object for backend-agnostic database access.
#[cfg(feature = "backend-cozo")]
pub fn open_db(path: &Path) -> Result<Box<dyn Database>, DbError> {
    Ok(Box::new(crate::backend::cozo::CozoDatabase::open(path)?))
}

#[cfg(not(feature = "backend-cozo"))]
pub fn open_db(path: &Path) -> Result<Box<dyn Database>, DbError> {
    Err(DbError::OpenFailed {
        path: path.display().to_string(),
        message: "built without the backend-cozo feature".to_string(),
    })
}

/// Create an in-memory database instance.
///
/// Used for tests to avoid disk I/O and temp file management.
#[cfg(all(any(test, feature = "test-utils"), feature = "backend-cozo"))]
pub fn open_mem_db() -> Result<Box<dyn Database>, DbError> {
    Ok(Box::new(crate::backend::cozo::CozoDatabase::open_mem()?))
}

/// Run a database query with parameters.
///
/// Works with any backend that implements the Database trait.
pub fn run_query(
    db: &dyn Database,
    script: &str,
    params: QueryParams,
) -> Result<Box<dyn QueryResult>, DbError> {
    let result = db.execute_query(script, params)?;
    tracing::debug!(
        backend = db.backend_name(),
        rows = result.rows().len(),
        "query executed"
    );
    Ok(result)
}

/// Run the variant of a script matching the backend's dialect.
pub fn run_script(
    db: &dyn Database,
    script: &Script<'_>,
    params: QueryParams,
) -> Result<Box<dyn QueryResult>, DbError> {
    run_query(db, script.for_dialect(db.dialect()), params)
}

/// Escape a string for use in quoted script literals.
///
/// # Arguments
/// * `s` - The string to escape
/// * `quote_char` - The quote character to escape ('"' for double-quoted, '\'' for single-quoted)
pub fn escape_string_for_quote(s: &str, quote_char: char) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            c if c == quote_char => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() || c == '\0' => {
                // Escape control characters as \uXXXX (JSON format)
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

/// Escape a string for use in CozoDB double-quoted string literals (JSON-compatible)
#[inline]
pub fn escape_string(s: &str) -> String {
    escape_string_for_quote(s, '"')
}

/// Escape a string for use in a SQL single-quoted literal.
pub fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

// Trait-based extraction helpers

/// Extract an i64 from a Value trait object, returning the default if not a number
pub fn extract_i64(value: &dyn Value, default: i64) -> i64 {
    value.as_i64().unwrap_or(default)
}

/// Extract an i64 from a Value trait object, mapping null (or non-numbers) to None
pub fn extract_opt_i64(value: &dyn Value) -> Option<i64> {
    if value.is_null() {
        None
    } else {
        value.as_i64()
    }
}

/// Extract a String from a Value trait object, returning the default if not a string
pub fn extract_string_or(value: &dyn Value, default: &str) -> String {
    value
        .as_str()
        .map(|s| s.to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Column positions resolved from result headers.
///
/// Built once per result set; lookups are O(1).
#[derive(Debug)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn from_headers(headers: &[String]) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.to_lowercase(), i))
            .collect();
        Self { positions }
    }

    /// Position of a required column.
    pub fn index(&self, name: &str) -> Result<usize, DbError> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| DbError::MissingColumn {
                name: name.to_string(),
            })
    }
}

/// Read a cell as i64, defaulting to 0 when missing or not numeric.
pub fn cell_i64(row: &dyn Row, idx: usize) -> i64 {
    row.get(idx).map(|v| extract_i64(v, 0)).unwrap_or(0)
}

/// Read a required integer id cell.
pub fn cell_id(row: &dyn Row, idx: usize) -> Result<i64, DbError> {
    row.get(idx)
        .and_then(|v| v.as_i64())
        .ok_or(DbError::InvalidId { index: idx })
}

/// Read a nullable integer cell.
pub fn cell_opt_i64(row: &dyn Row, idx: usize) -> Option<i64> {
    row.get(idx).and_then(extract_opt_i64)
}

/// Read a string cell, defaulting to "" when missing or null.
pub fn cell_string(row: &dyn Row, idx: usize) -> String {
    row.get(idx).map(|v| extract_string_or(v, "")).unwrap_or_default()
}

/// Layout descriptor for extracting a user (id, first name, last name) from result rows
#[derive(Debug, Clone, Copy)]
pub struct UserRowLayout {
    pub id_idx: usize,
    pub first_name_idx: usize,
    pub last_name_idx: usize,
}

impl UserRowLayout {
    /// Layout for results exposing `user_id`, `first_name`, `last_name`.
    pub fn single(columns: &ColumnIndex) -> Result<Self, DbError> {
        Ok(Self {
            id_idx: columns.index("user_id")?,
            first_name_idx: columns.index("first_name")?,
            last_name_idx: columns.index("last_name")?,
        })
    }

    /// Layout for one member of a pair: `user{n}_id`, `user{n}_first_name`, `user{n}_last_name`.
    pub fn pair_member(columns: &ColumnIndex, n: u8) -> Result<Self, DbError> {
        Ok(Self {
            id_idx: columns.index(&format!("user{n}_id"))?,
            first_name_idx: columns.index(&format!("user{n}_first_name"))?,
            last_name_idx: columns.index(&format!("user{n}_last_name"))?,
        })
    }

    /// Extract the user described by this layout.
    ///
    /// Fails when the id cell is missing or not an integer.
    pub fn extract(&self, row: &dyn Row) -> Result<UserInfo, DbError> {
        Ok(UserInfo {
            id: cell_id(row, self.id_idx)?,
            first_name: cell_string(row, self.first_name_idx),
            last_name: cell_string(row, self.last_name_idx),
        })
    }
}

/// Extract every user in a result with the standard single-user columns.
pub fn extract_users(result: &dyn QueryResult) -> Result<Vec<UserInfo>, DbError> {
    let columns = ColumnIndex::from_headers(result.headers());
    let layout = UserRowLayout::single(&columns)?;
    result
        .rows()
        .iter()
        .map(|row| layout.extract(row.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    enum TestValue {
        Null,
        Int(i64),
        Str(String),
    }

    impl Value for TestValue {
        fn as_str(&self) -> Option<&str> {
            match self {
                TestValue::Str(s) => Some(s),
                _ => None,
            }
        }

        fn as_i64(&self) -> Option<i64> {
            match self {
                TestValue::Int(i) => Some(*i),
                _ => None,
            }
        }

        fn is_null(&self) -> bool {
            matches!(self, TestValue::Null)
        }
    }

    struct TestRow(Vec<TestValue>);

    impl Row for TestRow {
        fn get(&self, index: usize) -> Option<&dyn Value> {
            self.0.get(index).map(|v| v as &dyn Value)
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    fn test_escape_string_basic() {
        assert_eq!(escape_string("hello"), "hello");
    }

    #[rstest]
    fn test_escape_string_with_quotes() {
        assert_eq!(escape_string(r#"say "hello""#), r#"say \"hello\""#);
    }

    #[rstest]
    fn test_escape_string_with_backslash() {
        assert_eq!(escape_string(r"path\to\file"), r"path\\to\\file");
    }

    #[rstest]
    fn test_escape_sql_string() {
        assert_eq!(escape_sql_string("O'Brien"), "O''Brien");
    }

    #[rstest]
    fn test_extract_opt_i64_null() {
        assert_eq!(extract_opt_i64(&TestValue::Null), None);
        assert_eq!(extract_opt_i64(&TestValue::Int(7)), Some(7));
    }

    #[rstest]
    fn test_extract_i64_from_non_num() {
        let value = TestValue::Str("not a number".into());
        assert_eq!(extract_i64(&value, -1), -1);
    }

    #[rstest]
    fn test_columns_missing() {
        let columns = ColumnIndex::from_headers(&headers(&["user_id"]));
        let err = columns.index("first_name").unwrap_err();
        assert!(matches!(err, DbError::MissingColumn { name } if name == "first_name"));
    }

    #[rstest]
    fn test_columns_case_insensitive_headers() {
        let columns = ColumnIndex::from_headers(&headers(&["USER_ID"]));
        assert_eq!(columns.index("user_id").unwrap(), 0);
    }

    #[rstest]
    fn test_user_layout_single_reorders_columns() {
        let columns = ColumnIndex::from_headers(&headers(&["last_name", "user_id", "first_name"]));
        let layout = UserRowLayout::single(&columns).unwrap();
        let row = TestRow(vec![
            TestValue::Str("Stark".into()),
            TestValue::Int(3),
            TestValue::Str("Arya".into()),
        ]);
        let user = layout.extract(&row).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.first_name, "Arya");
        assert_eq!(user.last_name, "Stark");
    }

    #[rstest]
    fn test_user_layout_pair_member() {
        let columns = ColumnIndex::from_headers(&headers(&[
            "user1_id",
            "user1_first_name",
            "user1_last_name",
            "user2_id",
            "user2_first_name",
            "user2_last_name",
        ]));
        let second = UserRowLayout::pair_member(&columns, 2).unwrap();
        assert_eq!(second.id_idx, 3);
        assert_eq!(second.last_name_idx, 5);
    }

    #[rstest]
    fn test_user_layout_rejects_null_id() {
        let columns = ColumnIndex::from_headers(&headers(&["user_id", "first_name", "last_name"]));
        let layout = UserRowLayout::single(&columns).unwrap();
        let row = TestRow(vec![TestValue::Null, TestValue::Null, TestValue::Null]);
        assert!(matches!(
            layout.extract(&row),
            Err(DbError::InvalidId { index: 0 })
        ));
    }

    #[rstest]
    fn test_cell_id_rejects_text() {
        let row = TestRow(vec![TestValue::Int(4), TestValue::Str("4".into())]);
        assert_eq!(cell_id(&row, 0).unwrap(), 4);
        assert!(matches!(cell_id(&row, 1), Err(DbError::InvalidId { index: 1 })));
        assert!(matches!(cell_id(&row, 2), Err(DbError::InvalidId { index: 2 })));
    }
}
