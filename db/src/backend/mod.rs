//! Backend abstraction layer for database operations.
//!
//! This module provides trait definitions that abstract database operations,
//! allowing both the CozoDB and PostgreSQL backends to implement the same interface.
//! Queries carry one script per [`Dialect`] and pick the right one at runtime.

use std::collections::BTreeMap;

use crate::db::DbError;
use crate::schema::SchemaRelation;

/// Backend-agnostic parameter types for database queries.
///
/// Variants represent the different types of values that can be passed
/// as parameters to database queries or inserted as row cells.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueType {
    /// SQL/Datalog null
    Null,
    /// String value
    Str(String),
    /// Integer value
    Int(i64),
}

impl From<Option<i64>> for ValueType {
    fn from(value: Option<i64>) -> Self {
        value.map(ValueType::Int).unwrap_or(ValueType::Null)
    }
}

impl From<Option<String>> for ValueType {
    fn from(value: Option<String>) -> Self {
        value.map(ValueType::Str).unwrap_or(ValueType::Null)
    }
}

impl From<i64> for ValueType {
    fn from(value: i64) -> Self {
        ValueType::Int(value)
    }
}

impl From<String> for ValueType {
    fn from(value: String) -> Self {
        ValueType::Str(value)
    }
}

impl From<&str> for ValueType {
    fn from(value: &str) -> Self {
        ValueType::Str(value.to_string())
    }
}

/// Container for query parameters.
///
/// Maps parameter names to their values, allowing type-safe parameter
/// binding for database queries across different backend implementations.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    params: BTreeMap<String, ValueType>,
}

impl QueryParams {
    /// Creates a new empty parameter container.
    pub fn new() -> Self {
        Self {
            params: BTreeMap::new(),
        }
    }

    /// Inserts a parameter with an integer value.
    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.params.insert(key.into(), ValueType::Int(value));
        self
    }

    /// Returns a reference to the underlying parameters map.
    pub fn params(&self) -> &BTreeMap<String, ValueType> {
        &self.params
    }

    /// Looks up a single parameter by name.
    pub fn get(&self, key: &str) -> Option<&ValueType> {
        self.params.get(key)
    }
}

/// Trait for extracting typed values from database rows.
///
/// Implementations should provide type conversion methods that safely
/// extract values from the underlying database representation.
pub trait Value: Send + Sync + std::fmt::Debug {
    /// Attempts to extract the value as a string reference.
    fn as_str(&self) -> Option<&str>;

    /// Attempts to extract the value as a signed 64-bit integer.
    fn as_i64(&self) -> Option<i64>;

    /// Returns true if the cell holds a null.
    fn is_null(&self) -> bool;
}

/// Trait for accessing column values in a database row.
///
/// A row represents a single result row from a query, providing access
/// to individual column values by index.
pub trait Row: Send + Sync {
    /// Retrieves the value at the specified column index.
    fn get(&self, index: usize) -> Option<&dyn Value>;

    /// Returns the number of columns in this row.
    fn len(&self) -> usize;

    /// Returns true if the row is empty (contains no columns).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for accessing results from a database query.
///
/// A query result contains headers (column names) and rows of data.
pub trait QueryResult: Send + Sync {
    /// Returns the names of columns in the result set.
    fn headers(&self) -> &[String];

    /// Returns references to the rows in the result set.
    fn rows(&self) -> &[Box<dyn Row>];
}

/// Script language understood by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// CozoScript (Datalog)
    Cozo,
    /// PostgreSQL SQL
    Postgres,
}

/// One script per dialect for the same logical query.
///
/// Both scripts must produce the same column names so that row extraction
/// is shared between backends.
#[derive(Debug, Clone, Copy)]
pub struct Script<'a> {
    pub cozo: &'a str,
    pub postgres: &'a str,
}

impl<'a> Script<'a> {
    pub fn for_dialect(&self, dialect: Dialect) -> &'a str {
        match dialect {
            Dialect::Cozo => self.cozo,
            Dialect::Postgres => self.postgres,
        }
    }
}

/// Core trait for database operations.
///
/// Implementations should handle query execution and parameter binding,
/// returning results in a backend-agnostic format. All implementations
/// must be thread-safe (Send + Sync).
pub trait Database: Send + Sync {
    /// Executes a script with the provided parameters.
    fn execute_query(
        &self,
        query: &str,
        params: QueryParams,
    ) -> Result<Box<dyn QueryResult>, DbError>;

    /// Executes a script without parameters.
    ///
    /// This is a convenience method that calls `execute_query` with
    /// empty parameters.
    fn execute_query_no_params(&self, query: &str) -> Result<Box<dyn QueryResult>, DbError> {
        self.execute_query(query, QueryParams::new())
    }

    /// Script language this backend understands.
    fn dialect(&self) -> Dialect;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Create a relation if it doesn't exist.
    /// Returns true if created, false if already existed.
    fn create_relation(&self, relation: &SchemaRelation) -> Result<bool, DbError>;

    /// Insert rows into a relation, replacing rows with the same key.
    ///
    /// Each row must list one cell per field, key fields first, in the
    /// order of [`SchemaRelation::all_fields`]. Returns the number of rows written.
    fn insert_rows(
        &self,
        relation: &SchemaRelation,
        rows: &[Vec<ValueType>],
    ) -> Result<usize, DbError>;

    /// Delete every row of a relation.
    fn clear_relation(&self, relation: &SchemaRelation) -> Result<(), DbError>;
}

#[cfg(feature = "backend-cozo")]
pub mod cozo;

#[cfg(feature = "backend-postgres")]
pub mod postgres;

/// Chunk size for batch inserts
pub(crate) const INSERT_CHUNK_SIZE: usize = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_creation() {
        let params = QueryParams::new();
        assert!(params.params().is_empty());
    }

    #[test]
    fn test_params_builder() {
        let params = QueryParams::new()
            .with_int("num", 5)
            .with_int("year_diff", 2)
            .with_int("num", 10);

        assert_eq!(params.params().len(), 2);
        assert_eq!(params.get("num"), Some(&ValueType::Int(10)));
        assert_eq!(params.get("year_diff"), Some(&ValueType::Int(2)));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_value_type_from_option() {
        assert_eq!(ValueType::from(Some(3_i64)), ValueType::Int(3));
        assert_eq!(ValueType::from(None::<i64>), ValueType::Null);
        assert_eq!(ValueType::from(None::<String>), ValueType::Null);
    }

    #[test]
    fn test_script_for_dialect() {
        let script = Script {
            cozo: "?[x] := x = 1",
            postgres: "SELECT 1 AS x",
        };
        assert_eq!(script.for_dialect(Dialect::Cozo), "?[x] := x = 1");
        assert_eq!(script.for_dialect(Dialect::Postgres), "SELECT 1 AS x");
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn accepts_backend(_db: &dyn Database) {}
        let _ = accepts_backend;
    }
}
