//! CozoDB backend implementation.
//!
//! Wraps a `DbInstance` (SQLite storage on disk, or in-memory for tests) and
//! exposes it through the generic [`Database`] trait.

use super::{Database, Dialect, QueryParams, QueryResult, Row, Value, ValueType, INSERT_CHUNK_SIZE};
use crate::db::DbError;
use crate::schema::compilers::CozoCompiler;
use crate::schema::SchemaRelation;
use cozo::{DataValue, DbInstance, NamedRows, Num, ScriptMutability};
use std::collections::BTreeMap;
use std::path::Path;

/// CozoDB database wrapper implementing the generic Database trait.
pub struct CozoDatabase {
    inner: DbInstance,
}

impl CozoDatabase {
    /// Opens a SQLite-backed CozoDB database at the specified path.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let inner = DbInstance::new("sqlite", path, "").map_err(|e| DbError::OpenFailed {
            path: path.display().to_string(),
            message: format!("{:?}", e),
        })?;
        tracing::debug!(path = %path.display(), "opened cozo database");
        Ok(Self { inner })
    }

    /// Opens an in-memory CozoDB database.
    pub fn open_mem() -> Result<Self, DbError> {
        let inner = DbInstance::new("mem", "", "").map_err(|e| DbError::OpenFailed {
            path: ":memory:".to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self { inner })
    }

    fn run(
        &self,
        script: &str,
        params: BTreeMap<String, DataValue>,
        mutability: ScriptMutability,
    ) -> Result<NamedRows, DbError> {
        self.inner
            .run_script(script, params, mutability)
            .map_err(|e| DbError::QueryFailed {
                message: format!("{:?}", e),
            })
    }
}

impl Database for CozoDatabase {
    fn execute_query(
        &self,
        query: &str,
        params: QueryParams,
    ) -> Result<Box<dyn QueryResult>, DbError> {
        let cozo_params = convert_query_params(params);
        let rows = self.run(query, cozo_params, ScriptMutability::Immutable)?;
        Ok(Box::new(CozoQueryResult::new(rows)))
    }

    fn dialect(&self) -> Dialect {
        Dialect::Cozo
    }

    fn backend_name(&self) -> &'static str {
        "cozo"
    }

    fn create_relation(&self, relation: &SchemaRelation) -> Result<bool, DbError> {
        let script = CozoCompiler::compile_relation(relation);
        match self.run(&script, BTreeMap::new(), ScriptMutability::Mutable) {
            Ok(_) => Ok(true),
            Err(DbError::QueryFailed { message })
                if message.contains("AlreadyExists") || message.contains("stored_relation_conflict") =>
            {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn insert_rows(
        &self,
        relation: &SchemaRelation,
        rows: &[Vec<ValueType>],
    ) -> Result<usize, DbError> {
        for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
            let script = CozoCompiler::compile_insert(relation, chunk);
            self.run(&script, BTreeMap::new(), ScriptMutability::Mutable)?;
        }
        Ok(rows.len())
    }

    fn clear_relation(&self, relation: &SchemaRelation) -> Result<(), DbError> {
        let script = CozoCompiler::compile_clear(relation);
        self.run(&script, BTreeMap::new(), ScriptMutability::Mutable)?;
        Ok(())
    }
}

/// Converts QueryParams to CozoDB's BTreeMap<String, DataValue> format.
fn convert_query_params(params: QueryParams) -> BTreeMap<String, DataValue> {
    params
        .params()
        .iter()
        .map(|(k, v)| {
            let data_value = match v {
                ValueType::Null => DataValue::Null,
                ValueType::Str(s) => DataValue::Str(s.clone().into()),
                ValueType::Int(i) => DataValue::Num(Num::Int(*i)),
            };
            (k.clone(), data_value)
        })
        .collect()
}

/// Query result wrapper implementing the generic QueryResult trait.
pub struct CozoQueryResult {
    headers: Vec<String>,
    rows: Vec<Box<dyn Row>>,
}

impl CozoQueryResult {
    pub fn new(named_rows: NamedRows) -> Self {
        let headers = named_rows.headers;
        let rows: Vec<Box<dyn Row>> = named_rows
            .rows
            .into_iter()
            .map(|values| Box::new(CozoRow { values }) as Box<dyn Row>)
            .collect();

        Self { headers, rows }
    }
}

impl QueryResult for CozoQueryResult {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn rows(&self) -> &[Box<dyn Row>] {
        &self.rows
    }
}

pub struct CozoRow {
    values: Vec<DataValue>,
}

impl Row for CozoRow {
    fn get(&self, index: usize) -> Option<&dyn Value> {
        self.values.get(index).map(|v| v as &dyn Value)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

impl Value for DataValue {
    fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Str(s) => Some(s),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Num(Num::Int(i)) => Some(*i),
            DataValue::Num(Num::Float(f)) => Some(*f as i64),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }
}
