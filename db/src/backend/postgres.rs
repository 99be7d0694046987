//! PostgreSQL backend implementation.
//!
//! Uses the synchronous `postgres` client. Scripts written with named `$param`
//! placeholders are rewritten to positional `$1, $2, ...` before execution, and
//! result rows are copied into owned [`PgValue`] cells so they can outlive the
//! client lock.

use std::sync::Mutex;

use postgres::types::{ToSql, Type};
use postgres::{Client, NoTls};

use super::{Database, Dialect, QueryParams, QueryResult, Row, Value, ValueType, INSERT_CHUNK_SIZE};
use crate::db::DbError;
use crate::schema::compilers::PostgresCompiler;
use crate::schema::SchemaRelation;

/// PostgreSQL database wrapper implementing the generic Database trait.
pub struct PostgresDatabase {
    client: Mutex<Client>,
}

impl PostgresDatabase {
    /// Connect using a `postgres://` connection string.
    pub fn connect(url: &str) -> Result<Self, DbError> {
        let client = Client::connect(url, NoTls).map_err(|e| DbError::OpenFailed {
            path: redact(url),
            message: e.to_string(),
        })?;
        tracing::debug!(url = %redact(url), "connected to postgres");
        Ok(Self {
            client: Mutex::new(client),
        })
    }

    fn with_client<T>(
        &self,
        f: impl FnOnce(&mut Client) -> Result<T, postgres::Error>,
    ) -> Result<T, DbError> {
        let mut client = self.client.lock().map_err(|e| DbError::QueryFailed {
            message: format!("client lock poisoned: {}", e),
        })?;
        f(&mut client).map_err(|e| DbError::QueryFailed {
            message: e.to_string(),
        })
    }
}

impl Database for PostgresDatabase {
    fn execute_query(
        &self,
        query: &str,
        params: QueryParams,
    ) -> Result<Box<dyn QueryResult>, DbError> {
        let (sql, names) = rewrite_named_params(query);
        let mut bound: Vec<Box<dyn ToSql + Sync>> = Vec::with_capacity(names.len());
        for name in &names {
            let value = params.get(name).ok_or_else(|| DbError::QueryFailed {
                message: format!("missing query parameter '{}'", name),
            })?;
            bound.push(to_sql(value));
        }
        let refs: Vec<&(dyn ToSql + Sync)> = bound.iter().map(|b| b.as_ref()).collect();

        let rows = self.with_client(|client| client.query(sql.as_str(), &refs))?;
        let headers = match rows.first() {
            Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
            None => self.with_client(|client| {
                let stmt = client.prepare(sql.as_str())?;
                Ok(stmt.columns().iter().map(|c| c.name().to_string()).collect())
            })?,
        };
        let rows = rows
            .iter()
            .map(|row| PgRow::from_row(row).map(|r| Box::new(r) as Box<dyn Row>))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Box::new(PgQueryResult { headers, rows }))
    }

    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    fn create_relation(&self, relation: &SchemaRelation) -> Result<bool, DbError> {
        let exists = PostgresCompiler::compile_exists(relation);
        if !self.with_client(|client| client.query(exists.as_str(), &[]))?.is_empty() {
            return Ok(false);
        }
        let ddl = PostgresCompiler::compile_relation(relation);
        self.with_client(|client| client.batch_execute(&ddl))?;
        Ok(true)
    }

    fn insert_rows(
        &self,
        relation: &SchemaRelation,
        rows: &[Vec<ValueType>],
    ) -> Result<usize, DbError> {
        for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
            let sql = PostgresCompiler::compile_insert(relation, chunk);
            self.with_client(|client| client.batch_execute(&sql))?;
        }
        Ok(rows.len())
    }

    fn clear_relation(&self, relation: &SchemaRelation) -> Result<(), DbError> {
        let sql = PostgresCompiler::compile_clear(relation);
        self.with_client(|client| client.batch_execute(&sql))
    }
}

fn to_sql(value: &ValueType) -> Box<dyn ToSql + Sync> {
    match value {
        ValueType::Null => Box::new(None::<i64>),
        ValueType::Str(s) => Box::new(s.clone()),
        ValueType::Int(i) => Box::new(*i),
    }
}

/// Strip the password from a connection URL before it reaches logs or errors.
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let creds = &url[scheme_end + 3..at];
            match creds.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &creds[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

/// Rewrite `$name` placeholders to `$1..$n`.
///
/// Returns the rewritten SQL and the parameter names in positional order.
/// Repeated names share one position. Text inside single quotes is untouched.
pub(crate) fn rewrite_named_params(sql: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(sql.len());
    let mut names: Vec<String> = Vec::new();
    let mut chars = sql.chars().peekable();
    let mut in_quote = false;

    while let Some(c) = chars.next() {
        if c == '\'' {
            in_quote = !in_quote;
            out.push(c);
            continue;
        }
        let starts_name = matches!(chars.peek(), Some(n) if n.is_ascii_alphabetic() || *n == '_');
        if c != '$' || in_quote || !starts_name {
            out.push(c);
            continue;
        }

        let mut name = String::new();
        while let Some(&n) = chars.peek() {
            if n.is_ascii_alphanumeric() || n == '_' {
                name.push(n);
                chars.next();
            } else {
                break;
            }
        }
        let position = match names.iter().position(|existing| *existing == name) {
            Some(i) => i + 1,
            None => {
                names.push(name);
                names.len()
            }
        };
        out.push('$');
        out.push_str(&position.to_string());
    }

    (out, names)
}

/// Owned PostgreSQL cell.
#[derive(Debug, Clone, PartialEq)]
pub enum PgValue {
    Null,
    Int(i64),
    Text(String),
}

impl Value for PgValue {
    fn as_str(&self) -> Option<&str> {
        match self {
            PgValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            PgValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, PgValue::Null)
    }
}

pub struct PgRow {
    values: Vec<PgValue>,
}

impl PgRow {
    fn from_row(row: &postgres::Row) -> Result<Self, DbError> {
        let values = row
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| convert_cell(row, i, column.name(), column.type_()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }
}

/// Copy one cell out of a row. Integer columns become `Int`, text-like columns `Text`.
fn convert_cell(
    row: &postgres::Row,
    idx: usize,
    name: &str,
    ty: &Type,
) -> Result<PgValue, DbError> {
    let converted = if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx).map(|v| v.map(PgValue::Int))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)
            .map(|v| v.map(|i| PgValue::Int(i64::from(i))))
    } else if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)
            .map(|v| v.map(|i| PgValue::Int(i64::from(i))))
    } else {
        row.try_get::<_, Option<String>>(idx).map(|v| v.map(PgValue::Text))
    };
    converted
        .map(|value| value.unwrap_or(PgValue::Null))
        .map_err(|e| unsupported_cell(name, ty, e))
}

fn unsupported_cell(column: &str, ty: &Type, err: impl std::fmt::Display) -> DbError {
    DbError::QueryFailed {
        message: format!("cannot read column '{}' of type {}: {}", column, ty, err),
    }
}

impl Row for PgRow {
    fn get(&self, index: usize) -> Option<&dyn Value> {
        self.values.get(index).map(|v| v as &dyn Value)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

pub struct PgQueryResult {
    headers: Vec<String>,
    rows: Vec<Box<dyn Row>>,
}

impl QueryResult for PgQueryResult {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn rows(&self) -> &[Box<dyn Row>] {
        &self.rows
    }
}
