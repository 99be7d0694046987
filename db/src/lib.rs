//! Query library for the Fakebook social network reports.
//!
//! Ten independent read-only reports over a relational social graph (users,
//! friendships, cities, photos, tags, events), a storage abstraction with
//! CozoDB and PostgreSQL backends, and a dataset loader.

pub mod backend;
pub mod config;
pub mod db;
pub mod queries;
pub mod schema;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

#[cfg(all(any(test, feature = "test-utils"), feature = "backend-cozo"))]
pub mod test_utils;

// Re-export commonly used items
pub use backend::{Database, Dialect, QueryParams};
pub use config::{DatabaseConfig, PostgresConfig};
pub use db::{open_db, run_query, run_script, DbError};

#[cfg(all(any(test, feature = "test-utils"), feature = "backend-cozo"))]
pub use db::open_mem_db;

pub use types::{BirthDate, PhotoInfo, UserInfo};
