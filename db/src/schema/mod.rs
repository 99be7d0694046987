//! Backend-agnostic database schema definitions.
//!
//! The social network data model is described once, as data, and compiled to
//! each backend's DDL and insert syntax.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `DataType` - String or Int
//!    - `SchemaField` - A single column with name, type and nullability
//!    - `SchemaRelation` - A complete relation with key and value fields
//!
//! 2. **Relation Definitions** (`relations.rs`):
//!    - `USERS`, `FRIENDS`, `CITIES`, `USER_CURRENT_CITIES`, `USER_HOMETOWN_CITIES`,
//!      `ALBUMS`, `PHOTOS`, `TAGS`, `EVENTS`
//!    - `ALL_RELATIONS` - Slice for iterating over all 9 relations
//!
//! 3. **Compilers** (`compilers/`):
//!    - `CozoCompiler` - `:create`, `:put` and `:rm` scripts
//!    - `PostgresCompiler` - `CREATE TABLE`, `INSERT ... ON CONFLICT` and `DELETE`
//!
//! # Type Mapping
//!
//! | Rust Type | Cozo Type | PostgreSQL Type |
//! |-----------|-----------|-----------------|
//! | String | String | TEXT |
//! | Int | Int | BIGINT |
//!
//! Nullable fields become `Type?` in Cozo and drop `NOT NULL` in PostgreSQL.

mod definition;
mod relations;
pub mod compilers;

pub use definition::{DataType, SchemaField, SchemaRelation};
pub use relations::{
    ALBUMS, ALL_RELATIONS, CITIES, EVENTS, FRIENDS, PHOTOS, TAGS, USERS, USER_CURRENT_CITIES,
    USER_HOMETOWN_CITIES,
};
