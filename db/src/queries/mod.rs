//! Read-only report queries over the social network.
//!
//! Each report module exports one `find_*` function taking a `&dyn Database`
//! and returning a typed result. Reports are independent of each other and
//! never write to the store.
//!
//! # Query Categories
//!
//! ## Shared
//! - [`friendship`] - Symmetric friendship lookup used by every friend-aware report
//!
//! ## User Reports
//! - [`birth_months`] - Most and least common birth month
//! - [`first_names`] - Longest, shortest and most common first names
//! - [`lonely_users`] - Users without friends
//! - [`away_from_home`] - Users living outside their hometown
//! - [`friend_ages`] - Oldest and youngest friend of a user
//!
//! ## Pair Reports
//! - [`match_maker`] - Same-gender non-friends tagged together
//! - [`friend_suggestions`] - Non-friends ranked by mutual friends
//! - [`potential_siblings`] - Friends sharing last name and hometown
//!
//! ## Photos and Events
//! - [`tagged_photos`] - Photos with the most tags
//! - [`event_states`] - States hosting the most events
//!
//! ## Data Loading
//! - [`schema`] - Create and clear relations
//! - [`import`] - Load a JSON dataset
//!
//! # Query Pattern
//!
//! Every query carries a CozoScript and a SQL variant producing the same column
//! names. Multi-step logic lives in Datalog rules or SQL CTEs inside a single
//! script, so no query leaves state behind. Caller-supplied values are bound as
//! parameters; only integer limits are interpolated.

pub mod away_from_home;
pub mod birth_months;
pub mod event_states;
pub mod first_names;
pub mod friend_ages;
pub mod friend_suggestions;
pub mod friendship;
pub mod import;
pub mod import_models;
pub mod lonely_users;
pub mod match_maker;
pub mod potential_siblings;
pub mod schema;
pub mod tagged_photos;
