//! Test fixtures for query and command tests.
//!
//! Fixtures are loaded at compile time using `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`SOCIAL_GRAPH`] - A small social network exercising every report

/// Social network fixture.
///
/// Contains:
/// - 9 users: Smith (1, 2, 7), Jones (3, 4), Brown (5, 6, 9) and Lee (8).
///   User 7 has only a birth year, user 8 has no birth date or gender.
/// - 10 friendships, some stored larger id first; user 8 has none
/// - 4 cities in Michigan (2), Illinois and Texas
/// - 2 albums, 5 photos (photo 105 untagged) and 14 tags
/// - 5 events, two each in Michigan and Illinois
///
/// Use for: every report
pub const SOCIAL_GRAPH: &str = include_str!("social_graph.json");
