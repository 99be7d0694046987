//! Shared types for social network query results.

mod birth_date;
mod photo;
mod user;

pub use birth_date::BirthDate;
pub use photo::PhotoInfo;
pub use user::UserInfo;
