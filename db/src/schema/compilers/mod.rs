//! Schema compilers for each backend dialect.

mod cozo;
mod postgres;

pub use cozo::CozoCompiler;
pub use postgres::PostgresCompiler;
