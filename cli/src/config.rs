//! Configuration file handling and database resolution.
//!
//! Loads `.fakebook.json` and decides which database a command runs against.

use std::fs;
use std::path::{Path, PathBuf};

use db::{DatabaseConfig, PostgresConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".fakebook.json";
pub const DEFAULT_DB_PATH: &str = ".fakebook/cozo.sqlite";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    ParseFailed { path: String, message: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub database: DatabaseConfigFile,
}

/// Database section of `.fakebook.json`, tagged by `"type"`.
///
/// ```json
/// { "database": { "type": "sqlite", "path": "./fakebook.sqlite" } }
/// { "database": { "type": "memory" } }
/// { "database": { "type": "postgres", "connection_string": "postgres://..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    Sqlite { path: PathBuf },
    #[serde(rename = "memory")]
    Mem,
    Postgres(PostgresConfig),
}

impl ConfigFile {
    /// Load `.fakebook.json` from `dir`. Returns `Ok(None)` when the file is absent.
    pub fn load_from(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Some(config))
    }
}

impl DatabaseConfigFile {
    pub fn to_database_config(&self) -> DatabaseConfig {
        match self {
            Self::Sqlite { path } => DatabaseConfig::CozoSqlite { path: path.clone() },
            Self::Mem => DatabaseConfig::CozoMem,
            Self::Postgres(pg) => DatabaseConfig::Postgres(pg.clone()),
        }
    }
}

/// Resolve the database for this invocation from the flag, the working
/// directory and the process environment.
pub fn resolve(explicit: Option<&str>) -> Result<DatabaseConfig, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadFailed {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    resolve_in(explicit, &cwd, |key| std::env::var(key).ok(), home::home_dir())
}

/// Resolution order: `--db`, `.fakebook.json` in `dir`, `DATABASE_URL`,
/// `FAKEBOOK_DB_PATH`, then the project-local default unless only a
/// user-global database exists.
pub fn resolve_in<F>(
    explicit: Option<&str>,
    dir: &Path,
    env: F,
    home_dir: Option<PathBuf>,
) -> Result<DatabaseConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = explicit {
        return Ok(DatabaseConfig::from_url(url));
    }

    if let Some(file) = ConfigFile::load_from(dir)? {
        return Ok(file.database.to_database_config());
    }

    for key in ["DATABASE_URL", "FAKEBOOK_DB_PATH"] {
        if let Some(value) = env(key).filter(|v| !v.is_empty()) {
            tracing::debug!(source = key, "database taken from environment");
            return Ok(DatabaseConfig::from_url(&value));
        }
    }

    let project_db = dir.join(DEFAULT_DB_PATH);
    if !project_db.exists() {
        if let Some(global_db) = home_dir.map(|home| home.join(DEFAULT_DB_PATH)) {
            if global_db.exists() {
                return Ok(DatabaseConfig::CozoSqlite { path: global_db });
            }
        }
    }

    Ok(DatabaseConfig::CozoSqlite {
        path: PathBuf::from(DEFAULT_DB_PATH),
    })
}
