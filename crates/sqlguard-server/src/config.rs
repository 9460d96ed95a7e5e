//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use sqlguard_core::Whitelist;
use sqlguard_sqlite::DatabaseConfig;
use thiserror::Error;
use tracing::info;

/// Demo service answering whitelist-validated SQL queries over HTTP.
#[derive(Debug, Parser)]
#[command(name = "sqlguard-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database URL (SQLite path or connection string).
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite:sqlguard.db")]
    pub database: String,

    /// Address to listen on.
    #[arg(short, long, env = "SQLGUARD_BIND", default_value = "127.0.0.1:5001")]
    pub bind: SocketAddr,

    /// Maximum pooled database connections.
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// JSON file replacing the built-in table and column whitelist.
    #[arg(short, long, env = "SQLGUARD_WHITELIST")]
    pub whitelist: Option<PathBuf>,

    /// Do not create or fill the demo tables.
    #[arg(long)]
    pub no_seed: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Database settings derived from the flags.
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.clone(),
            max_connections: self.max_connections,
        }
    }
}

/// Errors while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The whitelist file could not be read.
    #[error("failed to read whitelist '{}': {source}", .path.display())]
    Read {
        /// File path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The whitelist file is not a valid whitelist.
    #[error("invalid whitelist '{}': {source}", .path.display())]
    Whitelist {
        /// File path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: sqlguard_core::WhitelistError,
    },
}

/// Loads the whitelist from `path`, or the built-in one when absent.
pub fn load_whitelist(path: Option<&Path>) -> Result<Whitelist, ConfigError> {
    let Some(path) = path else {
        return Ok(Whitelist::default());
    };

    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let whitelist = Whitelist::from_json(&json).map_err(|source| ConfigError::Whitelist {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        tables = whitelist.tables().len(),
        "Loaded whitelist"
    );
    Ok(whitelist)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sqlguard-server"]).unwrap();
        assert_eq!(cli.bind, "127.0.0.1:5001".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.max_connections, 5);
        assert!(cli.whitelist.is_none());
        assert!(!cli.no_seed);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "sqlguard-server",
            "--database",
            "sqlite::memory:",
            "--bind",
            "0.0.0.0:8080",
            "--max-connections",
            "2",
            "--no-seed",
            "-v",
        ])
        .unwrap();

        let db = cli.database_config();
        assert_eq!(db.url, "sqlite::memory:");
        assert_eq!(db.max_connections, 2);
        assert_eq!(cli.bind.port(), 8080);
        assert!(cli.no_seed);
        assert!(cli.verbose);
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        assert!(Cli::try_parse_from(["sqlguard-server", "--bind", "localhost"]).is_err());
    }

    #[test]
    fn test_load_default_whitelist() {
        let whitelist = load_whitelist(None).unwrap();
        assert!(whitelist.table("products").is_some());
    }

    #[test]
    fn test_load_whitelist_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tables": [{{"name": "books", "columns": ["id", "name", "author"]}}]}}"#
        )
        .unwrap();

        let whitelist = load_whitelist(Some(file.path())).unwrap();
        assert_eq!(whitelist.table_names(), vec![String::from("books")]);
        assert!(whitelist.table("users").is_none());
    }

    #[test]
    fn test_load_whitelist_rejects_bad_identifier() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tables": [{{"name": "users; DROP TABLE users", "columns": ["id"]}}]}}"#
        )
        .unwrap();

        let err = load_whitelist(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Whitelist { .. }));
    }

    #[test]
    fn test_load_whitelist_missing_file() {
        let err = load_whitelist(Some(Path::new("/nonexistent/whitelist.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
