//! # sqlguard-server
//!
//! A small HTTP service over a demo SQLite database. Every route turns its
//! query-string parameters into a whitelist-validated
//! [`sqlguard_core::Query`] before touching the database; rejected requests
//! get a 400 that names what is allowed.
//!
//! ```ignore
//! let pool = sqlguard_sqlite::connect(&DatabaseConfig::default()).await?;
//! seed(&pool).await?;
//! let router = app(&AppState::new(pool, Whitelist::default()));
//! let res = router.handle(Request::get("/api/users/search").query_param("q", "John")).await;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod routes;
pub mod seed;
pub mod state;

pub use config::{load_whitelist, Cli, ConfigError};
pub use error::ApiError;
pub use routes::app;
pub use seed::seed;
pub use state::AppState;
