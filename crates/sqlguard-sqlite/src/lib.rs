//! # sqlguard-sqlite
//!
//! Executes [`sqlguard_core::Query`] values on SQLite through `sqlx`.
//!
//! The query template is prepared exactly as built and every parameter is
//! bound to its placeholder; nothing is formatted into the SQL at this
//! stage. Result rows come back as ordered [`Row`] records.
//!
//! ```ignore
//! use sqlguard_core::build_filter_query;
//! use sqlguard_sqlite::{connect, execute, DatabaseConfig};
//!
//! let pool = connect(&DatabaseConfig::new("sqlite:shop.db")).await?;
//! let query = build_filter_query("products", "price", ">=", 700)?;
//! for row in execute(&pool, &query).await? {
//!     println!("{:?}", row.get("name"));
//! }
//! ```

mod error;
mod execute;
mod pool;
mod row;

pub use error::{ExecutionError, Result};
pub use execute::execute;
pub use pool::{connect, DatabaseConfig};
pub use row::Row;
