//! # sqlguard-core
//!
//! Safe construction of SQL queries from untrusted, structured requests.
//!
//! A caller never supplies SQL. It supplies a table, a column, an operator and
//! a value (or a table and a search term). The table and column must appear in
//! a fixed [`Whitelist`], the operator must be one of a fixed set of
//! [`Operator`]s, and the value is always bound through a `?` placeholder.
//! Anything else is rejected with a [`QueryError`] before any SQL text exists.
//!
//! ## Filtering
//!
//! ```rust
//! use sqlguard_core::{build_filter_query, QueryError};
//!
//! let query = build_filter_query("products", "category", "=", "Electronics").unwrap();
//! assert_eq!(query.sql(), "SELECT * FROM products WHERE category = ?");
//!
//! let err = build_filter_query("products", "category = '' OR 1=1 --", "=", "x").unwrap_err();
//! assert!(matches!(err, QueryError::InvalidColumn { .. }));
//! ```
//!
//! ## Custom whitelists
//!
//! ```rust
//! use sqlguard_core::{QueryBuilder, Whitelist};
//!
//! let whitelist = Whitelist::builder()
//!     .table("books", ["id", "name", "isbn"])
//!     .build()
//!     .unwrap();
//! let builder = QueryBuilder::new(&whitelist);
//!
//! let query = builder.build_search_query("books", "rust").unwrap();
//! assert_eq!(query.sql(), "SELECT * FROM books WHERE name LIKE ?");
//! ```

pub mod builder;
pub mod error;
pub mod operator;
pub mod query;
pub mod value;
pub mod whitelist;

pub use builder::{
    build_compound_filter_query, build_filter_query, build_search_query, QueryBuilder,
    SEARCH_COLUMN,
};
pub use error::{QueryError, Result, WhitelistError};
pub use operator::Operator;
pub use query::{Condition, Query};
pub use value::{FilterValue, SqlValue, ToSqlValue};
pub use whitelist::{is_valid_identifier, Table, Whitelist, WhitelistBuilder};
