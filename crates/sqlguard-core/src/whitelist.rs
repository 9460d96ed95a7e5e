//! Table and column whitelists.
//!
//! A [`Whitelist`] is built once at startup and never mutated afterwards.
//! Identifiers that end up in SQL text are always borrowed from it, never
//! from caller input.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::WhitelistError;

/// Maximum length of a whitelisted identifier.
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Tables and columns accepted by [`Whitelist::default`].
const DEFAULT_TABLES: &[(&str, &[&str])] = &[
    ("users", &["id", "name", "username", "email", "is_admin"]),
    ("products", &["id", "name", "category", "price", "inventory"]),
    ("orders", &["id", "user_id", "total", "status"]),
    ("customers", &["id", "name", "email", "phone"]),
];

/// Returns `true` if `s` is a plain SQL identifier.
///
/// Must start with an ASCII letter or underscore, continue with ASCII
/// alphanumerics or underscores, and be at most 63 characters long.
///
/// ```
/// use sqlguard_core::is_valid_identifier;
///
/// assert!(is_valid_identifier("user_id"));
/// assert!(!is_valid_identifier("users; DROP TABLE users"));
/// assert!(!is_valid_identifier("1users"));
/// ```
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }

    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A whitelisted table and its ordered column allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
}

impl Table {
    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the allowed columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Looks up a column by exact name, returning the whitelisted spelling.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.as_str() == name)
            .map(String::as_str)
    }
}

/// The fixed set of tables and columns a query may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    tables: Vec<Table>,
}

impl Default for Whitelist {
    fn default() -> Self {
        Self {
            tables: DEFAULT_TABLES
                .iter()
                .map(|(name, columns)| Table {
                    name: (*name).to_string(),
                    columns: columns.iter().map(|c| (*c).to_string()).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WhitelistDocument {
    tables: Vec<TableDocument>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableDocument {
    name: String,
    columns: Vec<String>,
}

impl Whitelist {
    /// Returns a shared instance of the default whitelist.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<Whitelist> = OnceLock::new();
        STANDARD.get_or_init(Self::default)
    }

    /// Starts building a custom whitelist.
    #[must_use]
    pub fn builder() -> WhitelistBuilder {
        WhitelistBuilder::default()
    }

    /// Parses a whitelist from a JSON document.
    ///
    /// The document has the shape
    /// `{"tables": [{"name": "users", "columns": ["id", "email"]}]}`.
    /// Every identifier is validated exactly as [`WhitelistBuilder::table`]
    /// does.
    pub fn from_json(json: &str) -> Result<Self, WhitelistError> {
        let document: WhitelistDocument = serde_json::from_str(json)?;
        document
            .tables
            .into_iter()
            .fold(Self::builder(), |builder, table| {
                builder.table(table.name, table.columns)
            })
            .build()
    }

    /// Looks up a table by exact name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Returns all tables in declaration order.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Returns the whitelisted table names in declaration order.
    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }
}

/// Builder for a validated [`Whitelist`].
///
/// Errors are collected lazily and reported by [`WhitelistBuilder::build`],
/// so declarations can be chained.
#[derive(Debug, Default)]
pub struct WhitelistBuilder {
    tables: Vec<Table>,
    error: Option<WhitelistError>,
}

impl WhitelistBuilder {
    /// Declares a table and its allowed columns.
    #[must_use]
    pub fn table<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.error.is_some() {
            return self;
        }
        let name = name.into();
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.error = Self::check(&self.tables, &name, &columns).err();
        if self.error.is_none() {
            self.tables.push(Table { name, columns });
        }
        self
    }

    fn check(existing: &[Table], name: &str, columns: &[String]) -> Result<(), WhitelistError> {
        if !is_valid_identifier(name) {
            return Err(WhitelistError::InvalidIdentifier {
                kind: "table",
                name: name.to_string(),
            });
        }
        if existing.iter().any(|t| t.name == name) {
            return Err(WhitelistError::DuplicateTable(name.to_string()));
        }
        if columns.is_empty() {
            return Err(WhitelistError::EmptyTable(name.to_string()));
        }
        if let Some(bad) = columns.iter().find(|c| !is_valid_identifier(c)) {
            return Err(WhitelistError::InvalidIdentifier {
                kind: "column",
                name: bad.clone(),
            });
        }
        Ok(())
    }

    /// Finishes the whitelist, reporting the first invalid declaration.
    pub fn build(self) -> Result<Whitelist, WhitelistError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Whitelist {
                tables: self.tables,
            }),
        }
    }
}
