//! Comparison operators accepted in filter conditions.

use std::fmt;

/// A whitelisted SQL comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Eq,
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than or equal (<=)
    Lte,
    /// Not equal (!=)
    Ne,
    /// Pattern match (LIKE)
    Like,
    /// List membership (IN)
    In,
    /// List exclusion (NOT IN)
    NotIn,
}

impl Operator {
    /// Every accepted operator, in the order they are reported to callers.
    pub const ALL: [Self; 9] = [
        Self::Eq,
        Self::Gt,
        Self::Lt,
        Self::Gte,
        Self::Lte,
        Self::Ne,
        Self::Like,
        Self::In,
        Self::NotIn,
    ];

    /// Parses an operator, ignoring case and surrounding whitespace.
    ///
    /// Runs of inner whitespace are collapsed, so `"not   in"` parses as
    /// [`Operator::NotIn`].
    ///
    /// ```
    /// use sqlguard_core::Operator;
    ///
    /// assert_eq!(Operator::parse(">="), Some(Operator::Gte));
    /// assert_eq!(Operator::parse(" like "), Some(Operator::Like));
    /// assert_eq!(Operator::parse("Not In"), Some(Operator::NotIn));
    /// assert_eq!(Operator::parse("= 1 OR 1 ="), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        Self::ALL
            .into_iter()
            .find(|op| op.as_sql() == normalized)
    }

    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Ne => "!=",
            Self::Like => "LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
        }
    }

    /// Returns `true` for operators whose right-hand side is a list.
    #[must_use]
    pub const fn takes_list(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Returns the SQL spelling of every accepted operator.
    #[must_use]
    pub fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|op| op.as_sql().to_string()).collect()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_operator() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.as_sql()), Some(op));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Operator::parse("like"), Some(Operator::Like));
        assert_eq!(Operator::parse("LiKe"), Some(Operator::Like));
        assert_eq!(Operator::parse("in"), Some(Operator::In));
        assert_eq!(Operator::parse("not\tin"), Some(Operator::NotIn));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Operator::parse(""), None);
        assert_eq!(Operator::parse("=="), None);
        assert_eq!(Operator::parse("<>"), None);
        assert_eq!(Operator::parse("BETWEEN"), None);
        assert_eq!(Operator::parse("= ? OR 1=1 --"), None);
        assert_eq!(Operator::parse("NOTIN"), None);
    }

    #[test]
    fn test_takes_list() {
        assert!(Operator::In.takes_list());
        assert!(Operator::NotIn.takes_list());
        assert!(!Operator::Like.takes_list());
    }
}
