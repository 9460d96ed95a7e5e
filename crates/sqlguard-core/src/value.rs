//! SQL values and parameter handling.
//!
//! Every value a caller supplies ends up as a [`SqlValue`] bound to a `?`
//! placeholder. There is deliberately no way to render a value inline.

use serde::{Serialize, Serializer};

/// A SQL value that can be bound as a parameter or read back from a row.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Returns the parameter placeholder.
    #[must_use]
    pub const fn placeholder() -> &'static str {
        "?"
    }
}

impl Serialize for SqlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Blob(b) => serializer.serialize_bytes(b),
        }
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

/// The right-hand side of a filter condition.
///
/// Comparison and `LIKE` operators take a single value; `IN` and `NOT IN`
/// take a list, with a lone scalar treated as a one-element list.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// A single bound value.
    Scalar(SqlValue),
    /// A list of bound values, one placeholder each.
    List(Vec<SqlValue>),
}

impl FilterValue {
    /// Creates a scalar filter value.
    pub fn scalar(value: impl ToSqlValue) -> Self {
        Self::Scalar(value.to_sql_value())
    }

    /// Creates a list filter value.
    pub fn list<T: ToSqlValue>(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(ToSqlValue::to_sql_value).collect())
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_sql_value())
                }
            }
        )*
    };
}

impl_scalar_from!(SqlValue, bool, i64, i32, u32, f64, f32, String);

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_sql_value())
    }
}

impl From<Vec<SqlValue>> for FilterValue {
    fn from(values: Vec<SqlValue>) -> Self {
        Self::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sql_value_conversions() {
        assert_eq!(true.to_sql_value(), SqlValue::Bool(true));
        assert_eq!(42_i32.to_sql_value(), SqlValue::Int(42));
        assert_eq!(2.5_f64.to_sql_value(), SqlValue::Float(2.5));
        assert_eq!(
            "hello".to_sql_value(),
            SqlValue::Text(String::from("hello"))
        );
        assert_eq!(None::<i32>.to_sql_value(), SqlValue::Null);
        assert_eq!(Some(42_i32).to_sql_value(), SqlValue::Int(42));
    }

    #[test]
    fn test_serialize_json() {
        let values = vec![
            SqlValue::Null,
            SqlValue::Bool(false),
            SqlValue::Int(7),
            SqlValue::Float(12.95),
            SqlValue::Text(String::from("' OR '1'='1")),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,false,7,12.95,"' OR '1'='1"]"#);
    }

    #[test]
    fn test_filter_value_from() {
        assert_eq!(FilterValue::from(700), FilterValue::Scalar(SqlValue::Int(700)));
        assert_eq!(
            FilterValue::from("Electronics"),
            FilterValue::Scalar(SqlValue::Text(String::from("Electronics")))
        );
        assert_eq!(
            FilterValue::list([1_i64, 2, 3]),
            FilterValue::List(vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)])
        );
    }
}
