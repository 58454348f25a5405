//! Typed field access primitives.
//!
//! Every record shape exposes its columns as [`FieldValue`]s so the query
//! stages can filter and order heterogeneous fields without knowing the
//! concrete record type. Access is total: a field that does not exist or
//! whose nested carrier is absent yields [`FieldValue::Missing`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scalar value a record yields for a named field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Textual field (names, emails, statuses, roles).
    Text(String),
    /// Numeric field (amounts, counts).
    Number(f64),
    /// Point-in-time field (created/updated timestamps).
    Instant(DateTime<Utc>),
    /// Absent field or unresolvable nested path.
    Missing,
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Lower-cased textual form used by substring search.
    ///
    /// `Missing` has no searchable form and therefore never matches.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.to_lowercase()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Instant(ts) => Some(ts.to_rfc3339().to_lowercase()),
            FieldValue::Missing => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Instant(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Missing, Into::into)
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite order, used when a sort header is toggled.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}
