use tabulex_model::fields::{FieldValue, SortOrder};
use tabulex_model::records::{Member, Transaction};

// A trait that lets the query stages treat every record shape as a bag of
// named, typed fields without knowing the concrete type.
pub trait Tabular {
    /// Stable identifier of the record within its collection.
    fn record_id(&self) -> i64;

    /// Resolve a field by name.
    ///
    /// Dotted paths (`user.name`) traverse nested structures; a path whose
    /// nested carrier is absent resolves to the empty string so such records
    /// order below every populated value instead of failing. Unknown paths
    /// resolve to [`FieldValue::Missing`].
    fn field(&self, path: &str) -> FieldValue;

    /// Fields consulted by substring search.
    fn searchable_fields() -> &'static [&'static str];

    /// Fields the presentation layer may order by.
    fn sortable_fields() -> &'static [&'static str];

    /// Initial sort applied before the user picks a column.
    fn default_sort() -> (&'static str, SortOrder);
}

impl Tabular for Transaction {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, path: &str) -> FieldValue {
        match path {
            "id" => FieldValue::Number(self.id as f64),
            "user_id" => FieldValue::Number(self.user_id as f64),
            "amount" => FieldValue::Number(self.amount),
            "transaction_type" => FieldValue::from(self.kind.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            "nfc_tag_id" => FieldValue::from(self.nfc_tag_id.as_deref()),
            "created_at" => FieldValue::Instant(self.created_at),
            "updated_at" => FieldValue::Instant(self.updated_at),
            "user.name" => FieldValue::Text(
                self.user.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            ),
            "user.email" => FieldValue::Text(
                self.user.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
            ),
            _ => FieldValue::Missing,
        }
    }

    fn searchable_fields() -> &'static [&'static str] {
        &[
            "status",
            "transaction_type",
            "nfc_tag_id",
            "user.name",
            "user.email",
        ]
    }

    fn sortable_fields() -> &'static [&'static str] {
        &[
            "id",
            "amount",
            "transaction_type",
            "status",
            "created_at",
            "updated_at",
            "user.name",
            "user.email",
        ]
    }

    fn default_sort() -> (&'static str, SortOrder) {
        ("created_at", SortOrder::Descending)
    }
}

impl Tabular for Member {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, path: &str) -> FieldValue {
        match path {
            "id" => FieldValue::Number(self.id as f64),
            "name" => FieldValue::from(self.name.as_str()),
            "email" => FieldValue::from(self.email.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            "role" => FieldValue::from(self.role.as_str()),
            "created_at" => FieldValue::Instant(self.created_at),
            _ => FieldValue::Missing,
        }
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email", "status", "role"]
    }

    fn sortable_fields() -> &'static [&'static str] {
        &["name", "email", "status", "role", "created_at"]
    }

    fn default_sort() -> (&'static str, SortOrder) {
        ("name", SortOrder::Ascending)
    }
}
