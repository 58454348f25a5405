//! Type-aware, stable ordering of records by a named field.

use std::cmp::Ordering;

use tabulex_contracts::record_like::Tabular;
use tabulex_model::fields::{FieldValue, SortOrder};

/// Compare two records on `field`.
///
/// Descending order swaps the operands rather than reversing the ascending
/// result, so ties keep their meaning under either direction. Values of
/// mismatched or non-orderable types compare as equal.
pub fn compare_records<R: Tabular>(
    a: &R,
    b: &R,
    field: &str,
    order: SortOrder,
) -> Ordering {
    let (lhs, rhs) = match order {
        SortOrder::Ascending => (a, b),
        SortOrder::Descending => (b, a),
    };
    compare_values(&lhs.field(field), &rhs.field(field))
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => {
            a.to_lowercase().cmp(&b.to_lowercase())
        }
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Instant(a), FieldValue::Instant(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Sort records in place by `field`/`order`.
///
/// Uses the standard stable sort, so records with equal keys retain their
/// prior relative order.
pub fn sort_records<R: Tabular>(records: &mut [R], field: &str, order: SortOrder) {
    records.sort_by(|a, b| compare_records(a, b, field, order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tabulex_model::records::{Member, Transaction, TransactionUser};

    fn member(id: i64, name: &str, role: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
            email: format!("user{id}@example.com"),
            status: "active".to_string(),
            role: role.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(id),
        }
    }

    fn transaction(id: i64, amount: f64, user: Option<&str>) -> Transaction {
        Transaction {
            id,
            user_id: 1,
            amount,
            kind: "payment".to_string(),
            status: "completed".to_string(),
            nfc_tag_id: None,
            nfc_data: None,
            metadata: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            user: user.map(|name| TransactionUser {
                id: 1,
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
            }),
        }
    }

    #[test]
    fn sorts_text_ascending_case_insensitively() {
        let mut records = vec![
            member(1, "charlie", "User"),
            member(2, "Alice", "User"),
            member(3, "Bob", "User"),
        ];

        sort_records(&mut records, "name", SortOrder::Ascending);

        let names: Vec<&str> = records.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "charlie"]);
    }

    #[test]
    fn descending_is_exact_mirror_for_tie_free_data() {
        let mut asc = vec![
            member(1, "Charlie", "User"),
            member(2, "Alice", "User"),
            member(3, "Bob", "User"),
        ];
        let mut desc = asc.clone();

        sort_records(&mut asc, "name", SortOrder::Ascending);
        sort_records(&mut desc, "name", SortOrder::Descending);

        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut records = vec![
            member(3, "Bob", "User"),
            member(1, "Charlie", "User"),
            member(2, "Alice", "User"),
        ];

        sort_records(&mut records, "name", SortOrder::Ascending);
        let once = records.clone();
        sort_records(&mut records, "name", SortOrder::Ascending);
        assert_eq!(records, once);
    }

    #[test]
    fn equal_keys_keep_relative_input_order() {
        let mut records = vec![
            member(10, "Same", "Admin"),
            member(20, "Same", "User"),
            member(30, "Same", "Viewer"),
        ];

        sort_records(&mut records, "name", SortOrder::Ascending);
        let ids: Vec<i64> = records.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);

        sort_records(&mut records, "name", SortOrder::Descending);
        let ids: Vec<i64> = records.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn numeric_fields_sort_numerically() {
        let mut records = vec![
            transaction(1, 100.0, None),
            transaction(2, 9.5, None),
            transaction(3, 25.0, None),
        ];

        sort_records(&mut records, "amount", SortOrder::Ascending);
        let amounts: Vec<f64> = records.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![9.5, 25.0, 100.0]);
    }

    #[test]
    fn absent_nested_value_sorts_as_lowest_string() {
        let mut records = vec![
            transaction(1, 1.0, Some("Maya")),
            transaction(2, 2.0, None),
            transaction(3, 3.0, Some("Alvin")),
        ];

        sort_records(&mut records, "user.name", SortOrder::Ascending);
        let ids: Vec<i64> = records.iter().map(|t| t.id).collect();
        // missing user resolves to "" and lands first
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn unknown_field_leaves_order_untouched() {
        let mut records = vec![
            member(3, "Bob", "User"),
            member(1, "Charlie", "User"),
            member(2, "Alice", "User"),
        ];
        let before = records.clone();

        sort_records(&mut records, "no_such_field", SortOrder::Ascending);
        assert_eq!(records, before);
    }
}
