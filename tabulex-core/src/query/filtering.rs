//! Case-insensitive substring filtering across a record's searchable fields.
//!
//! The needle is normalized once (trim + lowercase); field values are
//! compared through their lower-cased textual form. Records whose searched
//! field is absent simply do not match on that field; filtering never fails.

use tabulex_contracts::record_like::Tabular;

/// Normalize raw search input. Whitespace-only input means "no filter".
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether any declared searchable field contains the normalized needle.
pub fn matches_query<R: Tabular>(record: &R, needle: &str) -> bool {
    R::searchable_fields().iter().any(|field| {
        record
            .field(field)
            .search_text()
            .is_some_and(|text| text.contains(needle))
    })
}

/// Retain the records matching `raw`, preserving input order.
pub fn filter_in_place<R: Tabular>(records: &mut Vec<R>, raw: &str) {
    if let Some(needle) = normalize_query(raw) {
        records.retain(|record| matches_query(record, &needle));
    }
}

/// Filtered copy of `records`, preserving input order.
pub fn filter_records<R: Tabular + Clone>(records: &[R], raw: &str) -> Vec<R> {
    let mut out = records.to_vec();
    filter_in_place(&mut out, raw);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tabulex_model::records::Member;

    fn member(id: i64, name: &str, role: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            status: "active".to_string(),
            role: role.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_query_retains_all_in_order() {
        let records = vec![
            member(1, "Zoe", "User"),
            member(2, "Ada", "Admin"),
            member(3, "Mia", "User"),
        ];

        for raw in ["", "   ", "\t\n"] {
            let filtered = filter_records(&records, raw);
            assert_eq!(filtered.len(), 3);
            let ids: Vec<i64> = filtered.iter().map(|m| m.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        let records = vec![member(1, "Ada", "Admin"), member(2, "Zoe", "User")];

        for raw in ["admin", "ADMIN", "AdMiN"] {
            let filtered = filter_records(&records, raw);
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].id, 1);
        }
    }

    #[test]
    fn needle_must_be_substring_of_some_searchable_field() {
        let records = vec![
            member(1, "Ada", "Admin"),
            member(2, "Adam", "User"),
            member(3, "Zoe", "User"),
        ];

        let filtered = filter_records(&records, "ada");
        let ids: Vec<i64> = filtered.iter().map(|m| m.id).collect();
        // "ada" is in both names and in ada@/adam@ emails, not in Zoe's fields
        assert_eq!(ids, vec![1, 2]);

        assert!(filter_records(&records, "zzz").is_empty());
    }

    #[test]
    fn missing_fields_fail_closed() {
        use tabulex_model::records::Transaction;

        let tx = Transaction {
            id: 7,
            user_id: 1,
            amount: 25.0,
            kind: "payment".to_string(),
            status: "completed".to_string(),
            nfc_tag_id: None,
            nfc_data: None,
            metadata: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            user: None,
        };

        // tag id and user are absent; only status/kind can match
        assert!(matches_query(&tx, "payment"));
        assert!(!matches_query(&tx, "tag-"));
    }
}
