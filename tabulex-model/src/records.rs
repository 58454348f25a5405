//! Concrete record shapes served by the table engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment transaction as returned by the transactions API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    /// Transaction type reported by the backend (`payment`, `refund`, ...).
    #[serde(rename = "transaction_type")]
    pub kind: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfc_tag_id: Option<String>,
    /// Raw tag payload captured at the point of sale, when one was read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfc_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owning user, embedded by the API when the caller may see it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TransactionUser>,
}

/// Minimal user reference embedded in a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Generic directory row used by locally-sourced tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
