//! Wire types shared with the remote API.

use serde::{Deserialize, Serialize};
use tabulex_model::user::{AuthToken, User};

use crate::query::types::PageMeta;

/// Response envelope every endpoint wraps its payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }
}

/// Paginated record listing.
///
/// The transactions endpoint names its collection `transactions`; the alias
/// keeps this payload deserializable from both that shape and the generic
/// `records` one.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsPayload<R> {
    #[serde(alias = "transactions")]
    pub records: Vec<R>,
    pub meta: PageMeta,
}

/// Credentials submitted to `POST auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity and token returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: AuthToken,
}
