//! Shared fixtures and stub collaborators for the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tabulex_contracts::record_like::Tabular;
use tabulex_core::error::TableError;
use tabulex_core::providers::{LocalSource, RecordSource};
use tabulex_core::query::types::{FetchPayload, TableQuery};
use tabulex_core::session::{Session, SessionStore};
use tabulex_model::records::{Member, Transaction, TransactionUser};
use tabulex_model::user::{AuthToken, User};

pub fn member(id: i64, name: &str, role: &str) -> Member {
    Member {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        status: "active".to_string(),
        role: role.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(id),
    }
}

/// Fifteen members with distinct names; alphabetical order is Member 01..15.
pub fn fifteen_members() -> Vec<Member> {
    (1..=15)
        .map(|id| {
            let role = if id == 2 { "Admin" } else { "User" };
            member(id, &format!("Member {id:02}"), role)
        })
        .collect()
}

pub fn transaction(id: i64, amount: f64, user: Option<&str>) -> Transaction {
    Transaction {
        id,
        user_id: 1,
        amount,
        kind: "payment".to_string(),
        status: "completed".to_string(),
        nfc_tag_id: None,
        nfc_data: None,
        metadata: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(id),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(id),
        user: user.map(|name| TransactionUser {
            id: 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }),
    }
}

pub fn authenticated_session() -> SessionStore {
    let session = SessionStore::new();
    session.establish(
        User {
            id: 1,
            name: "demo".to_string(),
            email: "demo@example.com".to_string(),
        },
        AuthToken::new("test-token").unwrap(),
    );
    session
}

/// Local source that counts how many fetches the store issued.
#[derive(Debug)]
pub struct RecordingSource<R> {
    inner: LocalSource<R>,
    calls: AtomicUsize,
}

impl<R> RecordingSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            inner: LocalSource::new(records),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R> RecordSource<R> for RecordingSource<R>
where
    R: Tabular + Clone + Send + Sync,
{
    async fn fetch(&self, query: &TableQuery) -> Result<FetchPayload<R>, TableError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(query).await
    }
}

/// Which failure a [`FailingSource`] should produce.
#[derive(Debug, Clone, Copy)]
pub enum FailureMode {
    Expired,
    Required,
    Generic,
}

/// Source whose every fetch fails the same way.
#[derive(Debug)]
pub struct FailingSource {
    mode: FailureMode,
}

impl FailingSource {
    pub fn new(mode: FailureMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl<R> RecordSource<R> for FailingSource
where
    R: Send + Sync + 'static,
{
    async fn fetch(&self, _query: &TableQuery) -> Result<FetchPayload<R>, TableError> {
        Err(match self.mode {
            FailureMode::Expired => TableError::AuthenticationExpired,
            FailureMode::Required => TableError::AuthenticationRequired,
            FailureMode::Generic => {
                TableError::FetchFailed("server exploded".to_string())
            }
        })
    }
}

/// Session wrapper that counts invalidations.
#[derive(Debug)]
pub struct CountingSession {
    inner: SessionStore,
    invalidations: AtomicUsize,
}

impl CountingSession {
    pub fn new(inner: SessionStore) -> Self {
        Self {
            inner,
            invalidations: AtomicUsize::new(0),
        }
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

impl Session for CountingSession {
    fn is_authenticated(&self) -> bool {
        self.inner.is_authenticated()
    }

    fn current_user(&self) -> Option<User> {
        self.inner.current_user()
    }

    fn token(&self) -> Option<AuthToken> {
        self.inner.token()
    }

    fn invalidate(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        self.inner.invalidate();
    }
}
