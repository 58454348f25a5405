//! Record source backed by the paginated HTTP API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api_client::ApiClient;
use crate::api_types::RecordsPayload;
use crate::error::{ApiError, TableError};
use crate::providers::RecordSource;
use crate::query::types::{FetchPayload, TableQuery};
use crate::session::Session;

/// Source that asks the server for each page.
///
/// Forwards `page`, `per_page` and `search`; sort is applied client-side by
/// the store, never forwarded (the server's order is whatever it returns).
#[derive(Clone)]
pub struct RemoteSource {
    client: ApiClient,
    session: Arc<dyn Session>,
    path: String,
}

impl RemoteSource {
    pub fn new(client: ApiClient, session: Arc<dyn Session>, path: impl Into<String>) -> Self {
        Self {
            client,
            session,
            path: path.into(),
        }
    }

    /// Source for the transactions endpoint.
    pub fn transactions(client: ApiClient, session: Arc<dyn Session>) -> Self {
        Self::new(client, session, "transactions")
    }

    fn map_error(err: ApiError) -> TableError {
        match err {
            ApiError::Unauthorized => TableError::AuthenticationExpired,
            ApiError::Status { message, .. } if !message.trim().is_empty() => {
                TableError::FetchFailed(message)
            }
            _ => TableError::FetchFailed("Failed to fetch records".to_string()),
        }
    }
}

impl std::fmt::Debug for RemoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<R> RecordSource<R> for RemoteSource
where
    R: DeserializeOwned + Send + Sync + 'static,
{
    async fn fetch(&self, query: &TableQuery) -> Result<FetchPayload<R>, TableError> {
        let Some(token) = self.session.token() else {
            return Err(TableError::AuthenticationRequired);
        };
        // The session owns the token; re-sync the client on every fetch so a
        // re-login is picked up without rebuilding the source.
        self.client.set_token(Some(token)).await;

        let mut params = vec![
            ("page", query.page.page.to_string()),
            ("per_page", query.page.per_page.to_string()),
        ];
        let search = query.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }

        debug!(path = %self.path, page = query.page.page, "remote fetch");
        let payload: RecordsPayload<R> = self
            .client
            .get(&self.path, &params)
            .await
            .map_err(Self::map_error)?;

        Ok(FetchPayload {
            records: payload.records,
            meta: payload.meta,
        })
    }
}
