//! The table store: query state, fetched page and control operations.
//!
//! One store drives either mode. With a [`LocalSource`](crate::providers::LocalSource)
//! every operation recomputes the filter/sort/paginate pipeline; with a
//! [`RemoteSource`](crate::providers::RemoteSource) operations re-fetch from
//! the server, except sorting, which stays client-side over the fetched page
//! (the server is never asked to sort).
//!
//! Fetches are two-phase so a host event loop can run them off-thread:
//! [`TableStore::begin_refresh`] hands out a ticket, the source resolves the
//! fetch, and [`TableStore::apply_fetch`] installs the outcome. A ticket
//! whose generation has been superseded by a newer operation is discarded
//! wholesale, so rapid paging can never interleave a stale payload over a
//! fresh one. [`TableStore::refresh`] wraps the three steps for callers that
//! just want to await the result.

use std::sync::Arc;

use tabulex_contracts::record_like::Tabular;
use tabulex_model::fields::SortOrder;
use tracing::{debug, warn};

use crate::error::TableError;
use crate::providers::RecordSource;
use crate::query::sorting;
use crate::query::types::{
    FetchPayload, PageMeta, PageView, SortCriteria, TableQuery,
};
use crate::session::Session;

/// Claim on one in-flight fetch.
///
/// Carries the query snapshot the fetch must be executed with and the
/// generation that decides whether its outcome is still wanted.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    query: TableQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &TableQuery {
        &self.query
    }
}

/// View controller over a record source and a session.
pub struct TableStore<R> {
    source: Arc<dyn RecordSource<R>>,
    session: Arc<dyn Session>,
    query: TableQuery,
    records: Vec<R>,
    meta: PageMeta,
    is_loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<R> std::fmt::Debug for TableStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableStore")
            .field("query", &self.query)
            .field("records", &self.records.len())
            .field("meta", &self.meta)
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<R> TableStore<R>
where
    R: Tabular + Clone + Send + Sync,
{
    /// Store with the record shape's default query state: page 1, empty
    /// search, the shape's default sort.
    pub fn new(source: Arc<dyn RecordSource<R>>, session: Arc<dyn Session>) -> Self {
        Self {
            source,
            session,
            query: TableQuery::for_record::<R>(),
            records: Vec::new(),
            meta: PageMeta::default(),
            is_loading: false,
            error: None,
            generation: 0,
        }
    }

    // --- two-phase fetch -------------------------------------------------

    /// Start a fetch: bumps the generation, flags loading, snapshots the
    /// query. Any ticket issued earlier is stale from this point on.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Install a fetch outcome, unless a newer operation superseded it.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<FetchPayload<R>, TableError>,
    ) {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded fetch"
            );
            return;
        }
        self.is_loading = false;

        match result {
            Ok(payload) => {
                self.records = payload.records;
                self.meta = payload.meta;
                self.query.page.page = self.meta.current_page.max(1);
                // The server's order is whatever it returns; always re-apply
                // the active sort to the page we hold.
                sorting::sort_records(
                    &mut self.records,
                    &self.query.sort.field,
                    self.query.sort.order,
                );
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "fetch failed");
                if matches!(err, TableError::AuthenticationExpired) {
                    self.session.invalidate();
                }
                self.error = Some(err.to_string());
            }
        }
    }

    /// Fetch with the current query and install the outcome.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let result = self.source.fetch(ticket.query()).await;
        self.apply_fetch(ticket, result);
    }

    // --- control operations ----------------------------------------------

    /// Move to page `page`. Out-of-range targets (0, or past the last page)
    /// are ignored; an empty result set has no valid target at all.
    pub async fn set_page(&mut self, page: u32) {
        if page < 1 || page > self.meta.last_page {
            debug!(page, last_page = self.meta.last_page, "ignoring page change");
            return;
        }
        self.query.page.page = page;
        self.refresh().await;
    }

    /// Change the page size and start over from page 1.
    pub async fn set_per_page(&mut self, per_page: u32) {
        self.query.page.per_page = per_page.max(1);
        self.query.page.page = 1;
        self.refresh().await;
    }

    /// Sort by `field`: a repeated field toggles direction, a new field
    /// starts ascending. Re-sorts the records currently held; never fetches.
    pub fn set_sort(&mut self, field: &str) {
        if !R::sortable_fields().contains(&field) {
            debug!(field, "ignoring unsortable field");
            return;
        }
        if self.query.sort.field == field {
            self.query.sort.order = self.query.sort.order.toggled();
        } else {
            self.query.sort.field = field.to_string();
            self.query.sort.order = SortOrder::Ascending;
        }
        sorting::sort_records(
            &mut self.records,
            &self.query.sort.field,
            self.query.sort.order,
        );
    }

    /// Apply a search query and start over from page 1.
    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page.page = 1;
        self.refresh().await;
    }

    /// Clear search and sorting back to defaults and reload.
    pub async fn reset_filters(&mut self) {
        self.query.search.clear();
        self.query.page.page = 1;
        self.query.sort = SortCriteria::for_record::<R>();
        self.refresh().await;
    }

    // --- accessors -------------------------------------------------------

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn total_pages(&self) -> u32 {
        self.meta.last_page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Snapshot for the presentation layer.
    pub fn page_view(&self) -> PageView<R> {
        PageView {
            items: self.records.clone(),
            total_items: self.meta.total,
            total_pages: self.meta.last_page,
            current_page: self.query.page.page,
        }
    }
}
