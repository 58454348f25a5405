//! Record source computed entirely in memory.

use async_trait::async_trait;
use tabulex_contracts::record_like::Tabular;
use tracing::trace;

use crate::error::TableError;
use crate::providers::RecordSource;
use crate::query::types::{FetchPayload, TableQuery};
use crate::query::{filtering, pagination, sorting};

/// Source over a static in-memory collection.
///
/// Runs the full filter, sort, paginate pipeline on every fetch;
/// deterministic for a fixed collection and query.
#[derive(Debug, Clone)]
pub struct LocalSource<R> {
    records: Vec<R>,
}

impl<R> LocalSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl<R> RecordSource<R> for LocalSource<R>
where
    R: Tabular + Clone + Send + Sync,
{
    async fn fetch(&self, query: &TableQuery) -> Result<FetchPayload<R>, TableError> {
        let mut rows = self.records.clone();
        filtering::filter_in_place(&mut rows, &query.search);
        sorting::sort_records(&mut rows, &query.sort.field, query.sort.order);

        let mut request = query.page;
        let last_page = pagination::total_pages(rows.len() as u64, request.per_page);
        // A page that no longer exists (say, after the filter shrank the
        // set) clamps to the nearest valid one instead of coming back empty.
        request.page = request.page.clamp(1, last_page.max(1));

        let meta = pagination::meta_for(rows.len() as u64, request);
        let items = pagination::paginate(&rows, request.page, request.per_page).to_vec();
        trace!(
            total = meta.total,
            page = meta.current_page,
            returned = items.len(),
            "local fetch"
        );

        Ok(FetchPayload {
            records: items,
            meta,
        })
    }
}
