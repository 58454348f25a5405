//! Record sources: where the authoritative collection lives.
//!
//! The table store only ever talks to [`RecordSource`]; whether records are
//! computed locally or fetched from the paginated API is decided once, at
//! composition time.

pub mod local;
pub mod remote;

use async_trait::async_trait;

use crate::error::TableError;
use crate::query::types::{FetchPayload, TableQuery};

pub use local::LocalSource;
pub use remote::RemoteSource;

/// Asynchronous supplier of one page of records for a query.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn fetch(&self, query: &TableQuery) -> Result<FetchPayload<R>, TableError>;
}
