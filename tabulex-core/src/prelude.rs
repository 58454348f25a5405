//! Intentional crate surface consumed by presentation layers.

pub use crate::api_client::ApiClient;
pub use crate::config::Config;
pub use crate::error::{ApiError, AuthError, AuthResult, TableError, TagError};
pub use crate::nfc::{SimulatedTagReader, TagRead, TagReader};
pub use crate::providers::{LocalSource, RecordSource, RemoteSource};
pub use crate::query::types::{
    FetchPayload, PageMeta, PageRequest, PageView, SortCriteria, TableQuery,
};
pub use crate::session::{
    Authenticator, RemoteAuthenticator, Session, SessionStore,
    SimulatedAuthenticator, StoredSession,
};
pub use crate::store::{FetchTicket, TableStore};
pub use tabulex_contracts::record_like::Tabular;
pub use tabulex_model::fields::{FieldValue, SortOrder};
pub use tabulex_model::records::{Member, Transaction, TransactionUser};
pub use tabulex_model::user::{AuthToken, User};
