//! # Tabulex Core
//!
//! Core library for the Tabulex table engine: case-insensitive search,
//! type-aware stable sorting and fixed-size pagination over collections of
//! typed records, behind a single view-controller store that works the same
//! whether the collection lives in memory or behind a paginated HTTP API.
//!
//! ## Overview
//!
//! - **Query stages**: total, deterministic filter/sort/paginate functions
//! - **Record sources**: local in-memory and remote API-backed suppliers
//! - **Table store**: query state, page data, loading/error surfaces
//! - **Session & auth**: shared session state with simulated and remote
//!   authenticators picked at composition time
//! - **Tag reading**: the capability surface for the NFC feature, with a
//!   simulated implementation
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`query`]: query state types and the three pipeline stages
//! - [`providers`]: the [`providers::RecordSource`] seam and both sources
//! - [`store`]: the [`store::TableStore`] view controller
//! - [`session`]: session state and authentication
//! - [`nfc`]: tag reader capability
//! - [`api_client`]: the authenticated HTTP client the remote pieces share
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tabulex_core::providers::LocalSource;
//! use tabulex_core::session::SessionStore;
//! use tabulex_core::store::TableStore;
//! use tabulex_model::records::Member;
//!
//! async fn first_page(members: Vec<Member>) {
//!     let source = Arc::new(LocalSource::new(members));
//!     let session = Arc::new(SessionStore::new());
//!     let mut store = TableStore::new(source, session);
//!
//!     store.refresh().await;
//!     for member in store.records() {
//!         println!("{} <{}>", member.name, member.email);
//!     }
//! }
//! ```

pub mod api_client;
pub mod api_types;
pub mod config;
pub mod error;
pub mod nfc;
pub mod prelude;
pub mod providers;
pub mod query;
pub mod session;
pub mod store;

pub use error::{ApiError, AuthError, AuthResult, TableError, TagError};
