//! Trait surfaces that describe interactions with Tabulex data models.

pub mod record_like;

/// Frequently used trait combinators for engine and orchestration crates.
pub mod prelude {
    pub use super::record_like::Tabular;
    pub use tabulex_model::fields::{FieldValue, SortOrder};
}
