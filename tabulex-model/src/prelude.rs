//! Frequently used model types for downstream crates.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::fields::{FieldValue, SortOrder};
pub use crate::records::{Member, Transaction, TransactionUser};
pub use crate::user::{AuthToken, User};
