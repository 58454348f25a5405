//! Tag reading capability.
//!
//! The engine never touches platform NFC hardware; it consumes this trait.
//! [`SimulatedTagReader`] is the composition-time stand-in used by demos and
//! tests, a hardware-backed reader is a foreign implementation of the same
//! surface.

pub mod simulated;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TagError;

pub use simulated::SimulatedTagReader;

/// One successfully read tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRead {
    pub id: String,
    pub read_at: DateTime<Utc>,
    pub payload: String,
}

/// Tag reader capability surface.
#[async_trait]
pub trait TagReader: Send + Sync {
    /// Whether the device can read tags at all.
    async fn probe(&self) -> bool;

    /// Start scanning. Fails on devices without tag support.
    async fn enable(&self) -> Result<(), TagError>;

    /// Stop scanning.
    async fn disable(&self) -> Result<(), TagError>;

    /// Read one tag. Requires the reader to be enabled.
    async fn read_tag(&self) -> Result<TagRead, TagError>;

    fn is_enabled(&self) -> bool;

    /// Human-readable reader state for the presentation layer.
    fn status(&self) -> String;

    fn last_read(&self) -> Option<TagRead>;
}
