//! In-memory tag reader for demos and tests.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::TagError;
use crate::nfc::{TagRead, TagReader};

#[derive(Debug, Clone)]
pub struct SimulatedTagReader {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    supported: bool,
    enabled: bool,
    status: String,
    last_read: Option<TagRead>,
}

impl SimulatedTagReader {
    /// Reader on a device with tag support.
    pub fn new() -> Self {
        Self::with_support(true)
    }

    /// Reader on a device without tag support, for the negative paths.
    pub fn unsupported() -> Self {
        Self::with_support(false)
    }

    fn with_support(supported: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                supported,
                enabled: false,
                status: "Not initialized".to_string(),
                last_read: None,
            })),
        }
    }
}

impl Default for SimulatedTagReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagReader for SimulatedTagReader {
    async fn probe(&self) -> bool {
        let mut inner = self.inner.write().expect("reader lock poisoned");
        inner.status = if inner.supported {
            "NFC supported but not enabled".to_string()
        } else {
            "NFC not supported on this device".to_string()
        };
        inner.supported
    }

    async fn enable(&self) -> Result<(), TagError> {
        let mut inner = self.inner.write().expect("reader lock poisoned");
        if !inner.supported {
            inner.status = "NFC not supported on this device".to_string();
            return Err(TagError::Unsupported);
        }
        inner.enabled = true;
        inner.status = "NFC enabled and scanning".to_string();
        Ok(())
    }

    async fn disable(&self) -> Result<(), TagError> {
        let mut inner = self.inner.write().expect("reader lock poisoned");
        inner.enabled = false;
        inner.status = "NFC disabled".to_string();
        Ok(())
    }

    async fn read_tag(&self) -> Result<TagRead, TagError> {
        let mut inner = self.inner.write().expect("reader lock poisoned");
        if !inner.enabled {
            return Err(TagError::NotEnabled);
        }

        let tag = TagRead {
            id: Uuid::new_v4().simple().to_string()[..8].to_string(),
            read_at: Utc::now(),
            payload: "Sample NFC tag data".to_string(),
        };
        debug!(id = %tag.id, "simulated tag read");
        inner.last_read = Some(tag.clone());
        inner.status = "Tag read successfully".to_string();
        Ok(tag)
    }

    fn is_enabled(&self) -> bool {
        self.inner.read().expect("reader lock poisoned").enabled
    }

    fn status(&self) -> String {
        self.inner.read().expect("reader lock poisoned").status.clone()
    }

    fn last_read(&self) -> Option<TagRead> {
        self.inner
            .read()
            .expect("reader lock poisoned")
            .last_read
            .clone()
    }
}
