//! Simulated tag reader behaviour tests.

use tabulex_core::error::TagError;
use tabulex_core::nfc::{SimulatedTagReader, TagReader};

#[tokio::test]
async fn reading_before_enable_fails() {
    let reader = SimulatedTagReader::new();
    let err = reader.read_tag().await.unwrap_err();
    assert!(matches!(err, TagError::NotEnabled));
    assert!(reader.last_read().is_none());
}

#[tokio::test]
async fn probe_enable_read_updates_state() {
    let reader = SimulatedTagReader::new();

    assert!(reader.probe().await);
    assert_eq!(reader.status(), "NFC supported but not enabled");

    reader.enable().await.unwrap();
    assert!(reader.is_enabled());
    assert_eq!(reader.status(), "NFC enabled and scanning");

    let tag = reader.read_tag().await.unwrap();
    assert!(!tag.id.is_empty());
    assert_eq!(tag.payload, "Sample NFC tag data");
    assert_eq!(reader.last_read(), Some(tag));
    assert_eq!(reader.status(), "Tag read successfully");
}

#[tokio::test]
async fn unsupported_devices_cannot_enable() {
    let reader = SimulatedTagReader::unsupported();

    assert!(!reader.probe().await);
    let err = reader.enable().await.unwrap_err();
    assert!(matches!(err, TagError::Unsupported));
    assert_eq!(reader.status(), "NFC not supported on this device");
}

#[tokio::test]
async fn disable_stops_scanning() {
    let reader = SimulatedTagReader::new();
    reader.enable().await.unwrap();
    reader.disable().await.unwrap();

    assert!(!reader.is_enabled());
    assert_eq!(reader.status(), "NFC disabled");
    assert!(matches!(
        reader.read_tag().await.unwrap_err(),
        TagError::NotEnabled
    ));
}

#[tokio::test]
async fn successive_reads_produce_distinct_tags() {
    let reader = SimulatedTagReader::new();
    reader.enable().await.unwrap();

    let first = reader.read_tag().await.unwrap();
    let second = reader.read_tag().await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(reader.last_read(), Some(second));
}
