//! Tests for context sources

use std::fs;

use tempfile::TempDir;

use super::*;

const SNAPSHOT: &str = r#"{
    "location": "Lisbon",
    "weather": {"temperature": 21.5, "condition": "Sunny", "high": 24, "low": 15},
    "sun": {"sunrise": "07:41", "sunset": "18:52"},
    "events": [
        {"title": "Standup", "start": "09:30", "end": "09:45"},
        {"title": "Holiday", "start": "2026-10-17", "all_day": true}
    ],
    "reminders": [{"title": "Water plants"}],
    "news": [{"title": "Rust 2.0 announced", "source": "The Register"}],
    "battery": {"level": 0.42, "charging": false}
}"#;

fn write_snapshot(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("context.json");
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_snapshot_source_reads_all_sections() {
    let dir = TempDir::new().unwrap();
    let source = SnapshotSource::new(write_snapshot(&dir, SNAPSHOT));

    let context = source.gather().await.unwrap();
    assert_eq!(context.location.as_deref(), Some("Lisbon"));

    let weather = context.weather.unwrap();
    assert_eq!(weather.condition, "Sunny");
    assert_eq!(weather.unit, "C");
    assert_eq!(weather.high, Some(24.0));

    assert_eq!(context.events.len(), 2);
    assert!(!context.events[0].all_day);
    assert!(context.events[1].all_day);
    assert_eq!(context.reminders[0].due, None);
    assert_eq!(context.news[0].source.as_deref(), Some("The Register"));
    assert_eq!(context.battery.unwrap().percent(), 42);
    assert!(!context.now.is_empty());
}

#[tokio::test]
async fn test_snapshot_source_keeps_supplied_timestamp() {
    let dir = TempDir::new().unwrap();
    let source = SnapshotSource::new(write_snapshot(
        &dir,
        r#"{"now": "2026-10-17T08:00:00+01:00"}"#,
    ));

    let context = source.gather().await.unwrap();
    assert_eq!(context.now, "2026-10-17T08:00:00+01:00");
    assert!(context.events.is_empty());
    assert!(context.weather.is_none());
}

#[tokio::test]
async fn test_snapshot_source_missing_file() {
    let dir = TempDir::new().unwrap();
    let source = SnapshotSource::new(dir.path().join("missing.json"));

    let err = source.gather().await.unwrap_err();
    assert!(matches!(err, ContextError::Read { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[tokio::test]
async fn test_snapshot_source_invalid_json() {
    let dir = TempDir::new().unwrap();
    let source = SnapshotSource::new(write_snapshot(&dir, "{ not json"));

    let err = source.gather().await.unwrap_err();
    assert!(matches!(err, ContextError::Parse { .. }));
}

#[tokio::test]
async fn test_static_source_stamps_now() {
    let source = StaticSource::default();
    let context = source.gather().await.unwrap();
    assert!(!context.now.is_empty());
    assert!(context.events.is_empty());
}

#[test]
fn test_prompt_json_omits_absent_sections() {
    let context = WidgetContext {
        now: "2026-10-17T08:00:00Z".to_string(),
        ..WidgetContext::default()
    };
    let json = context.to_prompt_json().unwrap();
    assert!(!json.contains("weather"));
    assert!(!json.contains("battery"));
    assert!(json.contains("\"events\":[]"));
}

#[test]
fn test_battery_percent_is_clamped() {
    let battery = super::super::Battery {
        level: 1.7,
        charging: true,
    };
    assert_eq!(battery.percent(), 100);
}

#[tokio::test]
async fn test_host_source_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);

    let source = HostSource::from_path(Some(path));
    assert!(matches!(source, HostSource::Snapshot(_)));
    assert_eq!(source.gather().await.unwrap().location.as_deref(), Some("Lisbon"));

    let source = HostSource::from_path(None);
    assert!(matches!(source, HostSource::Static(_)));
    assert!(source.gather().await.unwrap().location.is_none());
}
