//! Configuration Integration Tests
//!
//! File-backed settings as the CLI uses them:
//! - Defaults written on first open
//! - Persistent updates versus per-run overrides
//! - Generator construction from the loaded config

use std::time::Duration;

use tempfile::tempdir;

use talentscout::commands::create_generator;
use talentscout::{AppConfig, AppError, ConfigService, SettingsUpdate};

#[test]
fn test_first_open_writes_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".talentscout").join("config.json");

    let service = ConfigService::open(&path).unwrap();

    assert!(path.exists());
    let on_disk: AppConfig =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&on_disk, service.get_config());
    assert_eq!(on_disk.model, "gpt-4.1-mini");
}

#[test]
fn test_override_is_not_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut service = ConfigService::open(&path).unwrap();

    service
        .override_config(SettingsUpdate {
            model: Some("gpt-4o".to_string()),
            request_timeout_secs: Some(5),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(service.get_config().model, "gpt-4o");

    let reopened = ConfigService::open(&path).unwrap();
    assert_eq!(reopened.get_config().model, "gpt-4.1-mini");
}

#[test]
fn test_invalid_override_rejected() {
    let dir = tempdir().unwrap();
    let mut service = ConfigService::open(dir.path().join("config.json")).unwrap();

    let err = service
        .override_config(SettingsUpdate {
            request_timeout_secs: Some(0),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(service.get_config(), &AppConfig::default());
}

#[test]
fn test_update_persists_and_feeds_generator() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut service = ConfigService::open(&path).unwrap();

    service
        .update_config(SettingsUpdate {
            request_timeout_secs: Some(15),
            api_key_env: Some("TALENTSCOUT_INTEGRATION_UNSET_KEY".to_string()),
            ..Default::default()
        })
        .unwrap();

    let reopened = ConfigService::open(&path).unwrap();
    let generator = create_generator(reopened.get_config()).unwrap();
    assert_eq!(generator.timeout(), Duration::from_secs(15));
}
