//! ServiceConfig parsing and service construction

use std::collections::HashMap;
use std::path::PathBuf;

use tempfile::TempDir;
use u25match_core::errors::ExErrorKind;
use u25match_core::FIXTURE_UID;
use u25match_store::config::{
    DEFAULT_API_BASE_URL, DEFAULT_DB_PATH, ENV_API_BASE_URL, ENV_API_TOKEN, ENV_DB_PATH,
    ENV_SERVICE_MODE,
};
use u25match_store::{build_service, ServiceConfig, ServiceMode};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.mode, ServiceMode::Mock);
    assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert!(config.api_token.is_none());
}

#[test]
fn test_all_values_read() {
    let config = ServiceConfig::from_lookup(lookup(&[
        (ENV_SERVICE_MODE, "http"),
        (ENV_DB_PATH, "/tmp/p.db"),
        (ENV_API_BASE_URL, "https://api.example"),
        (ENV_API_TOKEN, "tok"),
    ]))
    .unwrap();

    assert_eq!(config.mode, ServiceMode::Http);
    assert_eq!(config.db_path, PathBuf::from("/tmp/p.db"));
    assert_eq!(config.api_base_url, "https://api.example");
    assert_eq!(config.api_token.as_ref().map(|t| t.expose().as_str()), Some("tok"));
    assert!(!format!("{:?}", config).contains("tok\""));
}

#[test]
fn test_empty_values_fall_back_to_defaults() {
    let config =
        ServiceConfig::from_lookup(lookup(&[(ENV_SERVICE_MODE, ""), (ENV_API_TOKEN, "  ")]))
            .unwrap();

    assert_eq!(config.mode, ServiceMode::Mock);
    assert!(config.api_token.is_none());
}

#[test]
fn test_unknown_mode_is_invalid_input() {
    let err = ServiceConfig::from_lookup(lookup(&[(ENV_SERVICE_MODE, "firebase")])).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some(ENV_SERVICE_MODE));
    assert!(err.message().contains("firebase"));
}

#[test]
fn test_build_service_per_mode() {
    let dir = TempDir::new().unwrap();

    let mock = build_service(&ServiceConfig::default()).unwrap();
    assert_eq!(mock.name(), "mock");

    let sqlite = build_service(
        &ServiceConfig::default()
            .with_mode(ServiceMode::Sqlite)
            .with_db_path(dir.path().join("profiles.db")),
    )
    .unwrap();
    assert_eq!(sqlite.name(), "sqlite");
    assert!(dir.path().join("profiles.db").exists());

    let http = build_service(&ServiceConfig::default().with_mode(ServiceMode::Http)).unwrap();
    assert_eq!(http.name(), "http");
}

#[test]
fn test_default_mock_serves_fixture_profile() {
    let service = build_service(&ServiceConfig::default()).unwrap();

    let profile = service.fetch_profile(FIXTURE_UID).unwrap();

    assert_eq!(profile.name, "田中太郎");
    assert_eq!(profile.age, 25);
    assert_eq!(
        service.fetch_profile("user-unknown").unwrap_err().kind(),
        ExErrorKind::ProfileNotFound
    );
}
