use serde_json::json;

use desktop_starter::config::{Config, DatabaseConfig, DEFAULT_DB_PATH};
use desktop_starter::error::StarterError;

#[test]
fn config_file_round_trip() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        json!({
            "product_name": "Notes",
            "identifier": "com.acme.notes",
            "version": "1.2.3",
            "database": {"sqlite_path": "./notes.db"}
        })
        .to_string(),
    )
    .unwrap();

    let config = Config::from_file(tmp.path()).unwrap();
    assert_eq!(config.product_name, "Notes");
    assert_eq!(config.db_path(), "./notes.db");

    let out = tempfile::NamedTempFile::new().unwrap();
    config.save(out.path()).unwrap();
    assert_eq!(Config::from_file(out.path()).unwrap(), config);
}

#[test]
fn missing_database_section_uses_default_path() {
    let config = Config {
        database: Some(DatabaseConfig { sqlite_path: Some("  ".to_string()) }),
        ..Config::default()
    };
    assert_eq!(config.db_path(), DEFAULT_DB_PATH);
    assert_eq!(Config::default().db_path(), DEFAULT_DB_PATH);
}

#[test]
fn malformed_config_is_a_config_error() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "{ not json").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    assert!(matches!(err, StarterError::Config(_)));
}
