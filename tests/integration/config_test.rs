//! Integration tests for configuration loading.

use shareinfo_core::config::AppConfig;
use shareinfo_core::error::ErrorKind;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/shareinfo.toml");
const FIXTURE_STEM: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/shareinfo");

#[test]
fn test_load_from_toml() {
    let config = AppConfig::load(FIXTURE).expect("load");
    assert_eq!(config.output.format, "json");
    assert!(config.output.include_unknown);
}

#[test]
fn test_load_without_extension() {
    let config = AppConfig::load(FIXTURE_STEM).expect("load");
    assert!(config.output.include_unknown);
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = AppConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/absent"))
        .expect("load");
    assert_eq!(config.output.format, "table");
    assert!(!config.output.include_unknown);
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let err = AppConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/malformed.toml"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
    assert!(err.source.is_some());
}
