//! Configuration loading tests against real files.

mod common;

use brickify::models::{AppConfig, ConfigError, SizeClass};
use common::TestApp;
use pretty_assertions::assert_eq;

#[test]
fn test_load_fixture_config() {
    let app = TestApp::new();

    let config = AppConfig::load_or_default(Some(app.config_path.as_path())).unwrap();

    assert_eq!(config.size(SizeClass::Small).canvas, 8);
    assert_eq!(config.size(SizeClass::Medium).block, 2);
    assert!(config.save_preview);
    assert_eq!(config.output_dir, app.dir().join("output"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let app = TestApp::new();

    let config = AppConfig::load_or_default(Some(app.dir().join("absent.yaml").as_path())).unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_no_path_uses_defaults() {
    assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
}

#[test]
fn test_invalid_table_in_file_is_fatal() {
    let app = TestApp::new();
    let path = app.write_file(
        "broken.yaml",
        b"color_limits: [51, 102]\ncolor_weights: [0, 1, 2, 3, 4]\n",
    );

    let err = AppConfig::load_or_default(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ConfigError::ColorTable(_)));
    assert!(err.to_string().starts_with("Invalid color table"));
}

#[test]
fn test_unparseable_file_is_fatal() {
    let app = TestApp::new();
    let path = app.write_file("garbage.yaml", b"sizes: {small: [1, 2]}\n");

    let err = AppConfig::load_or_default(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_yaml_round_trip() {
    let app = TestApp::new();
    let config = app.pipeline.config().clone();

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed = AppConfig::from_yaml_str(&yaml).unwrap();

    assert_eq!(parsed, config);
}
