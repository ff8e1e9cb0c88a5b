use chargecap::config::Config;
use std::fs;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.telematics.username = "owner@example.com".to_string();
    cfg.logging.file = path.with_extension("log").to_string_lossy().to_string();

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.telematics.username, "owner@example.com");
    assert_eq!(loaded.logging.file, cfg.logging.file);
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();

    // Empty region
    cfg.telematics.region.clear();
    assert!(cfg.validate().is_err());

    // Empty brand
    cfg = Config::default();
    cfg.telematics.brand.clear();
    assert!(cfg.validate().is_err());

    // Poll interval zero
    cfg = Config::default();
    cfg.poll_interval_ms = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_yaml_fills_defaults() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"telematics:\n  username: someone\n").unwrap();
    let cfg = Config::from_file(tmp.path()).unwrap();
    assert_eq!(cfg.telematics.username, "someone");
    assert_eq!(cfg.telematics.region, "EU");
    assert_eq!(cfg.poll_interval_ms, 30_000);
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"bad: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Serialization error"));
}
