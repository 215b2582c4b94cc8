use trimmer_core::config::{CURRENT_CONFIG_VERSION, TrimmerConfig};
use trimmer_core::error::CoreError;
use trimmer_core::geometry::DEFAULT_HANDLE_WIDTH;
use trimmer_core::time::MediaTime;

#[test]
fn test_default_config_is_valid() {
    let config = TrimmerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.handle_width, DEFAULT_HANDLE_WIDTH);
    assert_eq!(config.version, CURRENT_CONFIG_VERSION);
    assert_eq!(config.maximum_duration(), None);
}

#[test]
fn test_config_save_load() {
    let config = TrimmerConfig::new()
        .with_minimum_duration(1.0)
        .with_maximum_duration(30.0)
        .with_initial_duration(12.5)
        .with_total_width(320.0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trimmer.json");
    config.save(&path).unwrap();

    let loaded = TrimmerConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.minimum_duration(), MediaTime::from_secs_f64(1.0));
    assert_eq!(loaded.maximum_duration(), Some(MediaTime::from_secs_f64(30.0)));
}

#[test]
fn test_load_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{ "minimum_duration_secs": 2.0 }"#).unwrap();

    let loaded = TrimmerConfig::load(&path).unwrap();
    assert_eq!(loaded.minimum_duration_secs, 2.0);
    assert_eq!(loaded.handle_width, DEFAULT_HANDLE_WIDTH);
    assert_eq!(loaded.version, CURRENT_CONFIG_VERSION);
}

#[test]
fn test_load_rejects_newer_major_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.json");
    std::fs::write(&path, r#"{ "version": "2.0.0" }"#).unwrap();

    let err = TrimmerConfig::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedConfigVersion { .. }));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "minimum_duration_secs": -0.5 }"#).unwrap();

    let err = TrimmerConfig::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::NegativeMinimumDuration(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TrimmerConfig::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn test_load_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        TrimmerConfig::load(&path).unwrap_err(),
        CoreError::Serialization(_)
    ));
}

#[test]
fn test_validate_rejects_bad_widths() {
    assert!(matches!(
        TrimmerConfig::new().with_handle_width(-1.0).validate(),
        Err(CoreError::InvalidHandleWidth(_))
    ));
    assert!(matches!(
        TrimmerConfig::new().with_total_width(f32::NAN).validate(),
        Err(CoreError::InvalidWidth(_))
    ));
}

#[test]
fn test_negative_initial_duration_is_normalized() {
    let config = TrimmerConfig::new().with_initial_duration(-4.0);
    assert!(config.validate().is_ok());
    assert_eq!(config.initial_duration(), MediaTime::ZERO);
}

#[test]
fn test_error_messages() {
    let err = TrimmerConfig::new()
        .with_minimum_duration(5.0)
        .with_maximum_duration(1.0)
        .validate()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "maximum duration 00:01.000 is shorter than minimum duration 00:05.000"
    );
}
