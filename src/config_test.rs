use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = AppConfig::from_json(Path::new("t.json"), "{}").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.reply_delay(), Duration::milliseconds(1500));
    assert_eq!(config.import_status_lifetime(), Duration::seconds(3));
}

#[test]
fn partial_config_overrides_only_given_fields() {
    let json = r#"{"login_delay_ms": 10, "dark_mode": false, "catalog_path": "data/catalog.json"}"#;
    let config = AppConfig::from_json(Path::new("t.json"), json).unwrap();
    assert_eq!(config.login_delay(), Duration::milliseconds(10));
    assert!(!config.dark_mode);
    assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
    assert_eq!(config.window_width, 1280.0);
}

#[test]
fn negative_delays_clamp_to_zero() {
    let config = AppConfig::from_json(Path::new("t.json"), r#"{"reply_delay_ms": -5}"#).unwrap();
    assert_eq!(config.reply_delay(), Duration::zero());
}

#[test]
fn oversized_delays_clamp_to_a_day() {
    let json = r#"{"login_delay_ms": 9223372036854775807, "import_status_ms": 90000000000}"#;
    let config = AppConfig::from_json(Path::new("t.json"), json).unwrap();
    assert_eq!(config.login_delay(), Duration::milliseconds(MAX_DELAY_MS));
    assert_eq!(config.import_status_lifetime(), Duration::days(1));
    assert_eq!(config.reply_delay(), Duration::milliseconds(1500));
}

#[test]
fn malformed_config_reports_path() {
    let err = AppConfig::from_json(Path::new("broken.json"), "{nope").unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = AppConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, AppError::Read { .. }));
}
