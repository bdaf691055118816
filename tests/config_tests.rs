use std::io::Write;

use tempfile::NamedTempFile;
use textlens::geometry::FitMode;
use textlens::recognition::RecognitionMethod;
use textlens::utils::config::AppConfig;

#[test]
fn test_parse_config_from_json() {
    let json = r#"{
        "source_language": "th-TH",
        "target_language": "en-GB",
        "method": "script",
        "fit_mode": "cover",
        "script_threshold": 0.5
    }"#;

    let config: AppConfig = serde_json::from_str(json).unwrap();

    assert_eq!(&*config.source_language, "th-TH");
    assert_eq!(&*config.target_language, "en-GB");
    assert_eq!(config.method, RecognitionMethod::Script);
    assert_eq!(config.fit_mode, FitMode::Cover);
    assert!((config.script_threshold - 0.5).abs() < 1e-12);
}

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let json = r#"{
        "source_language": "ja-JP",
        "target_language": "en-US",
        "method": "auto",
        "fit_mode": "contain",
        "script_threshold": 0.4
    }"#;
    temp_file.write_all(json.as_bytes()).unwrap();

    let config = AppConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(&*config.source_language, "ja-JP");
    assert_eq!(config.method, RecognitionMethod::Auto);
    assert_eq!(config.fit_mode, FitMode::Contain);
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(&*config.source_language, "ja-JP");
    assert_eq!(&*config.target_language, "en-US");
    assert_eq!(config.method, RecognitionMethod::Auto);
    assert_eq!(config.fit_mode, FitMode::Contain);
    assert!((config.script_threshold - 0.4).abs() < 1e-12);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(AppConfig::from_file("does/not/exist.json").is_err());
}
