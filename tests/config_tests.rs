use std::io::Write;

use tempfile::NamedTempFile;
use veridoc::utils::config::AppConfig;

#[test]
fn test_parse_config_from_json() {
    let json = r#"{
        "host_url": "127.0.0.1:8080",
        "max_image_size": 5242880,
        "ocr": {
            "api_base": "https://example.test/v1",
            "model": "test-vision-model",
            "temperature": 0.2,
            "timeout_secs": 30
        }
    }"#;

    let config: AppConfig = serde_json::from_str(json).unwrap();

    assert_eq!(&*config.host_url, "127.0.0.1:8080");
    assert_eq!(config.max_image_size, 5242880);
    assert_eq!(&*config.ocr.api_base, "https://example.test/v1");
    assert_eq!(&*config.ocr.model, "test-vision-model");
    assert_eq!(config.ocr.timeout_secs, 30);
}

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let json = r#"{
        "host_url": "0.0.0.0:3000",
        "max_image_size": 10485760,
        "ocr": {
            "api_base": "https://api.together.xyz/v1",
            "model": "meta-llama/Llama-Vision-Free",
            "temperature": 0.1,
            "timeout_secs": 60
        }
    }"#;
    temp_file.write_all(json.as_bytes()).unwrap();

    let config = AppConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(&*config.host_url, "0.0.0.0:3000");
    assert_eq!(config.max_image_size, 10485760);
    assert_eq!(&*config.ocr.model, "meta-llama/Llama-Vision-Free");
}

#[test]
fn test_load_missing_file_fails() {
    assert!(AppConfig::from_file("does/not/exist.json").is_err());
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(&*config.host_url, "0.0.0.0:3000");
    assert_eq!(config.max_image_size, 10 * 1024 * 1024);
    assert_eq!(config.ocr.timeout_secs, 60);
    assert!((config.ocr.temperature - 0.1).abs() < f32::EPSILON);
}

#[test]
fn test_serialize_config_round_trip() {
    let config = AppConfig::default();
    let serialized = serde_json::to_string(&config).unwrap();
    let parsed: AppConfig = serde_json::from_str(&serialized).unwrap();

    assert_eq!(config.host_url, parsed.host_url);
    assert_eq!(config.max_image_size, parsed.max_image_size);
    assert_eq!(config.ocr.api_base, parsed.ocr.api_base);
    assert_eq!(config.ocr.model, parsed.ocr.model);
    assert_eq!(config.ocr.timeout_secs, parsed.ocr.timeout_secs);
}
