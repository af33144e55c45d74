//! Application configuration module.
//!
//! Configuration is loaded from a JSON file. The OCR API key is deliberately
//! not a file setting; it is read from the environment at client construction.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/app_config.json";

/// Environment variable holding the OCR provider API key
pub const API_KEY_ENV: &str = "VERIDOC_API_KEY";

/// Global configuration instance
static CONFIG_INSTANCE: OnceCell<AppConfig> = OnceCell::new();

/// Application configuration structure.
///
/// String fields use `Box<str>` since they are set once and never modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host URL for the server
    pub host_url: Box<str>,

    /// Maximum allowed uploaded image size in bytes
    pub max_image_size: u64,

    /// OCR delegate settings
    pub ocr: OcrConfig,
}

/// Settings for the remote vision-language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Base URL of the OpenAI-compatible chat-completions API
    pub api_base: Box<str>,

    /// Model identifier sent with each request
    pub model: Box<str>,

    /// Sampling temperature; kept low to minimize nondeterminism
    pub temperature: f32,

    /// Request timeout in seconds for the OCR round trip
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    /// Initialize the global configuration instance from the default path.
    ///
    /// This should be called once at application startup. If not called,
    /// `get()` will initialize with default values.
    pub fn init() -> Result<&'static Self, ConfigError> {
        CONFIG_INSTANCE.get_or_try_init(Self::load_default)
    }

    /// Initialize the global configuration instance from an explicit path.
    pub fn init_from<P: AsRef<Path>>(path: P) -> Result<&'static Self, ConfigError> {
        CONFIG_INSTANCE.get_or_try_init(|| Self::from_file(path))
    }

    /// Get the global configuration instance.
    ///
    /// If the configuration hasn't been initialized, returns default values.
    #[must_use]
    pub fn get() -> &'static Self {
        CONFIG_INSTANCE.get_or_init(Self::default)
    }

    /// Create a new configuration with default values.
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            host_url: "0.0.0.0:3000".into(),
            max_image_size: 10 * 1024 * 1024, // 10 MB
            ocr: OcrConfig::default_config(),
        }
    }
}

impl OcrConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            api_base: "https://api.together.xyz/v1".into(),
            model: "meta-llama/Llama-Vision-Free".into(),
            temperature: 0.1,
            timeout_secs: 60,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
