//! Application configuration module.
//!
//! This module provides configuration management for the textlens pipeline.
//! Configuration is loaded from a JSON file.

use super::error::ConfigError;
use crate::geometry::FitMode;
use crate::recognition::RecognitionMethod;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/textlens.json";

/// Global configuration instance
static CONFIG_INSTANCE: OnceCell<AppConfig> = OnceCell::new();

/// Application configuration structure.
///
/// This struct represents the pipeline's default settings loaded from a JSON
/// configuration file. String fields use `Box<str>` for memory efficiency
/// since they are set once and never modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default source language for recognition requests
    pub source_language: Box<str>,

    /// Default target language for translations
    pub target_language: Box<str>,

    /// Default backend selection method
    pub method: RecognitionMethod,

    /// Default fit policy when projecting overlays
    pub fit_mode: FitMode,

    /// Letter ratio threshold for the script detection heuristic
    pub script_threshold: f64,
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    /// Initialize the global configuration instance.
    ///
    /// This should be called once at application startup. If not called,
    /// `get()` will initialize with default values.
    pub fn init() -> Result<&'static Self, ConfigError> {
        CONFIG_INSTANCE.get_or_try_init(Self::load_default)
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
            source_language: "ja-JP".into(),
            target_language: "en-US".into(),
            method: RecognitionMethod::Auto,
            fit_mode: FitMode::Contain,
            script_threshold: crate::utils::script_detect::DEFAULT_SCRIPT_THRESHOLD,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
