// ABOUTME: Environment configuration for the plan service: network binding, CORS, and enhancement
// ABOUTME: Loads .env, an optional Gemini JSON file, and environment overrides into typed settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use fitai_core::constants::enhancement::DEFAULT_TIMEOUT_SECS;
use fitai_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8001;
/// Default Gemini model for narrative enhancement
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
/// Default allowed browser origins
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8000,http://127.0.0.1:8000";

/// Sampling parameters passed to the enhancement model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerationSettings {
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[serde(default)]
    pub top_p: Option<f32>,
    /// Upper bound on generated tokens
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

/// Shape of the optional Gemini JSON configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GeminiFileConfig {
    /// API key; the `GEMINI_API_KEY` variable takes precedence
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model name
    #[serde(default)]
    pub model: Option<String>,
    /// Whether enhancement is enabled (default true)
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Sampling parameters
    #[serde(default)]
    pub generation_config: GenerationSettings,
}

impl GeminiFileConfig {
    /// Read and parse a Gemini configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read {}: {e}", path.display())).with_source(e)
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Narrative enhancement settings
#[derive(Clone, PartialEq)]
pub struct EnhancementConfig {
    /// Enhancement switch
    pub enabled: bool,
    /// Gemini API key
    pub api_key: Option<String>,
    /// Gemini model name
    pub model: String,
    /// Upper bound on one enhancement call
    pub timeout: Duration,
    /// Sampling parameters
    pub generation: GenerationSettings,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            generation: GenerationSettings::default(),
        }
    }
}

impl EnhancementConfig {
    /// Build settings from a parsed Gemini file
    #[must_use]
    pub fn from_file_config(file: GeminiFileConfig) -> Self {
        let defaults = Self::default();
        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            api_key: file.api_key.filter(|key| !key.trim().is_empty()),
            model: file.model.unwrap_or(defaults.model),
            timeout: defaults.timeout,
            generation: file.generation_config,
        }
    }

    /// Load enhancement settings from `FITAI_GEMINI_CONFIG` and environment overrides
    ///
    /// An unreadable configuration file is logged and ignored, mirroring the
    /// best-effort nature of enhancement.
    ///
    /// # Errors
    ///
    /// Returns an error if an override variable holds an unparsable value
    pub fn from_env() -> AppResult<Self> {
        let file = match env::var("FITAI_GEMINI_CONFIG") {
            Ok(path) => GeminiFileConfig::load(Path::new(&path)).unwrap_or_else(|e| {
                warn!("Ignoring Gemini config file {path}: {e}");
                GeminiFileConfig::default()
            }),
            Err(_) => GeminiFileConfig::default(),
        };

        Self::from_file_config(file).apply_env_overrides()
    }

    fn apply_env_overrides(mut self) -> AppResult<Self> {
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            self.model = model;
        }
        if let Some(enabled) = parse_env::<bool>("FITAI_ENHANCEMENT_ENABLED")? {
            self.enabled = enabled;
        }
        if let Some(secs) = parse_env::<u64>("FITAI_ENHANCEMENT_TIMEOUT_SECS")? {
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    /// Enhancement runs only when enabled and an API key is present
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }
}

impl Debug for EnhancementConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EnhancementConfig")
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("generation", &self.generation)
            .finish()
    }
}

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Allowed CORS origins (`*` allows any)
    pub cors_origins: Vec<String>,
    /// Narrative enhancement settings
    pub enhancement: EnhancementConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            enhancement: EnhancementConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, reading `.env` first
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparsable value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned()),
            http_port: parse_env("HTTP_PORT")?.unwrap_or(DEFAULT_HTTP_PORT),
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_owned()),
            ),
            enhancement: EnhancementConfig::from_env()?,
        };

        info!("{}", config.summary());
        Ok(config)
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line configuration summary safe for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitAI planner configuration: bind={} cors_origins={} enhancement_available={} model={}",
            self.bind_address(),
            self.cors_origins.join(","),
            self.enhancement.is_available(),
            self.enhancement.model
        )
    }
}

/// Read and parse an optional environment variable
fn parse_env<T: FromStr>(key: &str) -> AppResult<Option<T>> {
    env::var(key).ok().map_or(Ok(None), |raw| {
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::config(format!("Invalid {key} value: {raw}")))
    })
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
