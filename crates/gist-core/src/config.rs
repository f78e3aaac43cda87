//! Gist Configuration Management
//!
//! Handles configuration from environment variables, config files,
//! and command-line arguments with defaults that reproduce the strict
//! full-confidence summarizer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::sentence::FULL_CONFIDENCE;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GistConfig {
    /// Purge, selection and fusion policy
    pub pipeline: PipelineConfig,

    /// Output files
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl GistConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Pipeline
        if let Ok(value) = std::env::var("GIST_MIN_CONFIDENCE") {
            config.pipeline.min_confidence =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "GIST_MIN_CONFIDENCE".to_string(),
                    value,
                })?;
        }
        if let Ok(value) = std::env::var("GIST_FUSE_TIME") {
            config.pipeline.fuse_time = parse_bool("GIST_FUSE_TIME", value)?;
        }
        if let Ok(types) = std::env::var("GIST_TIME_ENTITY_TYPES") {
            config.pipeline.time_entity_types = types
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Output
        if let Ok(suffix) = std::env::var("GIST_DUMP_SUFFIX") {
            config.output.dump_suffix = suffix;
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(value) = std::env::var("LOG_JSON") {
            config.logging.json_format = parse_bool("LOG_JSON", value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        let env_config = Self::from_env()?;
        let defaults = Self::default();

        // Only override if env values differ from defaults
        if env_config.pipeline.min_confidence != defaults.pipeline.min_confidence {
            self.pipeline.min_confidence = env_config.pipeline.min_confidence;
        }
        if env_config.pipeline.fuse_time != defaults.pipeline.fuse_time {
            self.pipeline.fuse_time = env_config.pipeline.fuse_time;
        }
        if env_config.pipeline.time_entity_types != defaults.pipeline.time_entity_types {
            self.pipeline.time_entity_types = env_config.pipeline.time_entity_types;
        }
        if env_config.output.dump_suffix != defaults.output.dump_suffix {
            self.output.dump_suffix = env_config.output.dump_suffix;
        }
        if env_config.logging.level != defaults.logging.level {
            self.logging.level = env_config.logging.level;
        }
        if env_config.logging.json_format != defaults.logging.json_format {
            self.logging.json_format = env_config.logging.json_format;
        }

        Ok(self)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.pipeline.min_confidence;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                key: "pipeline.min_confidence".to_string(),
                value: threshold.to_string(),
            });
        }
        if self.output.dump_suffix.is_empty() {
            return Err(ConfigError::MissingRequired(
                "output.dump_suffix".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}

/// Purge, selection and fusion policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum confidence a triple needs to survive the purge
    pub min_confidence: f64,

    /// Splice missing date phrases back into mini-sentences
    pub fuse_time: bool,

    /// Entity tags treated as date/time information
    pub time_entity_types: Vec<String>,
}

impl PipelineConfig {
    /// True if `entity_type` carries date/time information
    pub fn is_time_type(&self, entity_type: &str) -> bool {
        self.time_entity_types.iter().any(|t| t == entity_type)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_confidence: FULL_CONFIDENCE,
            fuse_time: true,
            time_entity_types: vec!["DATE".to_string(), "TIME".to_string()],
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suffix replacing the input extension for the diagnostic dump
    pub dump_suffix: String,

    /// Write the diagnostic dump next to the input
    pub write_dump: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dump_suffix: "-bsu.txt".to_string(),
            write_dump: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,

    /// Include file/line in logs
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            include_location: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
