// ABOUTME: Environment configuration for the workout tracker
// ABOUTME: Parses log level, deployment environment, output format, and message language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::debug;

use crate::formatters::{MessageLanguage, OutputFormat};

/// Environment variable selecting the output format (`text` or `json`)
pub const OUTPUT_FORMAT_VAR: &str = "WORKOUT_OUTPUT_FORMAT";

/// Environment variable selecting the message language (`en` or `ru`)
pub const LANGUAGE_VAR: &str = "WORKOUT_LANGUAGE";

/// Environment variable selecting the tracker's log verbosity
pub const LOG_LEVEL_VAR: &str = "WORKOUT_LOG_LEVEL";

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Verbosity of the tracker's own log output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors (default, keeps batch runs quiet)
    #[default]
    Warn,
    /// One line per processed batch
    Info,
    /// One line per built workout
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Level name as understood by `EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse a level name; anything unrecognized keeps the default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }

    /// Filter directives applying this level to the tracker crates only
    ///
    /// Dependencies stay at `warn` whatever the tracker level is.
    #[must_use]
    pub fn filter_directives(self) -> String {
        format!(
            "warn,workout_tracker={level},workout_core={level}",
            level = self.as_str()
        )
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the tracker runs; production turns on detailed log fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local runs (default)
    #[default]
    Development,
    /// Scheduled or deployed runs
    Production,
}

impl Environment {
    /// Parse an environment name; anything but `production`/`prod` is development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether log lines should carry source location and thread fields
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Environment name used in log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one tracker run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    /// How summaries are rendered
    pub output_format: OutputFormat,
    /// Label set of the text message
    pub language: MessageLanguage,
    /// Tracker log verbosity (`RUST_LOG`, when set, replaces it unless overridden)
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unrecognized values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            output_format: env::var(OUTPUT_FORMAT_VAR)
                .map(|v| OutputFormat::from_str_param(&v))
                .unwrap_or_default(),
            language: env::var(LANGUAGE_VAR)
                .map(|v| MessageLanguage::from_str_param(&v))
                .unwrap_or_default(),
            log_level: env::var(LOG_LEVEL_VAR)
                .map(|v| LogLevel::from_str_or_default(&v))
                .unwrap_or_default(),
            environment: env::var(ENVIRONMENT_VAR)
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
        };
        debug!(
            output_format = %config.output_format,
            language = %config.language,
            log_level = %config.log_level,
            environment = %config.environment,
            "Loaded tracker configuration"
        );
        config
    }
}
