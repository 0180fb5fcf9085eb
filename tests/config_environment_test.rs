// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates parsing fallbacks and TrackerConfig loading from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use workout_tracker::config::environment::{
    ENVIRONMENT_VAR, LANGUAGE_VAR, LOG_LEVEL_VAR, OUTPUT_FORMAT_VAR,
};
use workout_tracker::config::{Environment, LogLevel, TrackerConfig};
use workout_tracker::formatters::{MessageLanguage, OutputFormat};

fn clear_tracker_env() {
    for var in [OUTPUT_FORMAT_VAR, LANGUAGE_VAR, LOG_LEVEL_VAR, ENVIRONMENT_VAR] {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default(" Debug "), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("loud"), LogLevel::Warn);
    assert_eq!(LogLevel::Debug.to_string(), "debug");
}

#[test]
fn test_log_level_directives_scope_tracker_crates() {
    assert_eq!(
        LogLevel::Trace.filter_directives(),
        "warn,workout_tracker=trace,workout_core=trace"
    );
    assert!(LogLevel::Debug > LogLevel::Info);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Development.is_production());
    assert_eq!(Environment::Production.to_string(), "production");
}

#[test]
#[serial]
fn test_tracker_config_defaults() {
    clear_tracker_env();

    let config = TrackerConfig::from_env();

    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.language, MessageLanguage::English);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_tracker_config_from_env() {
    clear_tracker_env();
    env::set_var(OUTPUT_FORMAT_VAR, "json");
    env::set_var(LANGUAGE_VAR, "ru");
    env::set_var(LOG_LEVEL_VAR, "trace");
    env::set_var(ENVIRONMENT_VAR, "production");

    let config = TrackerConfig::from_env();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.language, MessageLanguage::Russian);
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(config.environment, Environment::Production);

    clear_tracker_env();
}

#[test]
#[serial]
fn test_tracker_config_unknown_values_fall_back() {
    clear_tracker_env();
    env::set_var(OUTPUT_FORMAT_VAR, "yaml");
    env::set_var(LANGUAGE_VAR, "klingon");

    let config = TrackerConfig::from_env();

    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.language, MessageLanguage::English);

    clear_tracker_env();
}
