// ABOUTME: Configuration module for the workout tracker
// ABOUTME: Exposes environment-driven settings for output format, message language, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Settings come from environment variables; the `workout-tracker` binary lets
//! command-line flags override them.

/// Environment configuration
pub mod environment;

pub use environment::{Environment, LogLevel, TrackerConfig};
