// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Computes distance, mean speed, and calories from raw fitness sensor packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Turns raw sensor packages (a workout code plus an ordered list of
//! readings) into workout statistics and a one-line summary message.
//!
//! ## Architecture
//!
//! - **Calories**: `CalorieModel` contract with running, walking and swimming formulas
//! - **Factory**: Dispatches a package code to the matching model
//! - **Packages**: Sample packages, JSON package files, batch processing
//! - **Config / Logging**: Environment configuration and `tracing` setup
//!
//! Shared types (records, summaries, errors, formatters) come from the
//! `workout-core` crate and are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_tracker::calories::CalorieModel;
//! use workout_tracker::factory::WorkoutFactory;
//! use workout_tracker::formatters::SummaryFormatter;
//!
//! let workout = WorkoutFactory::create("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", SummaryFormatter::default().format(&workout.summary()));
//! # Ok::<(), workout_tracker::errors::WorkoutError>(())
//! ```

/// Calorie model contract and workout implementations
pub mod calories;

/// Environment-driven tracker configuration
pub mod config;

/// Sensor package to workout dispatch
pub mod factory;

/// Structured logging setup
pub mod logging;

/// Sensor package sources and batch processing
pub mod packages;

/// Workout dispatch errors (re-exported from `workout-core`)
pub mod errors;

/// Core data models (re-exported from `workout-core`)
pub mod models;

/// Summary formatting (re-exported from `workout-core`)
pub mod formatters;

/// Calorie coefficients and unit conversions (re-exported from `workout-core`)
pub mod constants;
