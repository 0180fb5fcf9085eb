// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, workout models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. The calculation hierarchy lives in the main crate; everything the
//! calculators and the driver exchange is defined here.
//!
//! ## Modules
//!
//! - **errors**: `WorkoutError` and `ErrorCode` for dispatch failures
//! - **constants**: Unit conversions and per-workout calorie coefficients
//! - **models**: `WorkoutRecord`, `WorkoutType`, and `SummaryResult`
//! - **formatters**: Summary message rendering (text and JSON)

/// Workout dispatch errors with stable error codes
pub mod errors;

/// Unit conversions and calorie formula coefficients organized by workout
pub mod constants;

/// Core data models (records, workout types, summaries)
pub mod models;

/// Summary message formatting (localized text, JSON)
pub mod formatters;
