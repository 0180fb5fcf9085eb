// ABOUTME: Error types raised while dispatching raw sensor data to a workout model
// ABOUTME: Provides WorkoutError with stable error codes and a crate-wide result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Error Types
//!
//! Both error kinds are raised at dispatch time, before any calculation runs.
//! Numeric ranges are never validated here: a zero duration or height is an
//! unchecked precondition of the calorie models, not an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error codes for workout dispatch failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Workout code is not one of the recognized codes
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 3100,
    /// Number of sensor values does not match the workout's fields
    #[serde(rename = "INVALID_ARGUMENT_COUNT")]
    InvalidArgumentCount = 3101,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "The workout type code is not recognized",
            Self::InvalidArgumentCount => {
                "The number of sensor values does not match the workout type"
            }
        }
    }

    /// Get the wire name of this error code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "UNKNOWN_WORKOUT_TYPE",
            Self::InvalidArgumentCount => "INVALID_ARGUMENT_COUNT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while turning a raw sensor package into a workout model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkoutError {
    /// The workout code does not match any known workout type
    #[error("Unknown workout type: '{code}'. Valid options: SWM, RUN, WLK")]
    UnknownWorkoutType {
        /// The offending code as received
        code: String,
    },

    /// The sensor package has the wrong number of values for its workout type
    #[error("Invalid argument count for {workout_type}: expected {expected} values, got {actual}")]
    InvalidArgumentCount {
        /// Display name of the resolved workout type
        workout_type: &'static str,
        /// Number of values the workout type requires
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
}

impl WorkoutError {
    /// Create an "unknown workout type" error
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType { code: code.into() }
    }

    /// Create an "invalid argument count" error
    #[must_use]
    pub const fn invalid_argument_count(
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::InvalidArgumentCount {
            workout_type,
            expected,
            actual,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownWorkoutType { .. } => ErrorCode::UnknownWorkoutType,
            Self::InvalidArgumentCount { .. } => ErrorCode::InvalidArgumentCount,
        }
    }
}

/// Result alias for workout dispatch operations
pub type WorkoutResult<T> = Result<T, WorkoutError>;
