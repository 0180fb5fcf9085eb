// ABOUTME: Constants module with per-workout calorie coefficients and unit conversions
// ABOUTME: Pure data constants consumed by the calorie model implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Coefficients are grouped by workout so that each calorie formula reads its
//! numbers from one place.

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_IN_KM: f64 = 1000.0;
    /// Minutes in one hour
    pub const MINUTES_IN_HOUR: f64 = 60.0;
}

/// Step length shared by workouts that do not override it
pub mod stride {
    /// Default distance covered by one step, in meters
    pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;
    /// Distance covered by one swimming stroke, in meters
    pub const SWIM_STROKE_LENGTH_M: f64 = 1.38;
}

/// Running calorie formula: `(18 * speed - 20) * weight / 1000 * minutes`
pub mod running {
    /// Multiplier applied to mean speed
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie formula:
/// `(0.035 * weight + (speed² // height) * 0.029 * weight) * minutes`
pub mod walking {
    /// Weight coefficient of the base term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight coefficient of the speed/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula: `(speed + 1.1) * 2 * weight`
pub mod swimming {
    /// Offset added to mean speed
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Workout codes carried by raw sensor packages
pub mod codes {
    /// Swimming package code
    pub const SWIMMING: &str = "SWM";
    /// Running package code
    pub const RUNNING: &str = "RUN";
    /// Sports walking package code
    pub const WALKING: &str = "WLK";
}
