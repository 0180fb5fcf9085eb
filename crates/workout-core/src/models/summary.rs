// ABOUTME: Summary of metrics computed for a single workout
// ABOUTME: Produced by a calorie model and consumed by the summary formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Metrics computed for one workout, ready to be rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Display name of the workout type (e.g. `Running`)
    pub training_type: String,
    /// Workout duration in hours
    pub duration: f64,
    /// Distance covered in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories burned in kcal
    pub calories: f64,
}

impl SummaryResult {
    /// Create a new summary
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }
}
