// ABOUTME: Running calorie model using the step-count distance formula
// ABOUTME: Calories scale with mean speed, athlete weight, and workout minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CalorieModel;
use crate::constants::{running, units};
use crate::models::{WorkoutRecord, WorkoutType};

/// Running workout
///
/// Formula: `(18 x mean_speed - 20) x weight / 1000 x duration_minutes`
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    /// Create a running workout from its raw record
    #[must_use]
    pub const fn new(record: WorkoutRecord) -> Self {
        Self { record }
    }
}

impl CalorieModel for Running {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn spent_calories(&self) -> f64 {
        let duration_minutes = self.record.duration() * units::MINUTES_IN_HOUR;
        (running::SPEED_MULTIPLIER * self.mean_speed() - running::SPEED_SHIFT)
            * self.record.weight()
            / units::METERS_IN_KM
            * duration_minutes
    }
}
