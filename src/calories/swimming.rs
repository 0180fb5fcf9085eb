// ABOUTME: Swimming calorie model with pool-lap based mean speed
// ABOUTME: Overrides the step length and replaces the distance/duration speed formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CalorieModel;
use crate::constants::{stride, swimming, units};
use crate::models::{WorkoutRecord, WorkoutType};

/// Pool swimming workout
///
/// Mean speed comes from the laps swum, not from the stroke distance:
/// `length_pool x count_pool / 1000 / duration`. `distance()` still uses the
/// stroke count with a 1.38 m stroke length.
///
/// Formula: `(mean_speed + 1.1) x 2 x weight`
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    /// Create a swimming workout from its raw record, pool length (m) and lap count
    #[must_use]
    pub const fn new(record: WorkoutRecord, length_pool: f64, count_pool: u32) -> Self {
        Self {
            record,
            length_pool,
            count_pool,
        }
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl CalorieModel for Swimming {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn step_length(&self) -> f64 {
        stride::SWIM_STROKE_LENGTH_M
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / units::METERS_IN_KM
            / self.record.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + swimming::SPEED_SHIFT)
            * swimming::WEIGHT_MULTIPLIER
            * self.record.weight()
    }
}
