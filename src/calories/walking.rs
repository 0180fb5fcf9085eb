// ABOUTME: Sports walking calorie model with the height-dependent speed term
// ABOUTME: Uses floor division of squared speed by height, matching the reference formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CalorieModel;
use crate::constants::{units, walking};
use crate::models::{WorkoutRecord, WorkoutType};

/// Sports walking workout
///
/// Formula: `(0.035 x weight + (mean_speed² // height) x 0.029 x weight) x duration_minutes`
///
/// The speed/height term uses floor division, so it stays zero until the
/// squared speed reaches the height. `height` must be non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,
    height: f64,
}

impl SportsWalking {
    /// Create a walking workout from its raw record and athlete height (cm)
    #[must_use]
    pub const fn new(record: WorkoutRecord, height: f64) -> Self {
        Self { record, height }
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl CalorieModel for SportsWalking {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Walking
    }

    fn spent_calories(&self) -> f64 {
        let duration_minutes = self.record.duration() * units::MINUTES_IN_HOUR;
        let weight = self.record.weight();
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (walking::WEIGHT_MULTIPLIER * weight
            + speed_term * walking::SPEED_HEIGHT_MULTIPLIER * weight)
            * duration_minutes
    }
}

/// Floating-point floor division
///
/// Derived from the remainder rather than `(x / y).floor()`, which can round
/// up across an integer boundary when the quotient is inexact. A zero divisor
/// produces NaN.
#[allow(clippy::float_cmp)] // Exact zero tests on remainder and quotient
fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && ((divisor < 0.0) != (remainder < 0.0)) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_truncates_toward_negative_infinity() {
        assert!((floor_div(34.2225, 180.0) - 0.0).abs() < f64::EPSILON);
        assert!((floor_div(225.0, 180.0) - 1.0).abs() < f64::EPSILON);
        assert!((floor_div(-1.0, 180.0) + 1.0).abs() < f64::EPSILON);
        assert!((floor_div(7.5, 2.5) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_div_does_not_round_up_inexact_quotient() {
        // 1.0 / 0.1 rounds to 10.0, but 0.1 is slightly above one tenth
        assert!((floor_div(1.0, 0.1) - 9.0).abs() < f64::EPSILON);
        assert!(((1.0_f64 / 0.1).floor() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_div_by_zero_is_not_finite() {
        assert!(floor_div(34.2225, 0.0).is_nan());
    }

    #[test]
    fn test_speed_term_kicks_in_at_height() {
        // 23076.92... steps at 0.65 m is 15 km in one hour; 15² = 225 >= 180
        let walk = SportsWalking::new(WorkoutRecord::new(23077, 1.0, 75.0), 180.0);
        let base_only = 0.035 * 75.0 * 60.0;
        let with_term = (0.035 * 75.0 + 0.029 * 75.0) * 60.0;
        assert!(walk.mean_speed() > 15.0);
        assert!((walk.spent_calories() - with_term).abs() < 1e-9);
        assert!(walk.spent_calories() > base_only);
    }
}
