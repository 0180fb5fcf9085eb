// ABOUTME: Factory turning raw sensor packages into calorie models
// ABOUTME: Resolves the workout code first, then checks the positional value count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Factory
//!
//! A sensor package is a workout code plus an ordered list of numbers:
//!
//! | Code  | Workout         | Values                                              |
//! |-------|-----------------|-----------------------------------------------------|
//! | `SWM` | `Swimming`      | action, duration, weight, `length_pool`, `count_pool` |
//! | `RUN` | `Running`       | action, duration, weight                            |
//! | `WLK` | `SportsWalking` | action, duration, weight, height                    |
//!
//! Integer fields (`action`, `count_pool`) are converted with a saturating
//! cast: fractions are dropped and negative values become zero. No other
//! range checks are made.

use tracing::debug;

use crate::calories::{Running, SportsWalking, Swimming, Workout};
use crate::errors::{WorkoutError, WorkoutResult};
use crate::models::{WorkoutRecord, WorkoutType};

/// Builds workouts from sensor packages
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutFactory;

impl WorkoutFactory {
    /// Create the workout described by a package code and its values
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::UnknownWorkoutType` if `code` is not `SWM`, `RUN`
    /// or `WLK`; nothing is constructed in that case.
    ///
    /// Returns `WorkoutError::InvalidArgumentCount` if `data` does not have
    /// exactly the number of values the resolved workout type requires.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use workout_tracker::calories::CalorieModel;
    /// use workout_tracker::factory::WorkoutFactory;
    ///
    /// let swim = WorkoutFactory::create("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
    /// assert!((swim.mean_speed() - 1.0).abs() < 1e-9);
    /// # Ok::<(), workout_tracker::errors::WorkoutError>(())
    /// ```
    pub fn create(code: &str, data: &[f64]) -> WorkoutResult<Workout> {
        let workout_type: WorkoutType = code.parse()?;
        Self::build(workout_type, data)
    }

    /// Create a workout of an already resolved type
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::InvalidArgumentCount` if `data` has the wrong length
    pub fn build(workout_type: WorkoutType, data: &[f64]) -> WorkoutResult<Workout> {
        let workout = match (workout_type, data) {
            (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
                Swimming::new(
                    WorkoutRecord::new(action as u32, duration, weight),
                    length_pool,
                    count_pool as u32,
                )
                .into()
            }
            (WorkoutType::Running, &[action, duration, weight]) => {
                Running::new(WorkoutRecord::new(action as u32, duration, weight)).into()
            }
            (WorkoutType::Walking, &[action, duration, weight, height]) => SportsWalking::new(
                WorkoutRecord::new(action as u32, duration, weight),
                height,
            )
            .into(),
            (workout_type, data) => {
                return Err(WorkoutError::invalid_argument_count(
                    workout_type.display_name(),
                    workout_type.arity(),
                    data.len(),
                ));
            }
        };

        debug!(
            workout.code = workout_type.code(),
            workout.values = data.len(),
            "Built {workout_type} workout"
        );
        Ok(workout)
    }
}
