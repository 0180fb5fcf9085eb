// ABOUTME: Calorie model contract and the tagged union over the supported workouts
// ABOUTME: Provides default distance and mean speed formulas shared by every workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Models
//!
//! Every workout implements [`CalorieModel`]. Distance and mean speed have
//! default formulas driven by the workout's step length; calorie expenditure
//! has no sensible default and must be provided by each implementer.
//!
//! [`Workout`] is the enum the factory hands out. It delegates to the concrete
//! model, so callers never match on the variant themselves.
//!
//! # Example
//!
//! ```rust,no_run
//! use workout_tracker::calories::{CalorieModel, Running};
//! use workout_tracker::models::WorkoutRecord;
//!
//! let run = Running::new(WorkoutRecord::new(15000, 1.0, 75.0));
//! assert!((run.distance() - 9.75).abs() < 1e-9);
//! ```

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::constants::{stride, units};
use crate::models::{SummaryResult, WorkoutRecord, WorkoutType};

/// Distance, speed and calorie formulas for one workout
///
/// Implementers must ensure `record().duration()` is positive before calling
/// `mean_speed()`; a zero duration yields a non-finite speed.
pub trait CalorieModel {
    /// Raw sensor fields of this workout
    fn record(&self) -> &WorkoutRecord;

    /// Workout type used for the summary label
    fn workout_type(&self) -> WorkoutType;

    /// Distance covered by one step or stroke, in meters
    fn step_length(&self) -> f64 {
        stride::DEFAULT_STEP_LENGTH_M
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.record().action()) * self.step_length() / units::METERS_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.record().duration()
    }

    /// Calories burned in kcal
    fn spent_calories(&self) -> f64;

    /// Collect the computed metrics into a summary
    fn summary(&self) -> SummaryResult {
        SummaryResult::new(
            self.workout_type().display_name(),
            self.record().duration(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// A workout built from a sensor package
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    /// Pool swimming
    Swimming(Swimming),
    /// Running
    Running(Running),
    /// Sports walking
    Walking(SportsWalking),
}

impl Workout {
    fn model(&self) -> &dyn CalorieModel {
        match self {
            Self::Swimming(swimming) => swimming,
            Self::Running(running) => running,
            Self::Walking(walking) => walking,
        }
    }
}

impl CalorieModel for Workout {
    fn record(&self) -> &WorkoutRecord {
        self.model().record()
    }

    fn workout_type(&self) -> WorkoutType {
        self.model().workout_type()
    }

    fn step_length(&self) -> f64 {
        self.model().step_length()
    }

    fn distance(&self) -> f64 {
        self.model().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.model().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.model().spent_calories()
    }

    fn summary(&self) -> SummaryResult {
        self.model().summary()
    }
}

impl From<Swimming> for Workout {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}

impl From<Running> for Workout {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for Workout {
    fn from(walking: SportsWalking) -> Self {
        Self::Walking(walking)
    }
}
