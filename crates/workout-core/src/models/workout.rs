// ABOUTME: Raw workout record and workout type enumeration
// ABOUTME: Maps sensor package codes (SWM, RUN, WLK) to workout types with their field counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::codes;
use crate::errors::WorkoutError;

/// Raw sensor fields common to every workout
///
/// Immutable once constructed. The calorie models divide by `duration`, so it
/// must be positive; this is a caller precondition and is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    action: u32,
    duration: f64,
    weight: f64,
}

impl WorkoutRecord {
    /// Create a record from the step/stroke count, duration (hours) and weight (kg)
    #[must_use]
    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Number of steps or strokes
    #[must_use]
    pub const fn action(&self) -> u32 {
        self.action
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// Workout types a sensor package can describe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Pool swimming: action, duration, weight, `length_pool`, `count_pool`
    Swimming,
    /// Running: action, duration, weight
    Running,
    /// Sports walking: action, duration, weight, height
    Walking,
}

impl WorkoutType {
    /// All workout types in package-code lookup order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// Package code identifying this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Swimming => codes::SWIMMING,
            Self::Running => codes::RUNNING,
            Self::Walking => codes::WALKING,
        }
    }

    /// Name shown as the training type in summaries
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
        }
    }

    /// Number of positional sensor values this workout type requires
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::Walking => 4,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    /// Resolve a package code; matching is exact and case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|workout_type| workout_type.code() == s)
            .ok_or_else(|| WorkoutError::unknown_workout_type(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve_to_workout_types() {
        assert_eq!("SWM".parse::<WorkoutType>(), Ok(WorkoutType::Swimming));
        assert_eq!("RUN".parse::<WorkoutType>(), Ok(WorkoutType::Running));
        assert_eq!("WLK".parse::<WorkoutType>(), Ok(WorkoutType::Walking));
    }

    #[test]
    fn test_code_lookup_is_case_sensitive() {
        assert_eq!(
            "run".parse::<WorkoutType>(),
            Err(WorkoutError::unknown_workout_type("run"))
        );
        assert!(" RUN".parse::<WorkoutType>().is_err());
    }

    #[test]
    fn test_code_round_trips_through_lookup() {
        for workout_type in WorkoutType::ALL {
            assert_eq!(workout_type.code().parse::<WorkoutType>(), Ok(workout_type));
        }
    }

    #[test]
    fn test_display_uses_training_type_label() {
        assert_eq!(WorkoutType::Walking.to_string(), "SportsWalking");
        assert_eq!(WorkoutType::Swimming.arity(), 5);
    }
}
