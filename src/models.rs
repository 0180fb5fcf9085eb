// ABOUTME: Re-exports workout data models from workout-core
// ABOUTME: WorkoutRecord, WorkoutType, and SummaryResult shared by models and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::models::*;
