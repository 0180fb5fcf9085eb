// ABOUTME: Core data models for the workout tracker
// ABOUTME: Re-exports WorkoutRecord, WorkoutType, and SummaryResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutRecord`: raw sensor fields shared by every workout
//! - `WorkoutType`: workout code lookup (`SWM`, `RUN`, `WLK`)
//! - `SummaryResult`: metrics computed for one workout

mod summary;
mod workout;

pub use summary::SummaryResult;
pub use workout::{WorkoutRecord, WorkoutType};
