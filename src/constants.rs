// ABOUTME: Re-exports calorie coefficients and unit conversions from workout-core
// ABOUTME: Constants are defined once in the core crate and shared by every model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::constants::*;
