// ABOUTME: Re-exports workout error types from workout-core for unified type identity
// ABOUTME: Ensures WorkoutError is the same type for the factory, packages, and the driver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::errors::*;
