// ABOUTME: Re-exports summary formatters from workout-core
// ABOUTME: Text message rendering (English/Russian labels) and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::formatters::*;
