// ABOUTME: Sensor package sources and batch processing for the workout tracker
// ABOUTME: Provides the built-in sample packages, JSON package loading, and summary computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensor Packages
//!
//! A package file is a JSON array whose entries are either objects or
//! `[code, values]` pairs:
//!
//! ```json
//! [
//!   {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]},
//!   ["RUN", [15000, 1, 75]]
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::calories::CalorieModel;
use crate::constants::codes;
use crate::errors::{WorkoutError, WorkoutResult};
use crate::factory::WorkoutFactory;
use crate::models::SummaryResult;

/// One raw reading from the sensors: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPackage")]
pub struct SensorPackage {
    /// Workout code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional sensor values
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a code and its values
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPackage {
    Object { workout_type: String, data: Vec<f64> },
    Pair(String, Vec<f64>),
}

impl From<RawPackage> for SensorPackage {
    fn from(raw: RawPackage) -> Self {
        match raw {
            RawPackage::Object { workout_type, data } | RawPackage::Pair(workout_type, data) => {
                Self { workout_type, data }
            }
        }
    }
}

/// Errors raised while reading sensor packages
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    /// The package file could not be read
    #[error("Failed to read package file {}", .path.display())]
    Io {
        /// Path of the package file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The package file is not a valid JSON package list
    #[error("Invalid package data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Packages processed when no input file is given
#[must_use]
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new(codes::SWIMMING, vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new(codes::RUNNING, vec![15000.0, 1.0, 75.0]),
        SensorPackage::new(codes::WALKING, vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON package list
///
/// # Errors
///
/// Returns `PackageError::Parse` if the input is not a JSON array of packages
pub fn parse_packages(json: &str) -> Result<Vec<SensorPackage>, PackageError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON package file
///
/// # Errors
///
/// Returns `PackageError::Io` if the file cannot be read and
/// `PackageError::Parse` if its content is not a package list
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>, PackageError> {
    let json = fs::read_to_string(path).map_err(|source| PackageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let packages = parse_packages(&json)?;
    debug!(path = %path.display(), count = packages.len(), "Loaded sensor packages");
    Ok(packages)
}

/// Build the package's workout and compute its summary
///
/// # Errors
///
/// Returns the factory's `WorkoutError` for unknown codes or wrong value counts
pub fn process_package(package: &SensorPackage) -> WorkoutResult<SummaryResult> {
    let workout = WorkoutFactory::create(&package.workout_type, &package.data)?;
    Ok(workout.summary())
}

/// Describe why a package was rejected, for error reports
///
/// Names the package position and code along with the error code's description.
#[must_use]
pub fn rejection_context(index: usize, package: &SensorPackage, error: &WorkoutError) -> String {
    format!(
        "Sensor package #{index} ({}) rejected: {}",
        package.workout_type,
        error.code().description()
    )
}

/// Compute summaries for every package, in order
///
/// Stops at the first package that fails to dispatch.
///
/// # Errors
///
/// Returns the first `WorkoutError` encountered
pub fn process_all(packages: &[SensorPackage]) -> WorkoutResult<Vec<SummaryResult>> {
    let summaries = packages
        .iter()
        .map(process_package)
        .collect::<WorkoutResult<Vec<_>>>()?;
    info!(count = summaries.len(), "Processed sensor packages");
    Ok(summaries)
}
