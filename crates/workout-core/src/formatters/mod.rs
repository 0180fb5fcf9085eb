// ABOUTME: Output formatting for workout summaries
// ABOUTME: Renders the fixed-layout text message (English or Russian labels) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Summary Formatting
//!
//! The text message always has the same field order and units, with every
//! number printed in fixed-point notation with three decimals:
//!
//! ```text
//! Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg. speed: 9.750 km/h; Calories burned: 699.750.
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_core::formatters::{format_summary, MessageLanguage, OutputFormat};
//!
//! let line = format_summary(&summary, OutputFormat::Text, MessageLanguage::English)?;
//! ```

use serde::Serialize;
use std::fmt;

use crate::models::SummaryResult;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable message (default)
    #[default]
    Text,
    /// JSON object with the unrounded metrics
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label set used by the text message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLanguage {
    /// English labels (default)
    #[default]
    English,
    /// Russian labels
    Russian,
}

impl MessageLanguage {
    /// Parse language from string parameter (case-insensitive)
    /// Returns `English` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Self::Russian,
            _ => Self::English,
        }
    }

    /// Get the language tag as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    const fn labels(self) -> &'static MessageLabels {
        match self {
            Self::English => &ENGLISH_LABELS,
            Self::Russian => &RUSSIAN_LABELS,
        }
    }
}

impl fmt::Display for MessageLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct MessageLabels {
    training_type: &'static str,
    duration: &'static str,
    hours: &'static str,
    distance: &'static str,
    kilometers: &'static str,
    speed: &'static str,
    kilometers_per_hour: &'static str,
    calories: &'static str,
}

const ENGLISH_LABELS: MessageLabels = MessageLabels {
    training_type: "Training type",
    duration: "Duration",
    hours: "h.",
    distance: "Distance",
    kilometers: "km",
    speed: "Avg. speed",
    kilometers_per_hour: "km/h",
    calories: "Calories burned",
};

const RUSSIAN_LABELS: MessageLabels = MessageLabels {
    training_type: "Тип тренировки",
    duration: "Длительность",
    hours: "ч.",
    distance: "Дистанция",
    kilometers: "км",
    speed: "Ср. скорость",
    kilometers_per_hour: "км/ч",
    calories: "Потрачено ккал",
};

/// Renders summaries as single-line messages
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter {
    language: MessageLanguage,
}

impl SummaryFormatter {
    /// Create a formatter using the given label set
    #[must_use]
    pub const fn new(language: MessageLanguage) -> Self {
        Self { language }
    }

    /// Label set used by this formatter
    #[must_use]
    pub const fn language(&self) -> MessageLanguage {
        self.language
    }

    /// Render a summary with three-decimal fixed-point numbers
    #[must_use]
    pub fn format(&self, result: &SummaryResult) -> String {
        let labels = self.language.labels();
        format!(
            "{}: {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3}.",
            labels.training_type,
            result.training_type,
            labels.duration,
            result.duration,
            labels.hours,
            labels.distance,
            result.distance,
            labels.kilometers,
            labels.speed,
            result.speed,
            labels.kilometers_per_hour,
            labels.calories,
            result.calories,
        )
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Render a summary in the requested output format
///
/// `language` only affects the text message; JSON keys are fixed.
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_summary(
    result: &SummaryResult,
    format: OutputFormat,
    language: MessageLanguage,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(SummaryFormatter::new(language).format(result)),
        OutputFormat::Json => serde_json::to_string(result).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_labels_match_layout() {
        let summary = SummaryResult::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        let line = SummaryFormatter::new(MessageLanguage::Russian).format(&summary);
        assert_eq!(
            line,
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_language_param_fallback() {
        assert_eq!(MessageLanguage::from_str_param("RU"), MessageLanguage::Russian);
        assert_eq!(MessageLanguage::from_str_param("de"), MessageLanguage::English);
    }
}
