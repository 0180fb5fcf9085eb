// ABOUTME: Integration tests for the running, walking, and swimming calorie models
// ABOUTME: Checks distance, mean speed, and calorie formulas against hand-computed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::calories::{CalorieModel, Running, SportsWalking, Swimming, Workout};
use workout_tracker::factory::WorkoutFactory;
use workout_tracker::models::{WorkoutRecord, WorkoutType};

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

// === Swimming ===

#[test]
fn test_swimming_sample_package() {
    let swim = WorkoutFactory::create("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

    assert_eq!(swim.workout_type(), WorkoutType::Swimming);
    assert_close(swim.mean_speed(), 1.0);
    assert_close(swim.spent_calories(), 336.0);
}

#[test]
fn test_swimming_distance_uses_stroke_length() {
    let swim = Swimming::new(WorkoutRecord::new(720, 1.0, 80.0), 25.0, 40);

    assert_close(swim.step_length(), 1.38);
    assert_close(swim.distance(), 0.9936);
}

#[test]
fn test_swimming_speed_ignores_stroke_distance() {
    // Same strokes and duration, different laps: distance fixed, speed follows laps
    let short = Swimming::new(WorkoutRecord::new(720, 2.0, 80.0), 25.0, 40);
    let long = Swimming::new(WorkoutRecord::new(720, 2.0, 80.0), 50.0, 40);

    assert_close(short.distance(), long.distance());
    assert_close(short.mean_speed(), 0.5);
    assert_close(long.mean_speed(), 1.0);
    assert!((short.mean_speed() - short.distance() / 2.0).abs() > TOLERANCE);
}

#[test]
fn test_swimming_zero_laps() {
    let swim = Swimming::new(WorkoutRecord::new(100, 1.0, 60.0), 25.0, 0);

    assert_close(swim.mean_speed(), 0.0);
    assert_close(swim.spent_calories(), 1.1 * 2.0 * 60.0);
}

// === Running ===

#[test]
fn test_running_sample_package() {
    let run = WorkoutFactory::create("RUN", &[15000.0, 1.0, 75.0]).unwrap();

    assert_close(run.distance(), 9.75);
    assert_close(run.mean_speed(), 9.75);
    // (18 * 9.75 - 20) * 75 / 1000 * 60
    assert_close(run.spent_calories(), 699.75);
}

#[test]
fn test_running_calories_increase_with_mean_speed() {
    let mut previous = f64::NEG_INFINITY;
    for action in (0..=20_000).step_by(1000) {
        let run = Running::new(WorkoutRecord::new(action, 1.5, 72.0));
        let calories = run.spent_calories();
        assert!(calories > previous, "calories must grow with speed");
        previous = calories;
    }
}

#[test]
fn test_running_half_hour() {
    let run = Running::new(WorkoutRecord::new(6000, 0.5, 60.0));

    assert_close(run.distance(), 3.9);
    assert_close(run.mean_speed(), 7.8);
    assert_close(run.spent_calories(), (18.0 * 7.8 - 20.0) * 60.0 / 1000.0 * 30.0);
}

// === Sports walking ===

#[test]
fn test_walking_sample_package() {
    let walk = WorkoutFactory::create("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

    assert_close(walk.distance(), 5.85);
    assert_close(walk.mean_speed(), 5.85);
    // 5.85² // 180 == 0, leaving only the weight term
    assert_close(walk.spent_calories(), 157.5);
}

#[test]
fn test_walking_floor_division_steps() {
    // 20 km/h: 400 // 180 == 2
    let walk = SportsWalking::new(WorkoutRecord::new(20000, 0.65, 80.0), 180.0);

    assert_close(walk.mean_speed(), 20.0);
    let expected = (0.035 * 80.0 + 2.0 * 0.029 * 80.0) * (0.65 * 60.0);
    assert_close(walk.spent_calories(), expected);
}

#[test]
fn test_walking_keeps_height() {
    let walk = SportsWalking::new(WorkoutRecord::new(1, 1.0, 70.0), 172.5);
    assert_close(walk.height(), 172.5);
    assert_eq!(walk.record().action(), 1);
}

// === Summary ===

#[test]
fn test_summary_uses_variant_formulas() {
    let workout: Workout = Swimming::new(WorkoutRecord::new(720, 1.0, 80.0), 25.0, 40).into();
    let summary = workout.summary();

    assert_eq!(summary.training_type, "Swimming");
    assert_close(summary.duration, 1.0);
    assert_close(summary.distance, 0.9936);
    assert_close(summary.speed, 1.0);
    assert_close(summary.calories, 336.0);
}

#[test]
fn test_summary_training_type_labels() {
    let run = WorkoutFactory::create("RUN", &[1.0, 1.0, 1.0]).unwrap();
    let walk = WorkoutFactory::create("WLK", &[1.0, 1.0, 1.0, 1.0]).unwrap();

    assert_eq!(run.summary().training_type, "Running");
    assert_eq!(walk.summary().training_type, "SportsWalking");
}

#[test]
fn test_zero_duration_is_not_finite() {
    let run = Running::new(WorkoutRecord::new(1000, 0.0, 70.0));
    assert!(!run.mean_speed().is_finite());
}
