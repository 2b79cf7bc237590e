// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use sport_stats::models::{Exercise, MetricsBlock, WorkoutBlock, WorkoutEntry};

/// Channel under aggregation in the fixtures.
pub const SPORT_CHANNEL: &str = "Sport";

/// A channel that must always be excluded from aggregation.
#[allow(dead_code)]
pub const OTHER_CHANNEL: &str = "Music";

#[allow(dead_code)]
pub fn day(date: &str) -> NaiveDate {
    date.parse().expect("valid test date")
}

#[allow(dead_code)]
pub fn exercise(name: &str, sets: u32, reps: u32, weight: f64) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps,
        weight,
    }
}

/// Two sport workouts plus one entry on another channel:
/// - 2024-01-10: 30 min / 5 km / 350 kcal, Bench Press 3x10 @ 60 kg
/// - 2024-01-20: 45 min / 8 km / 550 kcal, Squat 5x5 @ 100 kg, Pull-up 4x8
/// - 2024-01-25: first workout again, on the excluded channel
#[allow(dead_code)]
pub fn sample_entries() -> Vec<WorkoutEntry> {
    let mut workout1 = WorkoutBlock::new(MetricsBlock {
        duration_min: 30.0,
        distance_km: 5.0,
        calories: 350.0,
        pace: None,
    });
    workout1.add_exercise(exercise("Bench Press", 3, 10, 60.0));

    let mut workout2 = WorkoutBlock::new(MetricsBlock {
        duration_min: 45.0,
        distance_km: 8.0,
        calories: 550.0,
        pace: None,
    });
    workout2.add_exercise(exercise("Squat", 5, 5, 100.0));
    workout2.add_exercise(exercise("Pull-up", 4, 8, 0.0));

    vec![
        WorkoutEntry {
            channel: SPORT_CHANNEL.to_string(),
            day: day("2024-01-10"),
            workout: workout1.clone(),
        },
        WorkoutEntry {
            channel: SPORT_CHANNEL.to_string(),
            day: day("2024-01-20"),
            workout: workout2,
        },
        WorkoutEntry {
            channel: OTHER_CHANNEL.to_string(),
            day: day("2024-01-25"),
            workout: workout1,
        },
    ]
}
