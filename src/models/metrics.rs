// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Metrics payload shared by trackable activities, plus the workout block
//! that extends it with exercise details.
//!
//! Numeric fields are expected to be non-negative; the aggregation core does
//! not validate them (garbage in, garbage out).

use serde::{Deserialize, Serialize};

use crate::models::Exercise;

/// Common metrics recorded for any trackable activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsBlock {
    /// Duration in minutes
    #[serde(default)]
    pub duration_min: f64,
    /// Distance in kilometers
    #[serde(default)]
    pub distance_km: f64,
    /// Calories burned
    #[serde(default)]
    pub calories: f64,
    /// Pace in minutes per kilometer, when recorded on the source entry
    #[serde(default)]
    pub pace: Option<f64>,
}

impl MetricsBlock {
    /// Compute speed in km/h.
    ///
    /// A recorded pace is treated as authoritative over the raw
    /// duration/distance pair. Degenerate inputs yield 0.0.
    pub fn speed_kmh(&self) -> f64 {
        if let Some(pace) = self.pace {
            if pace > 0.0 {
                return 60.0 / pace;
            }
        }

        if self.duration_min <= 0.0 || self.distance_km <= 0.0 {
            return 0.0;
        }
        self.distance_km / (self.duration_min / 60.0)
    }

    /// Return pace in minutes per kilometer if recorded or derivable.
    ///
    /// Any non-zero recorded pace is returned unchanged, including a negative
    /// one, while `speed_kmh` ignores non-positive paces. Both treat a zero
    /// pace as absent.
    pub fn derive_pace(&self) -> Option<f64> {
        if let Some(pace) = self.pace {
            if pace != 0.0 {
                return Some(pace);
            }
        }

        if self.distance_km <= 0.0 || self.duration_min <= 0.0 {
            return None;
        }
        Some(self.duration_min / self.distance_km)
    }
}

/// Workout block: common metrics plus an ordered list of exercises.
///
/// Exercise order is the insertion order and is significant for record
/// tie-breaks (first seen wins). Exercises are appended during authoring and
/// never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutBlock {
    #[serde(flatten)]
    pub metrics: MetricsBlock,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl WorkoutBlock {
    pub fn new(metrics: MetricsBlock) -> Self {
        Self {
            metrics,
            exercises: Vec::new(),
        }
    }

    /// Append an exercise to the workout.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }
}
