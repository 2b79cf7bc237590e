// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personal record aggregation over workout entries.
//!
//! Records are recomputed from scratch on every call with a single pass over
//! the input, in input order. The scanned entries are never mutated.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{Exercise, WorkoutBlock, WorkoutEntry};

/// Peak values observed across a scanned set of workout entries.
///
/// `best_weight` and `best_reps` borrow the winning exercises from the
/// scanned entries rather than copying them; the records are therefore only
/// valid while the source entries are alive.
#[derive(Debug, Default)]
pub struct PersonalRecords<'a> {
    /// Exercise with the highest working weight
    pub best_weight: Option<&'a Exercise>,
    /// Exercise with the highest total repetitions
    pub best_reps: Option<&'a Exercise>,
    /// Longest distance in a single workout (km)
    pub best_distance_km: f64,
    /// Highest speed in a single workout (km/h)
    pub best_speed_kmh: f64,
}

impl<'a> PersonalRecords<'a> {
    /// Aggregate personal bests for one channel.
    ///
    /// Entries on other channels are skipped entirely. The scan runs in input
    /// order with strict greater-than comparisons, so on a tie the earliest
    /// occurrence is retained.
    pub fn compute<I>(channel: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a WorkoutEntry>,
    {
        let mut records = Self::default();

        for entry in entries {
            if entry.channel != channel {
                continue;
            }
            records.observe(&entry.workout);
        }

        records
    }

    /// Fold one workout block into the running maxima.
    fn observe(&mut self, workout: &'a WorkoutBlock) {
        if workout.metrics.distance_km > self.best_distance_km {
            self.best_distance_km = workout.metrics.distance_km;
        }

        let speed = workout.metrics.speed_kmh();
        if speed > self.best_speed_kmh {
            self.best_speed_kmh = speed;
        }

        for exercise in &workout.exercises {
            if self
                .best_weight
                .is_none_or(|best| exercise.weight > best.weight)
            {
                self.best_weight = Some(exercise);
            }

            let total_reps = exercise.total_reps();
            if self
                .best_reps
                .is_none_or(|best| total_reps > best.total_reps())
            {
                self.best_reps = Some(exercise);
            }
        }
    }

    /// Serializable representation for presentation layers.
    ///
    /// Absent bests serialize as `null`; present ones as
    /// `{name, sets, reps, weight, total_reps}`.
    pub fn to_json(&self) -> Value {
        json!({
            "best_weight": self.best_weight.map(ExerciseSnapshot::from),
            "best_reps": self.best_reps.map(ExerciseSnapshot::from),
            "best_distance_km": self.best_distance_km,
            "best_speed_kmh": self.best_speed_kmh,
        })
    }
}

/// Serializable view of an exercise, including its derived total.
#[derive(Debug, Serialize)]
pub struct ExerciseSnapshot<'a> {
    pub name: &'a str,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub total_reps: u32,
}

impl<'a> From<&'a Exercise> for ExerciseSnapshot<'a> {
    fn from(exercise: &'a Exercise) -> Self {
        Self {
            name: &exercise.name,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
            total_reps: exercise.total_reps(),
        }
    }
}
