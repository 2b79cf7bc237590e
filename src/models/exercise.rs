// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise model for strength work within a workout.

use serde::{Deserialize, Serialize};

/// Single exercise performed in a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name (e.g. "Bench Press")
    pub name: String,
    /// Number of sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Working weight in kilograms (0 for bodyweight movements)
    pub weight: f64,
}

impl Exercise {
    /// Total number of repetitions across all sets.
    pub fn total_reps(&self) -> u32 {
        self.sets * self.reps
    }
}
