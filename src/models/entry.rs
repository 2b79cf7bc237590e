// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout entry bound to a channel and calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::WorkoutBlock;

/// Concrete workout instance tagged with its channel and date.
///
/// Immutable once constructed; a workout belongs to exactly one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Channel name the entry was recorded under
    pub channel: String,
    /// Calendar day of the workout
    pub day: NaiveDate,
    /// The workout itself
    pub workout: WorkoutBlock,
}
