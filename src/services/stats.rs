// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport statistics builder.
//!
//! Handles the core workflow:
//! 1. Filter entries to the configured channel and optional date window
//! 2. Sum calorie and distance totals
//! 3. Aggregate personal records over the filtered set
//! 4. Resolve the reporting window and assemble the summary

use chrono::{Local, NaiveDate};

use crate::config::StatsConfig;
use crate::models::{PersonalRecords, SportStats, WorkoutEntry};

/// Build period-bounded sport summaries for one configured channel.
pub struct StatsBuilder {
    config: StatsConfig,
}

impl StatsBuilder {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Channel this builder aggregates.
    pub fn channel(&self) -> &str {
        &self.config.sport_channel
    }

    /// Build a summary over `entries`, optionally bounded by `start`/`end`
    /// (both inclusive).
    ///
    /// Explicit bounds are preserved in the result even when no entries fall
    /// inside them. Without bounds the window spans the observed entry days,
    /// or collapses to today's date when nothing matches.
    pub fn build<'a>(
        &self,
        entries: &'a [WorkoutEntry],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> SportStats<'a> {
        let filtered: Vec<&WorkoutEntry> = entries
            .iter()
            .filter(|entry| entry.channel == self.config.sport_channel)
            .filter(|entry| start.is_none_or(|s| entry.day >= s))
            .filter(|entry| end.is_none_or(|e| entry.day <= e))
            .collect();

        let total_calories: f64 = filtered.iter().map(|e| e.workout.metrics.calories).sum();
        let total_distance_km: f64 = filtered
            .iter()
            .map(|e| e.workout.metrics.distance_km)
            .sum();

        let records =
            PersonalRecords::compute(&self.config.sport_channel, filtered.iter().copied());

        let from_date = start
            .or_else(|| filtered.iter().map(|e| e.day).min())
            .unwrap_or_else(|| Local::now().date_naive());
        let to_date = end
            .or_else(|| filtered.iter().map(|e| e.day).max())
            .unwrap_or(from_date);

        tracing::debug!(
            channel = %self.config.sport_channel,
            matched = filtered.len(),
            %from_date,
            %to_date,
            "Built sport stats"
        );

        SportStats {
            from_date,
            to_date,
            total_calories,
            total_distance_km,
            records,
        }
    }
}
