// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregated sport statistics for a reporting period.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::models::PersonalRecords;

/// Period-bounded summary of sport activity.
///
/// Valid only for the entries and date window it was built from; build a
/// fresh one per request rather than caching.
#[derive(Debug)]
pub struct SportStats<'a> {
    /// Start of the reporting window (inclusive)
    pub from_date: NaiveDate,
    /// End of the reporting window (inclusive)
    pub to_date: NaiveDate,
    /// Calories summed over the window
    pub total_calories: f64,
    /// Distance summed over the window (km)
    pub total_distance_km: f64,
    /// Personal bests observed inside the window
    pub records: PersonalRecords<'a>,
}

impl SportStats<'_> {
    /// Serializable representation for presentation layers.
    ///
    /// Dates are ISO-8601 strings. Key names are stable; downstream widgets
    /// consume this payload as-is.
    pub fn to_json(&self) -> Value {
        json!({
            "from": self.from_date.to_string(),
            "to": self.to_date.to_string(),
            "total_calories": self.total_calories,
            "total_distance_km": self.total_distance_km,
            "records": self.records.to_json(),
        })
    }
}
