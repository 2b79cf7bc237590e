// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - aggregation logic layer.

pub mod stats;

pub use stats::StatsBuilder;
