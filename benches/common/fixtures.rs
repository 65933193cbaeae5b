// ABOUTME: Benchmark fixtures for generating reproducible weight logs and lift attempts
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for weight logs and working sets.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{TimeZone, Utc};
use fitness_metrics::models::{LiftAttempt, Observation};
use fitness_metrics::synthetic::SyntheticWeightGenerator;

/// Seed shared by every fixture
const BENCH_SEED: u64 = 42;

/// Predefined series lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SeriesSize {
    /// One month of daily readings
    Month,
    /// One year of daily readings
    Year,
    /// Ten years of daily readings
    Decade,
}

impl SeriesSize {
    pub const ALL: [Self; 3] = [Self::Month, Self::Year, Self::Decade];

    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::Decade => 3650,
        }
    }
}

/// Daily weight log drifting from 95 kg toward 80 kg
#[must_use]
pub fn weight_log(size: SeriesSize) -> Vec<Observation> {
    let end = Utc
        .with_ymd_and_hms(2025, 6, 30, 7, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    SyntheticWeightGenerator::new(BENCH_SEED).weight_loss_trend(95.0, 80.0, size.days(), end)
}

/// `count` working sets cycling through loads and rep ranges
#[must_use]
pub fn lift_attempts(count: u32) -> Vec<LiftAttempt> {
    (0..count)
        .filter_map(|index| {
            let weight = 40.0 + f64::from(index % 120);
            let reps = 1 + index % 15;
            let previous_volume = f64::from(index % 7) * 250.0;
            LiftAttempt::new(weight, reps, 80.0, previous_volume).ok()
        })
        .collect()
}
