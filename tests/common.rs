// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Builds ordered daily observation sequences and float comparison helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `fitness_metrics`

use fitness_metrics::models::Observation;

/// Milliseconds per day
pub const DAY_MS: i64 = 86_400_000;

/// 2024-01-01T00:00:00Z
pub const BASE_TIMESTAMP_MS: i64 = 1_704_067_200_000;

/// One observation per day starting at `start_ms`
pub fn daily_from(values: &[f64], start_ms: i64) -> Vec<Observation> {
    values
        .iter()
        .zip(0_i64..)
        .map(|(&value, day)| Observation {
            subject_id: 1,
            value,
            timestamp_ms: start_ms + day * DAY_MS,
        })
        .collect()
}

/// One observation per day starting at [`BASE_TIMESTAMP_MS`]
pub fn daily(values: &[f64]) -> Vec<Observation> {
    daily_from(values, BASE_TIMESTAMP_MS)
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linear_values(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| (i as f64).mul_add(step, start)).collect()
}

/// `n` daily observations descending/ascending linearly from `start` to `end`
pub fn linear_series(start: f64, end: f64, n: usize) -> Vec<Observation> {
    daily(&linear_values(start, end, n))
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
