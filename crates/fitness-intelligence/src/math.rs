// ABOUTME: Numeric helpers shared by the analyzers: decimal rounding, mean and dispersion
// ABOUTME: Rounding is half away from zero and applied once per returned value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round to one decimal
#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimals
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to three decimals
#[must_use]
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation, `None` below two values
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}
