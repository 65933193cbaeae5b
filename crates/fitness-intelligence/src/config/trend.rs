// ABOUTME: Trend analysis configuration for moving averages, regression and forecasting
// ABOUTME: Window sizes, classification band, data sufficiency thresholds and numeric tolerances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fitness_core::constants::{safety, statistics};
use serde::{Deserialize, Serialize};

/// Trend analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysisConfig {
    /// Short moving average window (observations)
    pub short_window: usize,
    /// Long moving average window (observations)
    pub long_window: usize,
    /// Half-width of the maintaining band (kg/week)
    pub trend_threshold_kg_per_week: f64,
    /// Observations needed before a trend label is assigned
    pub min_points_for_trend: usize,
    /// Observations needed before forecasting
    pub min_points_for_prediction: usize,
    /// Forecast horizon used by the engine (days)
    pub forecast_horizon_days: u32,
    /// Regression denominators below this yield a zero slope
    pub regression_epsilon: f64,
    /// Daily rates below this mean no momentum toward a goal
    pub momentum_epsilon: f64,
    /// Fastest safe loss (kg/week)
    pub safe_loss_kg_per_week: f64,
    /// Fastest safe gain (kg/week)
    pub safe_gain_kg_per_week: f64,
}

impl Default for TrendAnalysisConfig {
    fn default() -> Self {
        Self {
            short_window: statistics::MOVING_AVERAGE_SHORT_WINDOW,
            long_window: statistics::MOVING_AVERAGE_LONG_WINDOW,
            trend_threshold_kg_per_week: statistics::TREND_THRESHOLD_KG_PER_WEEK,
            min_points_for_trend: statistics::MIN_DATA_POINTS_FOR_TREND,
            min_points_for_prediction: statistics::MIN_DATA_POINTS_FOR_PREDICTION,
            forecast_horizon_days: statistics::FORECAST_HORIZON_DAYS,
            regression_epsilon: statistics::REGRESSION_EPSILON,
            momentum_epsilon: statistics::MOMENTUM_EPSILON,
            safe_loss_kg_per_week: safety::SAFE_WEIGHT_LOSS_MAX_KG_PER_WEEK,
            safe_gain_kg_per_week: safety::SAFE_WEIGHT_GAIN_MAX_KG_PER_WEEK,
        }
    }
}

impl TrendAnalysisConfig {
    /// Validate window ordering and positive tolerances
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a window is zero, windows are out of order,
    /// or a threshold is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_window == 0 || self.long_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Moving average windows must be at least 1",
            ));
        }
        if self.short_window > self.long_window {
            return Err(ConfigError::InvalidRange(
                "short_window must be <= long_window",
            ));
        }
        if self.min_points_for_trend < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_points_for_trend must be at least 2",
            ));
        }
        if self.min_points_for_trend > self.min_points_for_prediction {
            return Err(ConfigError::InvalidRange(
                "min_points_for_trend must be <= min_points_for_prediction",
            ));
        }
        let positives = [
            self.trend_threshold_kg_per_week,
            self.regression_epsilon,
            self.momentum_epsilon,
            self.safe_loss_kg_per_week,
            self.safe_gain_kg_per_week,
        ];
        if positives.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Trend thresholds and tolerances must be positive",
            ));
        }
        Ok(())
    }
}
