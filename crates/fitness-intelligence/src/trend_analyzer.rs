// ABOUTME: Body-weight trend analysis over ordered observation sequences
// ABOUTME: Moving averages, least-squares rate of change, trend labels, forecasts and goal ETA
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend Analyzer
//!
//! All operations are pure functions over a sequence of [`Observation`]s sorted
//! ascending by timestamp. Undersized inputs produce sentinels instead of
//! errors: [`TrendLabel::InsufficientData`], a `0.0` forecast and `-1` days to goal.
//!
//! The regression slope is computed against elapsed days since the first
//! observation, so shifting every timestamp by a constant leaves it unchanged.
//! Weekly rates, forecasts and goal ETAs all build on the three-decimal daily
//! rate rather than the raw slope.

use crate::config::TrendAnalysisConfig;
use crate::math::{population_std_dev, round1, round2, round3};
use fitness_core::constants::units::{DAYS_PER_WEEK, MS_PER_DAY};
use fitness_core::Observation;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Direction of a weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendLabel {
    /// Weekly rate below the negative threshold
    #[serde(rename = "LOSING")]
    Losing,
    /// Weekly rate above the positive threshold
    #[serde(rename = "GAINING")]
    Gaining,
    /// Weekly rate within the threshold band
    #[serde(rename = "MAINTAINING")]
    Maintaining,
    /// Too few observations to classify
    #[serde(rename = "INSUFFICIENT_DATA")]
    InsufficientData,
}

impl TrendLabel {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Losing => "LOSING",
            Self::Gaining => "GAINING",
            Self::Maintaining => "MAINTAINING",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight trend analyzer
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    config: TrendAnalysisConfig,
}

impl TrendAnalyzer {
    /// Create an analyzer with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds
    #[must_use]
    pub const fn with_config(config: TrendAnalysisConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TrendAnalysisConfig {
        &self.config
    }

    /// Mean of each contiguous `window`-sized run, one decimal
    ///
    /// Returns `len - window + 1` values, or none when the sequence is shorter
    /// than the window or the window is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn moving_average(&self, seq: &[Observation], window: usize) -> Vec<f64> {
        if window == 0 || seq.len() < window {
            return Vec::new();
        }

        let divisor = window as f64;
        seq.windows(window)
            .map(|run| round1(run.iter().map(|o| o.value).sum::<f64>() / divisor))
            .collect()
    }

    /// Unrounded least-squares slope in kg/day
    #[allow(clippy::cast_precision_loss)]
    fn daily_slope(&self, seq: &[Observation]) -> f64 {
        if seq.len() < 2 {
            return 0.0;
        }
        warn_if_unordered(seq);

        let n = seq.len() as f64;
        let origin = seq[0].timestamp_ms;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for obs in seq {
            let x = (obs.timestamp_ms - origin) as f64 / MS_PER_DAY;
            let y = obs.value;
            sum_x += x;
            sum_y += y;
            sum_xy = x.mul_add(y, sum_xy);
            sum_xx = x.mul_add(x, sum_xx);
        }

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if denominator.abs() < self.config.regression_epsilon {
            debug!(
                points = seq.len(),
                "Zero variance in elapsed time, slope treated as 0"
            );
            return 0.0;
        }
        n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator
    }

    /// Least-squares rate of change in kg/day, three decimals
    #[must_use]
    pub fn change_rate_per_day(&self, seq: &[Observation]) -> f64 {
        round3(self.daily_slope(seq))
    }

    /// Rate of change in kg/week: the rounded daily rate scaled by seven
    #[must_use]
    pub fn change_rate_per_week(&self, seq: &[Observation]) -> f64 {
        self.change_rate_per_day(seq) * DAYS_PER_WEEK
    }

    /// Classify the weekly rate against the maintaining band
    #[must_use]
    pub fn detect_trend(&self, seq: &[Observation]) -> TrendLabel {
        if seq.len() < self.config.min_points_for_trend {
            debug!(
                points = seq.len(),
                required = self.config.min_points_for_trend,
                "Not enough observations to classify trend"
            );
            return TrendLabel::InsufficientData;
        }

        let weekly = self.change_rate_per_week(seq);
        let threshold = self.config.trend_threshold_kg_per_week;
        if weekly < -threshold {
            TrendLabel::Losing
        } else if weekly > threshold {
            TrendLabel::Gaining
        } else {
            TrendLabel::Maintaining
        }
    }

    /// Projected value `days_ahead` days after the last observation, one decimal
    ///
    /// Returns `0.0` when there are too few observations to forecast.
    #[must_use]
    pub fn forecast(&self, seq: &[Observation], days_ahead: u32) -> f64 {
        let Some(last) = seq.last() else {
            return 0.0;
        };
        if seq.len() < self.config.min_points_for_prediction {
            debug!(
                points = seq.len(),
                required = self.config.min_points_for_prediction,
                "Not enough observations to forecast"
            );
            return 0.0;
        }
        round1(self.change_rate_per_day(seq).mul_add(f64::from(days_ahead), last.value))
    }

    /// Whole days until the current trend reaches `goal_value`
    ///
    /// Returns `-1` for an empty sequence, when the daily rate is too small to
    /// count as momentum, or when the trend moves away from the goal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn days_to_goal(&self, seq: &[Observation], goal_value: f64) -> i64 {
        let Some(last) = seq.last() else {
            return -1;
        };

        let rate = self.change_rate_per_day(seq);
        if rate.abs() < self.config.momentum_epsilon {
            debug!(rate, "No momentum toward goal");
            return -1;
        }

        let remaining = goal_value - last.value;
        if remaining == 0.0 {
            return 0;
        }
        if remaining.signum() != rate.signum() {
            debug!(remaining, rate, "Trend is moving away from goal");
            return -1;
        }

        (remaining.abs() / rate.abs()).floor() as i64
    }

    /// Population standard deviation of all values, two decimals
    #[must_use]
    pub fn standard_deviation(&self, seq: &[Observation]) -> f64 {
        let values: Vec<f64> = seq.iter().map(|o| o.value).collect();
        population_std_dev(&values).map_or(0.0, round2)
    }

    /// Whether a weekly rate is within recommended loss and gain limits
    #[must_use]
    pub fn is_rate_safe(&self, weekly_rate: f64) -> bool {
        weekly_rate >= -self.config.safe_loss_kg_per_week
            && weekly_rate <= self.config.safe_gain_kg_per_week
    }
}

fn warn_if_unordered(seq: &[Observation]) {
    if cfg!(debug_assertions)
        && seq
            .windows(2)
            .any(|pair| pair[1].timestamp_ms < pair[0].timestamp_ms)
    {
        warn!(
            points = seq.len(),
            "Observation sequence is not sorted by timestamp; results are unreliable"
        );
    }
}
