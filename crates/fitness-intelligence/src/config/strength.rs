// ABOUTME: Strength analysis configuration for overload detection, deload and tier boundaries
// ABOUTME: Thresholds for session volume comparison and 1RM/bodyweight classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fitness_core::constants::strength;
use serde::{Deserialize, Serialize};

/// Strength analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Minimum relative volume increase counted as overload (0.025 = 2.5%)
    pub overload_threshold: f64,
    /// Session-to-session drop (%) counted as a decline
    pub deload_decline_percent: f64,
    /// Sessions needed before a deload can be suggested
    pub deload_min_sessions: usize,
    /// Declines needed to suggest a deload
    pub deload_min_declines: usize,
    /// Ratio where intermediate starts
    pub intermediate_ratio: f64,
    /// Ratio where advanced starts
    pub advanced_ratio: f64,
    /// Ratio where elite starts
    pub elite_ratio: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            overload_threshold: strength::PROGRESSIVE_OVERLOAD_THRESHOLD,
            deload_decline_percent: strength::DELOAD_DECLINE_PERCENT,
            deload_min_sessions: strength::DELOAD_MIN_SESSIONS,
            deload_min_declines: strength::DELOAD_MIN_DECLINES,
            intermediate_ratio: strength::INTERMEDIATE_RATIO,
            advanced_ratio: strength::ADVANCED_RATIO,
            elite_ratio: strength::ELITE_RATIO,
        }
    }
}

impl StrengthConfig {
    /// Validate thresholds and tier ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if thresholds are out of range or tiers are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.overload_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "overload_threshold must be in [0.0, 1.0)",
            ));
        }
        if !(0.0..100.0).contains(&self.deload_decline_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "deload_decline_percent must be in [0, 100)",
            ));
        }
        if self.deload_min_sessions < 2 || self.deload_min_declines == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Deload needs at least 2 sessions and 1 decline",
            ));
        }
        if self.intermediate_ratio <= 0.0
            || self.intermediate_ratio >= self.advanced_ratio
            || self.advanced_ratio >= self.elite_ratio
        {
            return Err(ConfigError::InvalidRange(
                "Strength tier ratios must be positive and ascending",
            ));
        }
        Ok(())
    }
}
