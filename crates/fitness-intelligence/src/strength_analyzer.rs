// ABOUTME: Strength training analysis for single sets and session histories
// ABOUTME: Epley/Brzycki 1RM estimation, volume and intensity, overload, tiers, rest and deload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Analyzer
//!
//! One-rep-max estimation uses two independent formulas reconciled by
//! [`StrengthAnalyzer::one_rep_max_blended`]:
//!
//! - Epley: `1RM = w × (1 + r/30)`
//! - Brzycki: `1RM = w × 36 / (37 − r)`, undefined from 37 reps upward
//!
//! Domain violations (non-positive weight, zero reps, Brzycki beyond its range)
//! return `0.0` rather than failing.

use crate::config::StrengthConfig;
use crate::math::round1;
use fitness_core::constants::strength::{
    BRZYCKI_DENOMINATOR_BASE, BRZYCKI_MAX_REPS, BRZYCKI_NUMERATOR, EPLEY_DIVISOR,
    REST_HEAVY_SECS, REST_LIGHT_SECS, REST_MAX_EFFORT_SECS, REST_MODERATE_SECS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Strength classification by 1RM relative to bodyweight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthTier {
    /// Missing or invalid inputs
    Unknown,
    /// Ratio below the intermediate boundary
    Beginner,
    /// Ratio below the advanced boundary
    Intermediate,
    /// Ratio below the elite boundary
    Advanced,
    /// Ratio at or above the elite boundary
    Elite,
}

impl StrengthTier {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strength analyzer
#[derive(Debug, Clone, Default)]
pub struct StrengthAnalyzer {
    config: StrengthConfig,
}

impl StrengthAnalyzer {
    /// Create an analyzer with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds
    #[must_use]
    pub const fn with_config(config: StrengthConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &StrengthConfig {
        &self.config
    }

    fn epley_raw(weight: f64, reps: u32) -> f64 {
        if reps == 1 {
            return weight;
        }
        weight * (1.0 + f64::from(reps) / EPLEY_DIVISOR)
    }

    fn brzycki_raw(weight: f64, reps: u32) -> Option<f64> {
        if reps >= BRZYCKI_MAX_REPS {
            return None;
        }
        if reps == 1 {
            return Some(weight);
        }
        Some(weight * BRZYCKI_NUMERATOR / (BRZYCKI_DENOMINATOR_BASE - f64::from(reps)))
    }

    /// Epley 1RM estimate, one decimal; `0.0` for invalid input
    #[must_use]
    pub fn one_rep_max_epley(weight: f64, reps: u32) -> f64 {
        if reps == 0 || weight <= 0.0 {
            return 0.0;
        }
        round1(Self::epley_raw(weight, reps))
    }

    /// Brzycki 1RM estimate, one decimal; `0.0` for invalid input or 37+ reps
    #[must_use]
    pub fn one_rep_max_brzycki(weight: f64, reps: u32) -> f64 {
        if reps == 0 || weight <= 0.0 {
            return 0.0;
        }
        Self::brzycki_raw(weight, reps).map_or_else(
            || {
                debug!(reps, "Brzycki formula undefined at this rep count");
                0.0
            },
            round1,
        )
    }

    /// Mean of the one-decimal Epley and Brzycki estimates, one decimal
    ///
    /// Falls back to the Epley estimate wherever Brzycki yields `0.0`.
    #[must_use]
    pub fn one_rep_max_blended(weight: f64, reps: u32) -> f64 {
        let epley = Self::one_rep_max_epley(weight, reps);
        let brzycki = Self::one_rep_max_brzycki(weight, reps);
        if brzycki <= 0.0 {
            return epley;
        }
        round1(f64::midpoint(epley, brzycki))
    }

    /// Load that allows `target_reps` reps at the given 1RM (inverse Epley), one decimal
    #[must_use]
    pub fn training_weight_for_reps(one_rm: f64, target_reps: u32) -> f64 {
        if one_rm <= 0.0 || target_reps == 0 {
            return 0.0;
        }
        if target_reps == 1 {
            return one_rm;
        }
        round1(one_rm / (1.0 + f64::from(target_reps) / EPLEY_DIVISOR))
    }

    /// `weight` as a percentage of `one_rm`, one decimal
    #[must_use]
    pub fn percent_of_max(weight: f64, one_rm: f64) -> f64 {
        if one_rm <= 0.0 {
            return 0.0;
        }
        round1(weight / one_rm * 100.0)
    }

    /// Volume of a set (exact)
    #[must_use]
    pub fn volume(weight: f64, reps: u32) -> f64 {
        weight * f64::from(reps)
    }

    /// Summed volume of `(weight, reps)` sets (exact)
    #[must_use]
    pub fn total_volume(sets: &[(f64, u32)]) -> f64 {
        sets.iter()
            .map(|&(weight, reps)| Self::volume(weight, reps))
            .sum()
    }

    /// Summed per-exercise volumes, rounded to the nearest integer
    #[must_use]
    pub fn session_volume(exercise_volumes: &[f64]) -> f64 {
        exercise_volumes.iter().sum::<f64>().round()
    }

    /// Mean percent of max across `(weight, one_rm)` pairs, one decimal
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_intensity(sets: &[(f64, f64)]) -> f64 {
        if sets.is_empty() {
            return 0.0;
        }
        let total: f64 = sets
            .iter()
            .map(|&(weight, one_rm)| Self::percent_of_max(weight, one_rm))
            .sum();
        round1(total / sets.len() as f64)
    }

    /// Whether `current_volume` beats `previous_volume` by at least the overload threshold
    #[must_use]
    pub fn is_progressive_overload(&self, previous_volume: f64, current_volume: f64) -> bool {
        if previous_volume <= 0.0 {
            return false;
        }
        (current_volume - previous_volume) / previous_volume >= self.config.overload_threshold
    }

    /// Percent change from `previous` to `current`, one decimal
    #[must_use]
    pub fn volume_improvement_pct(previous: f64, current: f64) -> f64 {
        if previous <= 0.0 {
            return 0.0;
        }
        round1((current - previous) / previous * 100.0)
    }

    /// Classify a 1RM relative to bodyweight
    #[must_use]
    pub fn strength_tier(&self, one_rm: f64, body_weight: f64) -> StrengthTier {
        if one_rm <= 0.0 || body_weight <= 0.0 {
            return StrengthTier::Unknown;
        }
        let ratio = one_rm / body_weight;
        if ratio < self.config.intermediate_ratio {
            StrengthTier::Beginner
        } else if ratio < self.config.advanced_ratio {
            StrengthTier::Intermediate
        } else if ratio < self.config.elite_ratio {
            StrengthTier::Advanced
        } else {
            StrengthTier::Elite
        }
    }

    /// Rest between sets for a given intensity
    #[must_use]
    pub fn recommended_rest_seconds(percent_of_max: f64) -> u32 {
        match percent_of_max {
            p if p >= 90.0 => REST_MAX_EFFORT_SECS,
            p if p >= 80.0 => REST_HEAVY_SECS,
            p if p >= 70.0 => REST_MODERATE_SECS,
            _ => REST_LIGHT_SECS,
        }
    }

    /// Whether recent session volumes show enough sharp declines to warrant a deload
    #[must_use]
    pub fn should_deload(&self, recent_volumes: &[f64]) -> bool {
        if recent_volumes.len() < self.config.deload_min_sessions {
            return false;
        }
        let declines = recent_volumes
            .windows(2)
            .filter(|pair| {
                let (previous, current) = (pair[0], pair[1]);
                previous > 0.0
                    && (previous - current) / previous * 100.0 > self.config.deload_decline_percent
            })
            .count();
        declines >= self.config.deload_min_declines
    }
}
