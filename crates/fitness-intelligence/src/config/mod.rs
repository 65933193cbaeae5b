// ABOUTME: Engine configuration grouping trend, strength and nutrition settings
// ABOUTME: Defaults from formula constants, FITNESS_* environment overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration
//!
//! `EngineConfig` is a plain value handed to analyzers. There is no global
//! instance; callers that want environment overrides call [`EngineConfig::load`]
//! once and pass the result down.

/// Configuration error types
pub mod error;
/// Nutrition calculator settings
pub mod nutrition;
/// Strength analyzer settings
pub mod strength;
/// Trend analyzer settings
pub mod trend;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, MacroSplitConfig, MacroSplitsConfig,
    NutritionConfig, ProteinConfig, WaterConfig,
};
pub use strength::StrengthConfig;
pub use trend::TrendAnalysisConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Trend analyzer settings
    pub trend: TrendAnalysisConfig,
    /// Strength analyzer settings
    pub strength: StrengthConfig,
    /// Nutrition calculator settings
    pub nutrition: NutritionConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and `FITNESS_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trend.validate()?;
        self.strength.validate()?;
        self.nutrition.validate()?;
        Ok(())
    }

    /// Parse and apply one environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Trend analysis overrides
        Self::apply_env_var("FITNESS_SHORT_WINDOW", &mut self.trend.short_window)?;
        Self::apply_env_var("FITNESS_LONG_WINDOW", &mut self.trend.long_window)?;
        Self::apply_env_var(
            "FITNESS_TREND_THRESHOLD_KG_PER_WEEK",
            &mut self.trend.trend_threshold_kg_per_week,
        )?;
        Self::apply_env_var(
            "FITNESS_MIN_POINTS_FOR_TREND",
            &mut self.trend.min_points_for_trend,
        )?;
        Self::apply_env_var(
            "FITNESS_MIN_POINTS_FOR_PREDICTION",
            &mut self.trend.min_points_for_prediction,
        )?;
        Self::apply_env_var(
            "FITNESS_FORECAST_HORIZON_DAYS",
            &mut self.trend.forecast_horizon_days,
        )?;

        // Strength overrides
        Self::apply_env_var(
            "FITNESS_OVERLOAD_THRESHOLD",
            &mut self.strength.overload_threshold,
        )?;
        Self::apply_env_var(
            "FITNESS_DELOAD_DECLINE_PERCENT",
            &mut self.strength.deload_decline_percent,
        )?;

        // Nutrition overrides
        Self::apply_env_var(
            "FITNESS_CUTTING_DEFICIT_KCAL",
            &mut self.nutrition.calories.cutting_deficit_kcal,
        )?;
        Self::apply_env_var(
            "FITNESS_BULKING_SURPLUS_KCAL",
            &mut self.nutrition.calories.bulking_surplus_kcal,
        )?;
        Self::apply_env_var(
            "FITNESS_MIN_CALORIES_MALE",
            &mut self.nutrition.calories.min_calories_male,
        )?;
        Self::apply_env_var(
            "FITNESS_MIN_CALORIES_FEMALE",
            &mut self.nutrition.calories.min_calories_female,
        )?;
        Self::apply_env_var(
            "FITNESS_WATER_LITERS_PER_KG",
            &mut self.nutrition.water.liters_per_kg,
        )?;

        Ok(self)
    }
}
