// ABOUTME: Unit tests for engine configuration defaults, overrides and validation
// ABOUTME: Exercises FITNESS_* environment variables and every validation failure class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

use fitness_metrics::errors::{AppError, ErrorCode};
use fitness_metrics::intelligence::config::MacroSplitConfig;
use fitness_metrics::intelligence::{ConfigError, EngineConfig, MetricsEngine, NutritionCalculator};
use fitness_metrics::models::{ActivityLevel, Sex};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 13] = [
    "FITNESS_SHORT_WINDOW",
    "FITNESS_LONG_WINDOW",
    "FITNESS_TREND_THRESHOLD_KG_PER_WEEK",
    "FITNESS_MIN_POINTS_FOR_TREND",
    "FITNESS_MIN_POINTS_FOR_PREDICTION",
    "FITNESS_FORECAST_HORIZON_DAYS",
    "FITNESS_OVERLOAD_THRESHOLD",
    "FITNESS_DELOAD_DECLINE_PERCENT",
    "FITNESS_CUTTING_DEFICIT_KCAL",
    "FITNESS_BULKING_SURPLUS_KCAL",
    "FITNESS_MIN_CALORIES_MALE",
    "FITNESS_MIN_CALORIES_FEMALE",
    "FITNESS_WATER_LITERS_PER_KG",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_default_config_validation() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_defaults_match_formula_constants() {
    let config = EngineConfig::default();

    assert_eq!(config.trend.short_window, 7);
    assert_eq!(config.trend.long_window, 30);
    assert_eq!(config.trend.trend_threshold_kg_per_week, 0.2);
    assert_eq!(config.trend.min_points_for_trend, 7);
    assert_eq!(config.trend.min_points_for_prediction, 14);
    assert_eq!(config.trend.forecast_horizon_days, 30);

    assert_eq!(config.strength.overload_threshold, 0.025);
    assert_eq!(config.strength.deload_decline_percent, 10.0);

    assert_eq!(config.nutrition.calories.cutting_deficit_kcal, 500.0);
    assert_eq!(config.nutrition.calories.bulking_surplus_kcal, 300.0);
    assert_eq!(config.nutrition.calories.floor(Sex::Male), 1500.0);
    assert_eq!(config.nutrition.calories.floor(Sex::Female), 1200.0);
}

#[test]
fn test_config_serde_roundtrip() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

// ============================================================================
// VALIDATION FAILURES
// ============================================================================

#[test]
fn test_invalid_window_order() {
    let mut config = EngineConfig::default();
    config.trend.short_window = 40;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_zero_window_rejected() {
    let mut config = EngineConfig::default();
    config.trend.short_window = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_non_positive_threshold_rejected() {
    let mut config = EngineConfig::default();
    config.trend.trend_threshold_kg_per_week = 0.0;
    assert!(config.validate().is_err());

    config.trend.trend_threshold_kg_per_week = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_overload_threshold() {
    let mut config = EngineConfig::default();
    config.strength.overload_threshold = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_strength_ratios_must_ascend() {
    let mut config = EngineConfig::default();
    config.strength.advanced_ratio = 2.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_invalid_macro_split_sum() {
    let mut config = EngineConfig::default();
    config.nutrition.macro_splits.cutting = MacroSplitConfig {
        protein_pct: 50,
        carbs_pct: 30,
        fat_pct: 30,
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeights(_)));
    assert!(err.to_string().contains("cutting"));
    assert!(err.to_string().contains("110"));
}

#[test]
fn test_activity_factors_must_ascend() {
    let mut config = EngineConfig::default();
    config.nutrition.activity_factors.moderate = 1.3;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_calorie_floor_range() {
    let mut config = EngineConfig::default();
    config.nutrition.calories.min_calories_female = 600.0;
    assert!(config.validate().is_err());

    config.nutrition.calories.min_calories_female = 1300.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_calorie_floors_cannot_drop_below_minimums() {
    let mut config = EngineConfig::default();
    config.nutrition.calories.min_calories_male = 900.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    config.nutrition.calories.min_calories_male = 1499.0;
    assert!(config.validate().is_err());

    config.nutrition.calories.min_calories_male = 1800.0;
    config.nutrition.calories.min_calories_female = 1199.0;
    assert!(config.validate().is_err());

    config.nutrition.calories.min_calories_female = 1200.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: AppError = ConfigError::ValueOutOfRange("windows").into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("windows"));
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_is_default() {
    clear_env();
    assert_eq!(EngineConfig::load().unwrap(), EngineConfig::default());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_env();
    env::set_var("FITNESS_SHORT_WINDOW", "5");
    env::set_var("FITNESS_TREND_THRESHOLD_KG_PER_WEEK", " 0.3 ");
    env::set_var("FITNESS_OVERLOAD_THRESHOLD", "0.05");
    env::set_var("FITNESS_MIN_CALORIES_FEMALE", "1300");

    let config = EngineConfig::load().unwrap();

    assert_eq!(config.trend.short_window, 5);
    assert!((config.trend.trend_threshold_kg_per_week - 0.3).abs() < 1e-12);
    assert!((config.strength.overload_threshold - 0.05).abs() < 1e-12);
    assert_eq!(config.nutrition.calories.min_calories_female, 1300.0);

    clear_env();
}

#[test]
#[serial]
fn test_override_flows_into_engine() {
    clear_env();
    env::set_var("FITNESS_CUTTING_DEFICIT_KCAL", "750");

    let engine = MetricsEngine::with_config(EngineConfig::load().unwrap());
    let target =
        engine.calories_for_goal(85.0, 180.0, 28, Sex::Male, ActivityLevel::Moderate, 80.0);
    // TDEE 2852 − 750
    assert_eq!(target, 2102.0);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_env();
    env::set_var("FITNESS_LONG_WINDOW", "thirty");

    let err = EngineConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("FITNESS_LONG_WINDOW"));
    assert!(err.to_string().contains("thirty"));

    clear_env();
}

#[test]
#[serial]
fn test_override_that_breaks_validation_is_rejected() {
    clear_env();
    env::set_var("FITNESS_SHORT_WINDOW", "60");

    assert!(matches!(
        EngineConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_override_cannot_lower_calorie_floor() {
    clear_env();
    env::set_var("FITNESS_MIN_CALORIES_MALE", "900");

    assert!(matches!(
        EngineConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_override_can_raise_calorie_floor() {
    clear_env();
    env::set_var("FITNESS_MIN_CALORIES_MALE", "1700");

    let calc = NutritionCalculator::with_config(EngineConfig::load().unwrap().nutrition);
    assert_eq!(calc.validate_floor(1000.0, Sex::Male), 1700.0);

    clear_env();
}
