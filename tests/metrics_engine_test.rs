// ABOUTME: Integration tests for the MetricsEngine facade and its result records
// ABOUTME: Verifies trend, nutrition and workout aggregation plus display summaries and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

use fitness_metrics::intelligence::{
    BmiCategory, EngineConfig, MetricsEngine, StrengthTier, TrendLabel, TrendResult,
};
use fitness_metrics::models::{ActivityLevel, BodyProfile, Goal, LiftAttempt, Sex};

mod common;

use common::{daily, linear_series};

fn profile(weight_kg: f64, sex: Sex, activity: ActivityLevel, goal: Goal) -> BodyProfile {
    BodyProfile::new(weight_kg, 180.0, 28, sex, activity, goal).unwrap()
}

// ============================================================================
// WEIGHT TREND
// ============================================================================

#[test]
fn test_analyze_weight_trend_empty_is_none() {
    let engine = MetricsEngine::new();
    assert!(engine.analyze_weight_trend(&[], 80.0).is_none());
}

#[test]
fn test_analyze_weight_trend_linear_loss() {
    let engine = MetricsEngine::new();
    let seq = linear_series(85.0, 83.0, 30);

    let result = engine.analyze_weight_trend(&seq, 80.0).unwrap();

    assert!((result.current_value - 83.0).abs() < 1e-9);
    assert_eq!(result.trend, TrendLabel::Losing);
    // Rounded daily rate −0.069 scaled by seven
    assert!((result.weekly_change_rate + 0.483).abs() < 1e-9);
    assert_eq!(result.forecast_value, 80.9);
    assert_eq!(result.forecast(), Some(80.9));
    assert_eq!(result.estimated_days_to_goal, 43);
    assert_eq!(result.days_to_goal(), Some(43));
    // Last 7 values average: 83 + 3 × 2/29 ≈ 83.2
    assert_eq!(result.short_term_average, 83.2);
    // All 30 values average to 84.0
    assert_eq!(result.long_term_average, 84.0);
    assert!(result.standard_deviation > 0.0);
}

#[test]
fn test_analyze_weight_trend_short_sequence_uses_sentinels() {
    let engine = MetricsEngine::new();
    let seq = daily(&[80.0, 80.2, 80.1]);

    let result = engine.analyze_weight_trend(&seq, 75.0).unwrap();

    assert_eq!(result.trend, TrendLabel::InsufficientData);
    assert_eq!(result.short_term_average, 80.1, "falls back to current value");
    assert_eq!(result.long_term_average, 80.1, "falls back to current value");
    assert_eq!(result.forecast_value, 0.0);
    assert_eq!(result.forecast(), None);
    assert_eq!(result.trend_description(), "Insufficient data");
}

#[test]
fn test_trend_messages() {
    let engine = MetricsEngine::new();
    let result = engine
        .analyze_weight_trend(&linear_series(85.0, 83.0, 30), 80.0)
        .unwrap();

    assert_eq!(result.trend_description(), "Losing 0.5 kg/week");
    assert_eq!(
        result.goal_progress_message(),
        "Estimated 43 days (6 weeks) to goal"
    );

    let away = engine
        .analyze_weight_trend(&linear_series(85.0, 83.0, 30), 90.0)
        .unwrap();
    assert_eq!(away.days_to_goal(), None);
    assert_eq!(
        away.goal_progress_message(),
        "Current trend is not moving toward goal"
    );
}

#[test]
fn test_trend_result_serializes_labels() {
    let engine = MetricsEngine::new();
    let result = engine
        .analyze_weight_trend(&linear_series(85.0, 83.0, 30), 80.0)
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["trend"], "LOSING");

    let back: TrendResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.trend, result.trend);
    assert_eq!(back.forecast_value, result.forecast_value);
    assert_eq!(back.estimated_days_to_goal, result.estimated_days_to_goal);
    assert!((back.weekly_change_rate - result.weekly_change_rate).abs() < 1e-12);
}

#[test]
fn test_custom_forecast_horizon() {
    let mut config = EngineConfig::default();
    config.trend.forecast_horizon_days = 0;
    let engine = MetricsEngine::with_config(config);

    let result = engine
        .analyze_weight_trend(&linear_series(90.0, 85.0, 20), 80.0)
        .unwrap();
    assert_eq!(result.forecast_value, 85.0);
}

// ============================================================================
// NUTRITION PROFILE
// ============================================================================

#[test]
fn test_nutrition_profile_moderate_cutting_male() {
    let engine = MetricsEngine::new();
    let result = engine.calculate_nutrition_profile(&profile(
        85.0,
        Sex::Male,
        ActivityLevel::Moderate,
        Goal::Cutting,
    ));

    assert_eq!(result.bmr, 1840.0);
    assert_eq!(result.tdee, 2852.0);
    assert_eq!(result.calorie_target, 2352.0);
    assert_eq!(result.calorie_balance, -500.0);
    // 40/30/30 of 2352 kcal
    assert_eq!(result.protein_g, 235.0);
    assert_eq!(result.carbs_g, 176.0);
    assert_eq!(result.fat_g, 78.0);
    assert_eq!(result.bmi, 26.2);
    assert_eq!(result.bmi_category, BmiCategory::Overweight);
    // 85 × 0.033 = 2.805
    assert_eq!(result.water_liters, 2.9);
    assert_eq!(result.goal, Goal::Cutting);
    assert_eq!(result.activity_level, ActivityLevel::Moderate);
}

#[test]
fn test_nutrition_profile_applies_floor() {
    let engine = MetricsEngine::new();
    let small = BodyProfile::new(
        40.0,
        150.0,
        80,
        Sex::Female,
        ActivityLevel::Sedentary,
        Goal::Cutting,
    )
    .unwrap();

    let result = engine.calculate_nutrition_profile(&small);

    // BMR 400 + 937.5 − 400 − 161 = 776.5 → 777; TDEE 932; raw target 432
    assert_eq!(result.tdee, 932.0);
    assert_eq!(result.calorie_target, 1200.0);
    assert_eq!(result.calorie_balance, 268.0);
}

#[test]
fn test_nutrition_summary() {
    let engine = MetricsEngine::new();
    let result = engine.calculate_nutrition_profile(&profile(
        85.0,
        Sex::Male,
        ActivityLevel::Moderate,
        Goal::Cutting,
    ));

    let summary = result.summary();
    assert!(summary.contains("BMR: 1840 cal"));
    assert!(summary.contains("Target: 2352 cal"));
    assert!(summary.contains("BMI: 26.2 (Overweight)"));
}

#[test]
fn test_calories_for_goal_infers_goal() {
    let engine = MetricsEngine::new();
    let args = (85.0, 180.0, 28, Sex::Male, ActivityLevel::Moderate);

    let cutting = engine.calories_for_goal(args.0, args.1, args.2, args.3, args.4, 80.0);
    let maintaining = engine.calories_for_goal(args.0, args.1, args.2, args.3, args.4, 85.0);
    let bulking = engine.calories_for_goal(args.0, args.1, args.2, args.3, args.4, 90.0);

    assert_eq!(cutting, 2352.0);
    assert_eq!(maintaining, 2852.0);
    assert_eq!(bulking, 3152.0);
}

// ============================================================================
// WORKOUT SETS
// ============================================================================

#[test]
fn test_analyze_workout_set_first_session() {
    let engine = MetricsEngine::new();
    let attempt = LiftAttempt::new(100.0, 5, 80.0, 0.0).unwrap();

    let result = engine.analyze_workout_set(&attempt);

    assert_eq!(result.estimated_one_rep_max, 114.6);
    assert_eq!(result.volume, 500.0);
    assert_eq!(result.percent_of_max, 87.3);
    assert_eq!(result.strength_tier, StrengthTier::Intermediate);
    assert!(!result.is_progressive_overload);
    assert_eq!(result.volume_improvement_pct, 0.0);
    assert_eq!(result.progress_message(), "First workout - establish baseline");
}

#[test]
fn test_analyze_workout_set_with_history() {
    let engine = MetricsEngine::new();

    let improved = engine.analyze_workout_set(&LiftAttempt::new(100.0, 5, 80.0, 450.0).unwrap());
    assert!(improved.is_progressive_overload);
    assert_eq!(improved.volume_improvement_pct, 11.1);
    assert_eq!(
        improved.progress_message(),
        "Progressive overload achieved! +11.1% volume"
    );

    let slight = engine.analyze_workout_set(&LiftAttempt::new(100.0, 5, 80.0, 495.0).unwrap());
    assert!(!slight.is_progressive_overload);
    assert_eq!(slight.progress_message(), "Slight improvement: +1.0% volume");

    let declined = engine.analyze_workout_set(&LiftAttempt::new(100.0, 5, 80.0, 600.0).unwrap());
    assert_eq!(declined.volume_improvement_pct, -16.7);
    assert_eq!(declined.progress_message(), "Volume decreased: -16.7%");
}

#[test]
fn test_performance_summary() {
    let engine = MetricsEngine::new();
    let result = engine.analyze_workout_set(&LiftAttempt::new(100.0, 5, 80.0, 0.0).unwrap());

    assert_eq!(
        result.performance_summary(),
        "Set: 100.0kg × 5 reps | Est 1RM: 114.6kg\nVolume: 500.0kg | Intensity: 87.3% of 1RM\nStrength Level: Intermediate"
    );
}

#[test]
fn test_analyze_workout_sets_preserves_order() {
    let engine = MetricsEngine::new();
    let attempts: Vec<LiftAttempt> = (1..=64)
        .map(|i| LiftAttempt::new(40.0 + f64::from(i), (i % 12) + 1, 75.0, 0.0).unwrap())
        .collect();

    let batch = engine.analyze_workout_sets(&attempts);

    assert_eq!(batch.len(), attempts.len());
    for (attempt, result) in attempts.iter().zip(&batch) {
        assert_eq!(result, &engine.analyze_workout_set(attempt));
    }
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn test_repeated_calls_are_identical() {
    let engine = MetricsEngine::new();
    let seq = linear_series(92.0, 88.0, 40);
    let body = profile(92.0, Sex::Female, ActivityLevel::Active, Goal::Maintenance);
    let attempt = LiftAttempt::new(60.0, 8, 92.0, 420.0).unwrap();

    assert_eq!(
        serde_json::to_string(&engine.analyze_weight_trend(&seq, 85.0)).unwrap(),
        serde_json::to_string(&engine.analyze_weight_trend(&seq, 85.0)).unwrap()
    );
    assert_eq!(
        engine.calculate_nutrition_profile(&body),
        engine.calculate_nutrition_profile(&body)
    );
    assert_eq!(
        engine.analyze_workout_set(&attempt),
        engine.analyze_workout_set(&attempt)
    );
}
