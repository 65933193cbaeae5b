// ABOUTME: Aggregating facade composing trend, strength and nutrition analysis into result records
// ABOUTME: MetricsEngine plus the immutable TrendResult, StrengthResult and NutritionResult outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Engine
//!
//! `MetricsEngine` owns one instance of each analyzer, built from a single
//! [`EngineConfig`], and packages their outputs into records collaborators can
//! display or serialize directly.

use crate::config::EngineConfig;
use crate::nutrition_calculator::{BmiCategory, NutritionCalculator};
use crate::strength_analyzer::{StrengthAnalyzer, StrengthTier};
use crate::trend_analyzer::{TrendAnalyzer, TrendLabel};
use fitness_core::{ActivityLevel, BodyProfile, Goal, LiftAttempt, Observation, Sex};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight trend summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Most recent observation value (kg)
    pub current_value: f64,
    /// Latest short-window moving average, or the current value when too few points
    pub short_term_average: f64,
    /// Latest long-window moving average, or the current value when too few points
    pub long_term_average: f64,
    /// Rate of change (kg/week)
    pub weekly_change_rate: f64,
    /// Trend classification
    pub trend: TrendLabel,
    /// Projected value at the forecast horizon, `0.0` when not computed
    pub forecast_value: f64,
    /// Days until the goal is reached, `-1` when unreachable on the current trend
    pub estimated_days_to_goal: i64,
    /// Population standard deviation of the values
    pub standard_deviation: f64,
}

impl TrendResult {
    /// Forecast, `None` when there was too little data
    #[must_use]
    pub fn forecast(&self) -> Option<f64> {
        (self.forecast_value > 0.0).then_some(self.forecast_value)
    }

    /// Days to goal, `None` when the current trend never reaches it
    #[must_use]
    pub fn days_to_goal(&self) -> Option<u32> {
        u32::try_from(self.estimated_days_to_goal).ok()
    }

    /// One-line description of the trend
    #[must_use]
    pub fn trend_description(&self) -> String {
        match self.trend {
            TrendLabel::Losing => format!("Losing {:.1} kg/week", self.weekly_change_rate.abs()),
            TrendLabel::Gaining => format!("Gaining {:.1} kg/week", self.weekly_change_rate),
            TrendLabel::Maintaining => "Maintaining weight".to_owned(),
            TrendLabel::InsufficientData => "Insufficient data".to_owned(),
        }
    }

    /// Progress toward the goal weight
    #[must_use]
    pub fn goal_progress_message(&self) -> String {
        match self.estimated_days_to_goal {
            days if days < 0 => "Current trend is not moving toward goal".to_owned(),
            0 => "Goal weight reached!".to_owned(),
            days => format!("Estimated {days} days ({} weeks) to goal", days / 7),
        }
    }
}

/// Single working set summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Load lifted (kg)
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Blended 1RM estimate (kg)
    pub estimated_one_rep_max: f64,
    /// Set volume (kg)
    pub volume: f64,
    /// Load as a percentage of the estimated 1RM
    pub percent_of_max: f64,
    /// Classification relative to bodyweight
    pub strength_tier: StrengthTier,
    /// Whether volume beat the previous set by the overload threshold
    pub is_progressive_overload: bool,
    /// Percent volume change versus the previous set
    pub volume_improvement_pct: f64,
}

impl StrengthResult {
    /// Multi-line description of the set
    #[must_use]
    pub fn performance_summary(&self) -> String {
        format!(
            "Set: {:.1}kg × {} reps | Est 1RM: {:.1}kg\nVolume: {:.1}kg | Intensity: {:.1}% of 1RM\nStrength Level: {}",
            self.weight,
            self.reps,
            self.estimated_one_rep_max,
            self.volume,
            self.percent_of_max,
            self.strength_tier,
        )
    }

    /// Progress versus the previous set
    #[must_use]
    pub fn progress_message(&self) -> String {
        if self.is_progressive_overload {
            format!(
                "Progressive overload achieved! +{:.1}% volume",
                self.volume_improvement_pct
            )
        } else if self.volume_improvement_pct > 0.0 {
            format!(
                "Slight improvement: +{:.1}% volume",
                self.volume_improvement_pct
            )
        } else if self.volume_improvement_pct < 0.0 {
            format!("Volume decreased: {:.1}%", self.volume_improvement_pct)
        } else {
            "First workout - establish baseline".to_owned()
        }
    }
}

/// Daily nutrition targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Basal metabolic rate (kcal)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal)
    pub tdee: f64,
    /// Goal-adjusted target after the safety floor (kcal)
    pub calorie_target: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Body mass index
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Water target (L/day)
    pub water_liters: f64,
    /// `calorie_target - tdee` (kcal)
    pub calorie_balance: f64,
    /// Goal the targets were computed for
    pub goal: Goal,
    /// Activity level the targets were computed for
    pub activity_level: ActivityLevel,
}

impl NutritionResult {
    /// Multi-line description of the targets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "BMR: {:.0} cal | TDEE: {:.0} cal | Target: {:.0} cal\nMacros: P={:.0}g C={:.0}g F={:.0}g\nBMI: {:.1} ({}) | Water: {:.1}L/day",
            self.bmr,
            self.tdee,
            self.calorie_target,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.bmi,
            self.bmi_category,
            self.water_liters,
        )
    }
}

/// Facade over the three analyzers
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    trend: TrendAnalyzer,
    strength: StrengthAnalyzer,
    nutrition: NutritionCalculator,
    forecast_horizon_days: u32,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsEngine {
    /// Engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine built from an explicit configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let forecast_horizon_days = config.trend.forecast_horizon_days;
        Self {
            trend: TrendAnalyzer::with_config(config.trend),
            strength: StrengthAnalyzer::with_config(config.strength),
            nutrition: NutritionCalculator::with_config(config.nutrition),
            forecast_horizon_days,
        }
    }

    /// Trend analyzer used by this engine
    #[must_use]
    pub const fn trend_analyzer(&self) -> &TrendAnalyzer {
        &self.trend
    }

    /// Strength analyzer used by this engine
    #[must_use]
    pub const fn strength_analyzer(&self) -> &StrengthAnalyzer {
        &self.strength
    }

    /// Nutrition calculator used by this engine
    #[must_use]
    pub const fn nutrition_calculator(&self) -> &NutritionCalculator {
        &self.nutrition
    }

    /// Analyze an ordered weight sequence against a goal weight
    ///
    /// Returns `None` only for an empty sequence.
    #[must_use]
    pub fn analyze_weight_trend(
        &self,
        observations: &[Observation],
        goal_weight: f64,
    ) -> Option<TrendResult> {
        let Some(last) = observations.last() else {
            debug!("No observations to analyze");
            return None;
        };
        let current_value = last.value;
        let config = self.trend.config();

        let latest_average = |window: usize| {
            self.trend
                .moving_average(observations, window)
                .last()
                .copied()
                .unwrap_or(current_value)
        };

        Some(TrendResult {
            current_value,
            short_term_average: latest_average(config.short_window),
            long_term_average: latest_average(config.long_window),
            weekly_change_rate: self.trend.change_rate_per_week(observations),
            trend: self.trend.detect_trend(observations),
            forecast_value: self
                .trend
                .forecast(observations, self.forecast_horizon_days),
            estimated_days_to_goal: self.trend.days_to_goal(observations, goal_weight),
            standard_deviation: self.trend.standard_deviation(observations),
        })
    }

    /// Compute daily nutrition targets for a profile, safety floor applied
    #[must_use]
    pub fn calculate_nutrition_profile(&self, profile: &BodyProfile) -> NutritionResult {
        let calc = &self.nutrition;
        let bmr = calc.bmr(profile.weight_kg, profile.height_cm, profile.age, profile.sex);
        let tdee = calc.tdee(bmr, profile.activity_level);
        let raw_target = calc.calorie_target(tdee, profile.goal);
        let calorie_target = calc.validate_floor(raw_target, profile.sex);
        let macros = calc.macros(calorie_target, profile.goal);
        let bmi = NutritionCalculator::bmi(profile.weight_kg, profile.height_cm);

        NutritionResult {
            bmr,
            tdee,
            calorie_target,
            protein_g: macros.protein_g,
            carbs_g: macros.carbs_g,
            fat_g: macros.fat_g,
            bmi,
            bmi_category: NutritionCalculator::bmi_category(bmi),
            water_liters: calc.water_intake(profile.weight_kg, profile.activity_level),
            calorie_balance: calorie_target - tdee,
            goal: profile.goal,
            activity_level: profile.activity_level,
        }
    }

    /// Analyze one working set against its previous volume
    #[must_use]
    pub fn analyze_workout_set(&self, attempt: &LiftAttempt) -> StrengthResult {
        let one_rm = StrengthAnalyzer::one_rep_max_blended(attempt.weight, attempt.reps);
        let volume = StrengthAnalyzer::volume(attempt.weight, attempt.reps);

        let (is_progressive_overload, volume_improvement_pct) = if attempt.previous_volume > 0.0 {
            (
                self.strength
                    .is_progressive_overload(attempt.previous_volume, volume),
                StrengthAnalyzer::volume_improvement_pct(attempt.previous_volume, volume),
            )
        } else {
            (false, 0.0)
        };

        StrengthResult {
            weight: attempt.weight,
            reps: attempt.reps,
            estimated_one_rep_max: one_rm,
            volume,
            percent_of_max: StrengthAnalyzer::percent_of_max(attempt.weight, one_rm),
            strength_tier: self.strength.strength_tier(one_rm, attempt.body_weight),
            is_progressive_overload,
            volume_improvement_pct,
        }
    }

    /// Analyze many sets in parallel; output order matches input order
    #[must_use]
    pub fn analyze_workout_sets(&self, attempts: &[LiftAttempt]) -> Vec<StrengthResult> {
        attempts
            .par_iter()
            .map(|attempt| self.analyze_workout_set(attempt))
            .collect()
    }

    /// Floored calorie target for moving from `current_kg` toward `goal_kg`
    #[must_use]
    pub fn calories_for_goal(
        &self,
        current_kg: f64,
        height_cm: f64,
        age: u32,
        sex: Sex,
        activity_level: ActivityLevel,
        goal_kg: f64,
    ) -> f64 {
        let goal = if goal_kg < current_kg {
            Goal::Cutting
        } else if goal_kg > current_kg {
            Goal::Bulking
        } else {
            Goal::Maintenance
        };
        let profile = BodyProfile {
            weight_kg: current_kg,
            height_cm,
            age,
            sex,
            activity_level,
            goal,
        };
        self.calculate_nutrition_profile(&profile).calorie_target
    }
}
