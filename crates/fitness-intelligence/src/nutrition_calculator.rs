// ABOUTME: Energy and macronutrient targets from body profile, activity level and goal
// ABOUTME: Mifflin-St Jeor BMR, TDEE, goal-adjusted calories with safety floors, macros, BMI, water
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
//!   expenditure in healthy individuals. *Am J Clin Nutr*, 51(2), 241-247.
//! - Jäger, R., et al. (2017). International Society of Sports Nutrition
//!   Position Stand: protein and exercise. *JISSN*, 14(1), 20.
//!
//! Calorie targets never drop below the sex-specific safety floor; the floor
//! replaces the computed value silently.

use crate::config::NutritionConfig;
use crate::math::round1;
use fitness_core::constants::bmi::{NORMAL_THRESHOLD, OVERWEIGHT_THRESHOLD, UNDERWEIGHT_THRESHOLD};
use fitness_core::constants::macros::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use fitness_core::constants::units::CM_PER_METER;
use fitness_core::{ActivityLevel, BodyProfile, Goal, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// WHO BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to 24.9
    Normal,
    /// Above 24.9 up to 29.9
    Overweight,
    /// Above 29.9
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Nutrition calculator
#[derive(Debug, Clone, Default)]
pub struct NutritionCalculator {
    config: NutritionConfig,
}

impl NutritionCalculator {
    /// Create a calculator with default coefficients
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom coefficients
    #[must_use]
    pub const fn with_config(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Basal metabolic rate (Mifflin-St Jeor), whole kcal
    #[must_use]
    pub fn bmr(&self, weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
        let bmr = &self.config.bmr;
        let base = bmr.msj_weight_coef.mul_add(
            weight_kg,
            bmr.msj_height_coef
                .mul_add(height_cm, -bmr.msj_age_coef * f64::from(age)),
        );
        (base + bmr.sex_constant(sex)).round()
    }

    /// Total daily energy expenditure, whole kcal
    #[must_use]
    pub fn tdee(&self, bmr: f64, activity_level: ActivityLevel) -> f64 {
        (bmr * self.config.activity_factors.factor(activity_level)).round()
    }

    /// TDEE straight from a body profile
    #[must_use]
    pub fn tdee_for_profile(&self, profile: &BodyProfile) -> f64 {
        let bmr = self.bmr(profile.weight_kg, profile.height_cm, profile.age, profile.sex);
        self.tdee(bmr, profile.activity_level)
    }

    /// Goal-adjusted calorie target before the safety floor, whole kcal
    #[must_use]
    pub fn calorie_target(&self, tdee: f64, goal: Goal) -> f64 {
        let calories = &self.config.calories;
        let target = match goal {
            Goal::Cutting => tdee - calories.cutting_deficit_kcal,
            Goal::Bulking => tdee + calories.bulking_surplus_kcal,
            Goal::Maintenance => tdee,
        };
        target.round()
    }

    /// Raise `target` to the sex-specific safety floor when below it
    #[must_use]
    pub fn validate_floor(&self, target: f64, sex: Sex) -> f64 {
        let floor = self.config.calories.floor(sex);
        if target < floor {
            info!(target, floor, sex = sex.name(), "Calorie target raised to safety floor");
        }
        target.max(floor)
    }

    /// Split calories into macronutrient grams for a goal
    #[must_use]
    pub fn macros(&self, total_calories: f64, goal: Goal) -> MacroTargets {
        let (protein_pct, carbs_pct, fat_pct) = self.config.macro_splits.for_goal(goal).as_tuple();
        let grams = |pct: u8, kcal_per_gram: f64| {
            (total_calories * f64::from(pct) / 100.0 / kcal_per_gram).round()
        };
        MacroTargets {
            protein_g: grams(protein_pct, KCAL_PER_GRAM_PROTEIN),
            carbs_g: grams(carbs_pct, KCAL_PER_GRAM_CARBS),
            fat_g: grams(fat_pct, KCAL_PER_GRAM_FAT),
        }
    }

    /// Daily protein requirement from bodyweight and goal, whole grams
    #[must_use]
    pub fn protein_requirement(&self, weight_kg: f64, goal: Goal) -> f64 {
        (weight_kg * self.config.protein.for_goal(goal)).round()
    }

    /// Body mass index, one decimal; `0.0` for non-positive height
    #[must_use]
    pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
        if height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = height_cm / CM_PER_METER;
        round1(weight_kg / (height_m * height_m))
    }

    /// WHO band for a BMI, upper bounds inclusive
    #[must_use]
    pub fn bmi_category(bmi: f64) -> BmiCategory {
        if bmi < UNDERWEIGHT_THRESHOLD {
            BmiCategory::Underweight
        } else if bmi <= NORMAL_THRESHOLD {
            BmiCategory::Normal
        } else if bmi <= OVERWEIGHT_THRESHOLD {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Daily water target in liters, one decimal
    #[must_use]
    pub fn water_intake(&self, weight_kg: f64, activity_level: ActivityLevel) -> f64 {
        let water = &self.config.water;
        let base = weight_kg * water.liters_per_kg;
        if activity_level.is_highly_active() {
            round1(base * water.active_multiplier)
        } else {
            round1(base)
        }
    }
}
