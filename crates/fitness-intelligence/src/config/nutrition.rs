// ABOUTME: Nutrition configuration for BMR, activity factors, calorie goals and macro splits
// ABOUTME: Mifflin-St Jeor coefficients, goal adjustments, safety floors, hydration and protein targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fitness_core::constants::{energy, hydration, macros, safety};
use fitness_core::{ActivityLevel, Goal, Sex};
use serde::{Deserialize, Serialize};

/// Highest safety floor an override may set (kcal)
pub const FLOOR_MAX_KCAL: f64 = 2500.0;

/// Nutrition calculator configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments per goal and safety floors
    pub calories: CalorieGoalConfig,
    /// Macro splits per goal
    pub macro_splits: MacroSplitsConfig,
    /// Hydration guideline
    pub water: WaterConfig,
    /// Protein requirement per goal
    pub protein: ProteinConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). *American Journal of Clinical Nutrition*, 51(2), 241-247
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (5.0, subtracted)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: energy::MIFFLIN_WEIGHT_FACTOR,
            msj_height_coef: energy::MIFFLIN_HEIGHT_FACTOR,
            msj_age_coef: energy::MIFFLIN_AGE_FACTOR,
            msj_male_constant: energy::MIFFLIN_MALE_CONSTANT,
            msj_female_constant: energy::MIFFLIN_FEMALE_CONSTANT,
        }
    }
}

impl BmrConfig {
    /// Sex-specific constant
    #[must_use]
    pub const fn sex_constant(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.msj_male_constant,
            Sex::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little or no exercise: 1.2
    pub sedentary: f64,
    /// 1-3 days/week: 1.375
    pub light: f64,
    /// 3-5 days/week: 1.55
    pub moderate: f64,
    /// 6-7 days/week: 1.725
    pub active: f64,
    /// Athlete or physical job: 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: energy::ACTIVITY_SEDENTARY,
            light: energy::ACTIVITY_LIGHT,
            moderate: energy::ACTIVITY_MODERATE,
            active: energy::ACTIVITY_ACTIVE,
            very_active: energy::ACTIVITY_VERY_ACTIVE,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Goal-driven calorie adjustments and safety floors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieGoalConfig {
    /// Subtracted from TDEE when cutting
    pub cutting_deficit_kcal: f64,
    /// Added to TDEE when bulking
    pub bulking_surplus_kcal: f64,
    /// Lowest target ever returned for males
    pub min_calories_male: f64,
    /// Lowest target ever returned for females
    pub min_calories_female: f64,
}

impl Default for CalorieGoalConfig {
    fn default() -> Self {
        Self {
            cutting_deficit_kcal: energy::CUTTING_DEFICIT_KCAL,
            bulking_surplus_kcal: energy::BULKING_SURPLUS_KCAL,
            min_calories_male: safety::MIN_CALORIES_MALE,
            min_calories_female: safety::MIN_CALORIES_FEMALE,
        }
    }
}

impl CalorieGoalConfig {
    /// Safety floor for a sex
    #[must_use]
    pub const fn floor(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.min_calories_male,
            Sex::Female => self.min_calories_female,
        }
    }
}

/// Percentage split of calories across macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share (%)
    pub protein_pct: u8,
    /// Carbohydrate share (%)
    pub carbs_pct: u8,
    /// Fat share (%)
    pub fat_pct: u8,
}

impl MacroSplitConfig {
    /// `(protein, carbs, fat)` percentages
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }
}

/// Macro splits keyed by goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// Maintenance split (30/40/30)
    pub maintenance: MacroSplitConfig,
    /// Cutting split (40/30/30)
    pub cutting: MacroSplitConfig,
    /// Bulking split (30/50/20)
    pub bulking: MacroSplitConfig,
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            maintenance: MacroSplitConfig {
                protein_pct: macros::BALANCED_PROTEIN_PCT,
                carbs_pct: macros::BALANCED_CARBS_PCT,
                fat_pct: macros::BALANCED_FAT_PCT,
            },
            cutting: MacroSplitConfig {
                protein_pct: macros::CUTTING_PROTEIN_PCT,
                carbs_pct: macros::CUTTING_CARBS_PCT,
                fat_pct: macros::CUTTING_FAT_PCT,
            },
            bulking: MacroSplitConfig {
                protein_pct: macros::BULKING_PROTEIN_PCT,
                carbs_pct: macros::BULKING_CARBS_PCT,
                fat_pct: macros::BULKING_FAT_PCT,
            },
        }
    }
}

impl MacroSplitsConfig {
    /// Split for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroSplitConfig {
        match goal {
            Goal::Maintenance => self.maintenance,
            Goal::Cutting => self.cutting,
            Goal::Bulking => self.bulking,
        }
    }

    /// Validate every split sums to 100
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first split that doesn't
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("maintenance", &self.maintenance),
            ("cutting", &self.cutting),
            ("bulking", &self.bulking),
        ];

        for (name, split) in splits {
            let sum = u16::from(split.protein_pct)
                + u16::from(split.carbs_pct)
                + u16::from(split.fat_pct);
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

/// Hydration guideline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterConfig {
    /// Liters per kg bodyweight
    pub liters_per_kg: f64,
    /// Multiplier for active and very active levels
    pub active_multiplier: f64,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            liters_per_kg: hydration::LITERS_PER_KG,
            active_multiplier: hydration::ACTIVE_MULTIPLIER,
        }
    }
}

/// Protein grams per kg bodyweight, per goal
///
/// Reference: Jäger, R., et al. (2017). ISSN Position Stand: protein and exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Maintenance (1.6 g/kg)
    pub maintenance_g_per_kg: f64,
    /// Cutting (2.2 g/kg)
    pub cutting_g_per_kg: f64,
    /// Bulking (1.8 g/kg)
    pub bulking_g_per_kg: f64,
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            maintenance_g_per_kg: macros::PROTEIN_G_PER_KG_MAINTENANCE,
            cutting_g_per_kg: macros::PROTEIN_G_PER_KG_CUTTING,
            bulking_g_per_kg: macros::PROTEIN_G_PER_KG_BULKING,
        }
    }
}

impl ProteinConfig {
    /// Multiplier for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Maintenance => self.maintenance_g_per_kg,
            Goal::Cutting => self.cutting_g_per_kg,
            Goal::Bulking => self.bulking_g_per_kg,
        }
    }
}

impl NutritionConfig {
    /// Validate formula coefficients, factor ordering, splits and floors
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if self.calories.cutting_deficit_kcal < 0.0 || self.calories.bulking_surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie deficit and surplus must not be negative",
            ));
        }
        // Floors may be raised but never lowered below the clinical minimums
        let male_floors = safety::MIN_CALORIES_MALE..=FLOOR_MAX_KCAL;
        let female_floors = safety::MIN_CALORIES_FEMALE..=FLOOR_MAX_KCAL;
        if !male_floors.contains(&self.calories.min_calories_male) {
            return Err(ConfigError::ValueOutOfRange(
                "Male calorie floor must be between 1500 and 2500 kcal",
            ));
        }
        if !female_floors.contains(&self.calories.min_calories_female) {
            return Err(ConfigError::ValueOutOfRange(
                "Female calorie floor must be between 1200 and 2500 kcal",
            ));
        }

        self.macro_splits.validate()?;

        if self.water.liters_per_kg <= 0.0 || self.water.active_multiplier < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Water base must be positive and the active multiplier at least 1.0",
            ));
        }

        let protein = [
            self.protein.maintenance_g_per_kg,
            self.protein.cutting_g_per_kg,
            self.protein.bulking_g_per_kg,
        ];
        if protein.iter().any(|g| !(0.5..=3.0).contains(g)) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein recommendations must be between 0.5 and 3.0 g/kg",
            ));
        }

        Ok(())
    }
}
