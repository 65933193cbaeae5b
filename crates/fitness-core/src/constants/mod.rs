// ABOUTME: Scientifically-established formula constants grouped by domain
// ABOUTME: Single source of truth for regression thresholds, macro ratios, and safety floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formula constants for the fitness metrics engine
//!
//! Every coefficient used by the analyzers lives here. Engine configuration
//! defaults are built from these values, so the two cannot drift apart.

/// Unit conversion and time constants
pub mod units;

/// Mifflin-St Jeor BMR coefficients and activity multipliers
///
/// References:
/// - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
///   *American Journal of Clinical Nutrition*, 51(2), 241-247.
/// - Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
pub mod energy {
    /// Weight coefficient (kcal per kg)
    pub const MIFFLIN_WEIGHT_FACTOR: f64 = 10.0;
    /// Height coefficient (kcal per cm)
    pub const MIFFLIN_HEIGHT_FACTOR: f64 = 6.25;
    /// Age coefficient (kcal per year, subtracted)
    pub const MIFFLIN_AGE_FACTOR: f64 = 5.0;
    /// Sex constant for males
    pub const MIFFLIN_MALE_CONSTANT: f64 = 5.0;
    /// Sex constant for females
    pub const MIFFLIN_FEMALE_CONSTANT: f64 = -161.0;

    /// Little or no exercise
    pub const ACTIVITY_SEDENTARY: f64 = 1.2;
    /// Exercise 1-3 days/week
    pub const ACTIVITY_LIGHT: f64 = 1.375;
    /// Exercise 3-5 days/week
    pub const ACTIVITY_MODERATE: f64 = 1.55;
    /// Exercise 6-7 days/week
    pub const ACTIVITY_ACTIVE: f64 = 1.725;
    /// Athlete or physical job
    pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

    /// Daily deficit applied when cutting (~0.5 kg/week)
    pub const CUTTING_DEFICIT_KCAL: f64 = 500.0;
    /// Daily surplus applied when bulking (~0.3 kg/week)
    pub const BULKING_SURPLUS_KCAL: f64 = 300.0;
}

/// Macronutrient split percentages and energy density
///
/// Reference: USDA Dietary Guidelines & ISSN Position Stand (2017)
pub mod macros {
    /// Maintenance protein share (%)
    pub const BALANCED_PROTEIN_PCT: u8 = 30;
    /// Maintenance carbohydrate share (%)
    pub const BALANCED_CARBS_PCT: u8 = 40;
    /// Maintenance fat share (%)
    pub const BALANCED_FAT_PCT: u8 = 30;

    /// Cutting protein share (%)
    pub const CUTTING_PROTEIN_PCT: u8 = 40;
    /// Cutting carbohydrate share (%)
    pub const CUTTING_CARBS_PCT: u8 = 30;
    /// Cutting fat share (%)
    pub const CUTTING_FAT_PCT: u8 = 30;

    /// Bulking protein share (%)
    pub const BULKING_PROTEIN_PCT: u8 = 30;
    /// Bulking carbohydrate share (%)
    pub const BULKING_CARBS_PCT: u8 = 50;
    /// Bulking fat share (%)
    pub const BULKING_FAT_PCT: u8 = 20;

    /// Energy density of protein (kcal/g)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy density of carbohydrate (kcal/g)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Energy density of fat (kcal/g)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Protein per kg bodyweight at maintenance
    pub const PROTEIN_G_PER_KG_MAINTENANCE: f64 = 1.6;
    /// Protein per kg bodyweight while cutting (muscle preservation)
    pub const PROTEIN_G_PER_KG_CUTTING: f64 = 2.2;
    /// Protein per kg bodyweight while bulking
    pub const PROTEIN_G_PER_KG_BULKING: f64 = 1.8;
}

/// Hydration guideline: 30-35 ml per kg of bodyweight
pub mod hydration {
    /// Base intake in liters per kg bodyweight
    pub const LITERS_PER_KG: f64 = 0.033;
    /// Extra intake for active and very active people
    pub const ACTIVE_MULTIPLIER: f64 = 1.15;
}

/// BMI category thresholds (WHO)
pub mod bmi {
    /// Below this is underweight
    pub const UNDERWEIGHT_THRESHOLD: f64 = 18.5;
    /// Upper bound (inclusive) of the normal band
    pub const NORMAL_THRESHOLD: f64 = 24.9;
    /// Upper bound (inclusive) of the overweight band
    pub const OVERWEIGHT_THRESHOLD: f64 = 29.9;
}

/// One-rep-max formulas and training load heuristics
///
/// References:
/// - Epley, B. (1985). Poundage Chart. Boyd Epley Workout.
/// - Brzycki, M. (1993). Strength testing: predicting a one-rep max from reps-to-fatigue.
pub mod strength {
    /// Epley: 1RM = w x (1 + r / 30)
    pub const EPLEY_DIVISOR: f64 = 30.0;
    /// Brzycki numerator: 1RM = w x 36 / (37 - r)
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;
    /// Brzycki denominator base
    pub const BRZYCKI_DENOMINATOR_BASE: f64 = 37.0;
    /// Brzycki is singular at and beyond this rep count
    pub const BRZYCKI_MAX_REPS: u32 = 37;

    /// Minimum relative volume increase counted as progressive overload
    pub const PROGRESSIVE_OVERLOAD_THRESHOLD: f64 = 0.025;

    /// Session-to-session volume drop (%) counted as a decline
    pub const DELOAD_DECLINE_PERCENT: f64 = 10.0;
    /// Sessions needed before a deload can be suggested
    pub const DELOAD_MIN_SESSIONS: usize = 3;
    /// Declines needed to suggest a deload
    pub const DELOAD_MIN_DECLINES: usize = 2;

    /// 1RM/bodyweight ratio where intermediate starts
    pub const INTERMEDIATE_RATIO: f64 = 1.0;
    /// 1RM/bodyweight ratio where advanced starts
    pub const ADVANCED_RATIO: f64 = 1.5;
    /// 1RM/bodyweight ratio where elite starts
    pub const ELITE_RATIO: f64 = 2.0;

    /// Rest periods (seconds) by intensity band: >=90%, >=80%, >=70%, below
    pub const REST_MAX_EFFORT_SECS: u32 = 300;
    /// Rest for heavy sets
    pub const REST_HEAVY_SECS: u32 = 180;
    /// Rest for moderate sets
    pub const REST_MODERATE_SECS: u32 = 120;
    /// Rest for light or technique work
    pub const REST_LIGHT_SECS: u32 = 60;
}

/// Trend detection and forecasting thresholds
pub mod statistics {
    /// Minimum observations before a trend label is assigned (one week)
    pub const MIN_DATA_POINTS_FOR_TREND: usize = 7;
    /// Minimum observations before forecasting (two weeks)
    pub const MIN_DATA_POINTS_FOR_PREDICTION: usize = 14;
    /// Short moving average window
    pub const MOVING_AVERAGE_SHORT_WINDOW: usize = 7;
    /// Long moving average window
    pub const MOVING_AVERAGE_LONG_WINDOW: usize = 30;
    /// Weekly change below which weight is considered maintained (kg/week)
    pub const TREND_THRESHOLD_KG_PER_WEEK: f64 = 0.2;
    /// Default forecast horizon (days)
    pub const FORECAST_HORIZON_DAYS: u32 = 30;
    /// Regression denominators below this are treated as zero x-variance
    pub const REGRESSION_EPSILON: f64 = 1e-4;
    /// Daily rates below this mean no momentum toward a goal
    pub const MOMENTUM_EPSILON: f64 = 1e-3;
}

/// Safety limits
///
/// Reference: CDC guidance on safe rates of weight change
pub mod safety {
    /// Fastest recommended loss (kg/week)
    pub const SAFE_WEIGHT_LOSS_MAX_KG_PER_WEEK: f64 = 1.0;
    /// Fastest recommended gain (kg/week)
    pub const SAFE_WEIGHT_GAIN_MAX_KG_PER_WEEK: f64 = 0.5;
    /// Calorie floor for males without medical supervision
    pub const MIN_CALORIES_MALE: f64 = 1500.0;
    /// Calorie floor for females without medical supervision
    pub const MIN_CALORIES_FEMALE: f64 = 1200.0;
}
