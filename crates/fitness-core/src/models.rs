// ABOUTME: Immutable input values handed to the metrics engine by collaborators
// ABOUTME: Observation, LiftAttempt, BodyProfile and their enum parameters with validated constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn ensure_positive(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Biological sex used by sex-specific formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Stable lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_format(format!(
                "Unknown sex: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Habitual activity level, ordered from least to most active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Athlete or physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Stable snake-case name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Whether this level warrants extra hydration
    #[must_use]
    pub const fn is_highly_active(&self) -> bool {
        matches!(self, Self::Active | Self::VeryActive)
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "moderate" | "moderately_active" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" | "veryactive" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_format(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, light, moderate, active, very_active"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    /// Hold current weight
    #[default]
    Maintenance,
    /// Lose fat
    Cutting,
    /// Gain muscle
    Bulking,
}

impl Goal {
    /// Stable lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Cutting => "cutting",
            Self::Bulking => "bulking",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            "cutting" | "cut" | "lose" => Ok(Self::Cutting),
            "bulking" | "bulk" | "gain" => Ok(Self::Bulking),
            other => Err(AppError::invalid_format(format!(
                "Unknown goal: '{other}'. Valid options: maintenance, cutting, bulking"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One body-weight reading
///
/// Sequences handed to the engine must be sorted ascending by `timestamp_ms`;
/// the engine never sorts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Owner of the reading
    pub subject_id: i64,
    /// Weight in kilograms
    pub value: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
}

impl Observation {
    /// Create a validated observation
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a positive finite number
    pub fn new(subject_id: i64, value: f64, timestamp_ms: i64) -> AppResult<Self> {
        ensure_positive("Observation value", value)?;
        Ok(Self {
            subject_id,
            value,
            timestamp_ms,
        })
    }

    /// Create a validated observation from a UTC instant
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a positive finite number
    pub fn at(subject_id: i64, value: f64, instant: DateTime<Utc>) -> AppResult<Self> {
        Self::new(subject_id, value, instant.timestamp_millis())
    }

    /// Timestamp as a UTC instant, `None` if out of chrono's range
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}

/// One working set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftAttempt {
    /// Load lifted (kg)
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Lifter's bodyweight (kg)
    pub body_weight: f64,
    /// Volume of the comparable previous set, `0.0` when there is no history
    pub previous_volume: f64,
}

impl LiftAttempt {
    /// Create a validated lift attempt
    ///
    /// # Errors
    ///
    /// Returns an error if weights are not positive, `reps` is zero,
    /// or `previous_volume` is negative
    pub fn new(weight: f64, reps: u32, body_weight: f64, previous_volume: f64) -> AppResult<Self> {
        ensure_positive("Lift weight", weight)?;
        ensure_positive("Body weight", body_weight)?;
        if reps == 0 {
            return Err(AppError::invalid_input("Reps must be at least 1"));
        }
        if !previous_volume.is_finite() || previous_volume < 0.0 {
            return Err(AppError::out_of_range(format!(
                "Previous volume must be zero or positive, got {previous_volume}"
            )));
        }
        Ok(Self {
            weight,
            reps,
            body_weight,
            previous_volume,
        })
    }
}

/// Body and lifestyle parameters for nutrition targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Habitual activity
    pub activity_level: ActivityLevel,
    /// Body composition goal
    pub goal: Goal,
}

impl BodyProfile {
    /// Upper bound accepted for age
    pub const MAX_AGE: u32 = 150;

    /// Create a validated body profile
    ///
    /// # Errors
    ///
    /// Returns an error if weight or height are not positive, or age is
    /// zero or above [`Self::MAX_AGE`]
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        sex: Sex,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> AppResult<Self> {
        ensure_positive("Weight", weight_kg)?;
        ensure_positive("Height", height_cm)?;
        if age == 0 || age > Self::MAX_AGE {
            return Err(AppError::out_of_range(format!(
                "Age must be between 1 and {}, got {age}",
                Self::MAX_AGE
            )));
        }
        Ok(Self {
            weight_kg,
            height_cm,
            age,
            sex,
            activity_level,
            goal,
        })
    }
}
