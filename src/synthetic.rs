// ABOUTME: Deterministic synthetic body-weight data generator for demos, tests and benchmarks
// ABOUTME: Produces ordered daily observation sequences for loss, gain and maintenance patterns
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Synthetic weight data
//!
//! Sequences are reproducible for a given seed: the generator uses
//! `ChaCha8Rng`, whose output is stable across platforms and `rand` releases.

use chrono::{DateTime, Duration, Utc};
use fitness_core::Observation;
use fitness_intelligence::math::round1;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Daily noise half-width for trending sequences (kg)
pub const TREND_NOISE_KG: f64 = 0.3;
/// Daily noise half-width for maintenance sequences (kg)
pub const MAINTENANCE_NOISE_KG: f64 = 0.5;

/// Builder for reproducible body-weight logs
///
/// ```
/// use chrono::Utc;
/// use fitness_metrics::synthetic::SyntheticWeightGenerator;
///
/// let mut generator = SyntheticWeightGenerator::new(42);
/// let log = generator.weight_loss_trend(85.0, 83.0, 30, Utc::now());
/// assert_eq!(log.len(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticWeightGenerator {
    seed: u64,
    subject_id: i64,
    rng: ChaCha8Rng,
}

impl SyntheticWeightGenerator {
    /// Create a generator with a deterministic seed, for subject `1`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            subject_id: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Attribute generated observations to another subject
    #[must_use]
    pub const fn with_subject(mut self, subject_id: i64) -> Self {
        self.subject_id = subject_id;
        self
    }

    /// Seed this generator was created with
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Daily readings drifting from `start_kg` toward `target_kg`
    ///
    /// Each day adds the average daily change plus up to ±0.3 kg of noise, then
    /// clamps between `start_kg` and `target_kg` and rounds to one decimal. The
    /// last reading is stamped at `end`.
    pub fn weight_loss_trend(
        &mut self,
        start_kg: f64,
        target_kg: f64,
        days: u32,
        end: DateTime<Utc>,
    ) -> Vec<Observation> {
        if days == 0 {
            return Vec::new();
        }
        let daily_change = (target_kg - start_kg) / f64::from(days);
        let (low, high) = (start_kg.min(target_kg), start_kg.max(target_kg));

        let mut current = start_kg;
        let mut observations = Vec::with_capacity(days as usize);
        for day in 0..days {
            let noise = self.rng.gen_range(-TREND_NOISE_KG..=TREND_NOISE_KG);
            current = round1((current + daily_change + noise).clamp(low, high));
            observations.push(self.observation(current, end, days, day));
        }
        observations
    }

    /// Daily readings rising from `start_kg` toward `target_kg`
    pub fn weight_gain_trend(
        &mut self,
        start_kg: f64,
        target_kg: f64,
        days: u32,
        end: DateTime<Utc>,
    ) -> Vec<Observation> {
        self.weight_loss_trend(start_kg, target_kg, days, end)
    }

    /// Daily readings fluctuating up to ±0.5 kg around `weight_kg`
    pub fn maintenance_trend(
        &mut self,
        weight_kg: f64,
        days: u32,
        end: DateTime<Utc>,
    ) -> Vec<Observation> {
        let mut observations = Vec::with_capacity(days as usize);
        for day in 0..days {
            let noise = self
                .rng
                .gen_range(-MAINTENANCE_NOISE_KG..=MAINTENANCE_NOISE_KG);
            observations.push(self.observation(round1(weight_kg + noise), end, days, day));
        }
        observations
    }

    /// A healthy month: 85.0 kg down to 83.0 kg over 30 days
    pub fn realistic_30_day(&mut self, end: DateTime<Utc>) -> Vec<Observation> {
        self.weight_loss_trend(85.0, 83.0, 30, end)
    }

    fn observation(&self, value: f64, end: DateTime<Utc>, days: u32, day: u32) -> Observation {
        let instant = end - Duration::days(i64::from(days - 1 - day));
        Observation {
            subject_id: self.subject_id,
            value,
            timestamp_ms: instant.timestamp_millis(),
        }
    }
}
