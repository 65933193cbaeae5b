// ABOUTME: Fitness metrics analyzers extracted into a standalone crate
// ABOUTME: Trend, strength and nutrition computations plus the MetricsEngine facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Intelligence
//!
//! Deterministic, stateless analytics over body-weight logs, lift attempts
//! and body profiles. Every operation is a pure function of its inputs and
//! configuration: no I/O, no shared mutable state, safe to call from any
//! number of threads.
//!
//! Insufficient data and formula domain violations yield documented sentinel
//! values rather than errors.

/// Engine configuration and validation
pub mod config;
/// Aggregating facade and result records
pub mod engine;
/// Rounding and descriptive statistics helpers
pub mod math;
/// Energy and macronutrient targets
pub mod nutrition_calculator;
/// One-rep-max, volume and training load heuristics
pub mod strength_analyzer;
/// Weight trend detection and forecasting
pub mod trend_analyzer;

pub use config::{ConfigError, EngineConfig, NutritionConfig, StrengthConfig, TrendAnalysisConfig};
pub use engine::{MetricsEngine, NutritionResult, StrengthResult, TrendResult};
pub use nutrition_calculator::{BmiCategory, MacroTargets, NutritionCalculator};
pub use strength_analyzer::{StrengthAnalyzer, StrengthTier};
pub use trend_analyzer::{TrendAnalyzer, TrendLabel};
