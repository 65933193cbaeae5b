// ABOUTME: Main library entry point for the fitness metrics computation engine
// ABOUTME: Re-exports core types and analyzers, plus logging setup and synthetic data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Metrics
//!
//! A deterministic, stateless analytics layer that turns body-weight logs,
//! single lift attempts and body profiles into derived metrics: trend
//! detection, goal forecasting, training-load guidance and nutrition targets.
//!
//! ## Architecture
//!
//! - **`fitness-core`**: errors, formula constants, units and input values
//! - **`fitness-intelligence`**: configuration, analyzers and the `MetricsEngine` facade
//! - **this crate**: re-exports, logging setup, synthetic data and the `fitness-demo` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_metrics::intelligence::MetricsEngine;
//! use fitness_metrics::models::{ActivityLevel, BodyProfile, Goal, Sex};
//!
//! let engine = MetricsEngine::new();
//! let profile = BodyProfile::new(85.0, 180.0, 28, Sex::Male, ActivityLevel::Moderate, Goal::Cutting)?;
//! let nutrition = engine.calculate_nutrition_profile(&profile);
//! assert!(nutrition.calorie_target >= 1500.0);
//! # Ok::<(), fitness_metrics::errors::AppError>(())
//! ```

/// Formula constants and unit conversion (from `fitness-core`)
pub use fitness_core::constants;
/// Error types (from `fitness-core`)
pub use fitness_core::errors;
/// Input value types (from `fitness-core`)
pub use fitness_core::models;

/// Analyzers, configuration and result records
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Deterministic synthetic body-weight data
pub mod synthetic;
