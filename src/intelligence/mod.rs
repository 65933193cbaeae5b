// ABOUTME: Intelligence module re-exports from the fitness-intelligence crate
// ABOUTME: Gives embedders one import path for analyzers, configuration and results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Re-exports the analyzers, configuration and result records from the
//! `fitness-intelligence` crate.

// Re-export all public items from fitness-intelligence
pub use fitness_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::NutritionConfig)
pub use fitness_intelligence::{
    config, engine, math, nutrition_calculator, strength_analyzer, trend_analyzer,
};
