// ABOUTME: Command-line demo running trend, nutrition and strength analysis end to end
// ABOUTME: Generates seeded synthetic weight data and prints summaries or JSON result records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness metrics demo.
//!
//! Usage:
//! ```bash
//! # Human-readable summaries
//! cargo run --bin fitness-demo
//!
//! # Reproducible 60-day log, JSON output
//! cargo run --bin fitness-demo -- --seed 7 --days 60 --json
//!
//! # Female lifter, bulking, with a previous set to compare against
//! cargo run --bin fitness-demo -- --sex female --goal bulking --previous-volume 450
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use fitness_metrics::intelligence::{EngineConfig, MetricsEngine};
use fitness_metrics::logging::LoggingConfig;
use fitness_metrics::models::{ActivityLevel, BodyProfile, Goal, LiftAttempt, Sex};
use fitness_metrics::synthetic::SyntheticWeightGenerator;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitness-demo",
    about = "Fitness metrics engine demo",
    long_about = "Analyze a synthetic body-weight log, a nutrition profile and a workout set"
)]
struct DemoArgs {
    /// Random seed for reproducible data
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of daily weight readings to generate
    #[arg(long, default_value = "30")]
    days: u32,

    /// First simulated weight (kg)
    #[arg(long, default_value = "85.0")]
    start_weight: f64,

    /// Weight the simulated log drifts toward (kg)
    #[arg(long, default_value = "83.0")]
    target_weight: f64,

    /// Goal weight used for the days-to-goal estimate (kg)
    #[arg(long, default_value = "80.0")]
    goal_weight: f64,

    /// Height (cm)
    #[arg(long, default_value = "180.0")]
    height: f64,

    /// Age (years)
    #[arg(long, default_value = "28")]
    age: u32,

    /// Biological sex (male, female)
    #[arg(long, default_value = "male")]
    sex: Sex,

    /// Activity level (sedentary, light, moderate, active, very_active)
    #[arg(long, default_value = "moderate")]
    activity: ActivityLevel,

    /// Nutrition goal (maintenance, cutting, bulking)
    #[arg(long, default_value = "cutting")]
    goal: Goal,

    /// Working set load (kg)
    #[arg(long, default_value = "100.0")]
    lift_weight: f64,

    /// Working set repetitions
    #[arg(long, default_value = "5")]
    reps: u32,

    /// Volume of the previous comparable set (0 for none)
    #[arg(long, default_value = "0.0")]
    previous_volume: f64,

    /// Print result records as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = EngineConfig::load().context("Invalid engine configuration")?;
    let engine = MetricsEngine::with_config(config);

    info!(seed = args.seed, days = args.days, "Generating synthetic weight log");
    let mut generator = SyntheticWeightGenerator::new(args.seed);
    let log = generator.weight_loss_trend(
        args.start_weight,
        args.target_weight,
        args.days,
        Utc::now(),
    );

    let profile = BodyProfile::new(
        args.start_weight,
        args.height,
        args.age,
        args.sex,
        args.activity,
        args.goal,
    )?;
    let attempt = LiftAttempt::new(
        args.lift_weight,
        args.reps,
        args.start_weight,
        args.previous_volume,
    )?;

    let trend = engine.analyze_weight_trend(&log, args.goal_weight);
    let nutrition = engine.calculate_nutrition_profile(&profile);
    let strength = engine.analyze_workout_set(&attempt);

    if args.json {
        let report = json!({
            "seed": args.seed,
            "trend": trend,
            "nutrition": nutrition,
            "strength": strength,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Weight Trend ({} readings) ===", log.len());
    match &trend {
        Some(trend) => {
            println!(
                "Current: {:.1}kg | 7-day avg: {:.1}kg | 30-day avg: {:.1}kg",
                trend.current_value, trend.short_term_average, trend.long_term_average
            );
            println!("{} ({})", trend.trend_description(), trend.trend);
            match trend.forecast() {
                Some(forecast) => println!("Forecast: {forecast:.1}kg"),
                None => println!("Forecast: not enough data"),
            }
            println!("{}", trend.goal_progress_message());
            println!("Consistency (std dev): {:.2}kg", trend.standard_deviation);
        }
        None => println!("No readings to analyze"),
    }

    println!();
    println!("=== Nutrition ({}, {}) ===", nutrition.goal, nutrition.activity_level);
    println!("{}", nutrition.summary());
    println!("Calorie balance: {:+.0} cal/day", nutrition.calorie_balance);

    println!();
    println!("=== Workout Set ===");
    println!("{}", strength.performance_summary());
    println!("{}", strength.progress_message());

    Ok(())
}
