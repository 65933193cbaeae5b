// ABOUTME: Core types and constants for the fitness metrics computation engine
// ABOUTME: Foundation crate with error handling, formula constants, units, and input models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Core
//!
//! Foundation crate providing shared types and constants for the fitness
//! metrics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Named formula constants organized by domain
//! - **models**: Immutable input values (observations, lift attempts, body profiles)

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula constants and unit conversion organized by domain
pub mod constants;

/// Input value types handed to the engine by collaborators
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{ActivityLevel, BodyProfile, Goal, LiftAttempt, Observation, Sex};
