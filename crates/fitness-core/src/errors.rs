// ABOUTME: Unified error types for input validation and parsing across the engine
// ABOUTME: Provides AppError with stable error codes and convenience constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The analyzers themselves never fail: insufficient data and formula domain
//! violations degrade to documented sentinel values. Errors only surface at
//! the edges, when collaborators construct validated input values or parse
//! enum names from user-facing strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a structural or semantic check
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Text could not be parsed into the expected value
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside the physically plausible range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Engine configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Numeric code, grouped by category
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unparseable text
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside its valid range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::invalid_input("Weight must be positive");
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: Weight must be positive"
        );
    }

    #[test]
    fn test_error_code_numbers_are_grouped() {
        assert_eq!(ErrorCode::InvalidInput.as_u16(), 3000);
        assert_eq!(ErrorCode::ValueOutOfRange.as_u16(), 3003);
        assert_eq!(ErrorCode::ConfigInvalid.as_u16(), 6002);
    }
}
