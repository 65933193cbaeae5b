// ABOUTME: Unit conversion constants for mass and time
// ABOUTME: Canonical pound/kilogram factor and millisecond-to-day conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilograms per avoirdupois pound (exact, international yard and pound agreement of 1959)
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 1.0 / KG_PER_LB;

/// Milliseconds per day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Convert pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Convert kilograms to pounds
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LB_PER_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pound_conversion_is_reversible() {
        for lbs in [1.0, 135.0, 187.4, 405.0] {
            assert!((kg_to_lbs(lbs_to_kg(lbs)) - lbs).abs() < 1e-9);
        }
    }

    #[test]
    fn test_one_hundred_kg_in_pounds() {
        assert!((kg_to_lbs(100.0) - 220.462_262).abs() < 1e-6);
    }
}
