// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Fixed nutrition factors, plan shape constants, profile validation ranges,
//! and environment-based configuration values.

use std::env;

/// Nutrition arithmetic constants. These mirror the formulas the content was
/// authored against and are deliberately not configurable.
pub mod nutrition {
    /// Fixed TDEE multiplier ("moderate activity")
    pub const ACTIVITY_MULTIPLIER: f64 = 1.55;

    /// Flat calorie deficit/surplus applied on top of TDEE (kcal)
    pub const CALORIE_ADJUSTMENT: f64 = 500.0;

    /// Protein grams per kg body weight for muscle gain
    pub const PROTEIN_FACTOR_MUSCLE_GAIN: f64 = 2.0;

    /// Protein grams per kg body weight for all other goals
    pub const PROTEIN_FACTOR_DEFAULT: f64 = 1.6;

    /// Fat grams per kg body weight
    pub const FAT_FACTOR: f64 = 1.0;

    /// Energy density of protein (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Energy density of carbohydrate (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Energy density of fat (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Mifflin-St Jeor sex offset for males (kcal)
    pub const BMR_OFFSET_MALE: f64 = 5.0;

    /// Mifflin-St Jeor sex offset applied to everyone else (kcal)
    pub const BMR_OFFSET_FEMALE: f64 = -161.0;
}

/// Plan shape constants.
pub mod plan {
    /// Days in a generated plan
    pub const DAYS_PER_WEEK: usize = 7;

    /// Exercises selected per day
    pub const EXERCISES_PER_DAY: usize = 3;

    /// Meal slots per day (breakfast, lunch, dinner)
    pub const MEALS_PER_DAY: usize = 3;
}

/// Physiological input ranges, taken from the profile form limits.
pub mod validation {
    /// Accepted body weight range (kg)
    pub const WEIGHT_KG_RANGE: std::ops::RangeInclusive<f64> = 30.0..=300.0;

    /// Accepted height range (cm)
    pub const HEIGHT_CM_RANGE: std::ops::RangeInclusive<f64> = 100.0..=250.0;

    /// Accepted age range (years)
    pub const AGE_YEARS_RANGE: std::ops::RangeInclusive<u32> = 16..=100;
}

/// Environment-based configuration.
pub mod env_config {
    use super::env;

    /// Get the catalog data directory override, if set
    pub fn data_dir() -> Option<String> {
        env::var("FITPLAN_DATA_DIR").ok()
    }

    /// Get the config file path override, if set
    pub fn config_path() -> Option<String> {
        env::var("FITPLAN_CONFIG").ok()
    }

    /// Get the profile file path override, if set
    pub fn profile_path() -> Option<String> {
        env::var("FITPLAN_PROFILE").ok()
    }

    /// Get log level from environment or default
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    }
}

/// Service identity constants.
pub mod service {
    /// Service name for structured logging
    pub const SERVICE_NAME: &str = "fitplan";

    /// Service version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_constants() {
        assert_eq!(nutrition::ACTIVITY_MULTIPLIER, 1.55);
        assert_eq!(nutrition::CALORIE_ADJUSTMENT, 500.0);
        assert_eq!(nutrition::PROTEIN_FACTOR_MUSCLE_GAIN, 2.0);
        assert_eq!(nutrition::PROTEIN_FACTOR_DEFAULT, 1.6);
    }

    #[test]
    fn test_validation_ranges() {
        assert!(validation::WEIGHT_KG_RANGE.contains(&70.0));
        assert!(!validation::WEIGHT_KG_RANGE.contains(&10.0));
        assert!(validation::HEIGHT_CM_RANGE.contains(&175.0));
        assert!(validation::AGE_YEARS_RANGE.contains(&30));
        assert!(!validation::AGE_YEARS_RANGE.contains(&12));
    }

    #[test]
    fn test_plan_shape() {
        assert_eq!(plan::DAYS_PER_WEEK, 7);
        assert_eq!(plan::EXERCISES_PER_DAY, 3);
        assert_eq!(plan::MEALS_PER_DAY, 3);
    }
}
