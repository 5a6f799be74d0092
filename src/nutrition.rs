// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Nutrition Target Calculator
//!
//! Derives daily calorie and macronutrient targets from physiological
//! inputs using the Mifflin-St Jeor equation:
//!
//! 1. BMR = 10·weight + 6.25·height − 5·age + sex offset
//! 2. TDEE = BMR × 1.55 (fixed moderate-activity multiplier)
//! 3. Calories = TDEE − 500 (weight loss) or TDEE + 500 (muscle gain)
//! 4. Protein/fat by body-weight factor; carbs fill the remaining energy
//!
//! The chain runs in floating point end to end; each output is rounded
//! exactly once at the very end. Carbohydrates are the remainder term and
//! may come out negative for extreme inputs — that is returned as-is so
//! the caller can surface it rather than masking the inconsistency.

use tracing::debug;

use crate::constants::{nutrition as factors, validation};
use crate::models::{Goal, NutritionTargets, Sex};

/// Rejection of a physiologically implausible input. Each variant names the
/// offending field and the accepted range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("weight {0} kg is outside the accepted range 30-300 kg")]
    WeightOutOfRange(f64),

    #[error("height {0} cm is outside the accepted range 100-250 cm")]
    HeightOutOfRange(f64),

    #[error("age {0} is outside the accepted range 16-100 years")]
    AgeOutOfRange(u32),
}

/// Physiological inputs to the target calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex, selects the BMR offset
    pub sex: Sex,
    /// Fitness goal, selects calorie direction and protein factor
    pub goal: Goal,
}

impl NutritionInput {
    /// Validate inputs against the accepted physiological ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !validation::WEIGHT_KG_RANGE.contains(&self.weight_kg) {
            return Err(ValidationError::WeightOutOfRange(self.weight_kg));
        }
        if !validation::HEIGHT_CM_RANGE.contains(&self.height_cm) {
            return Err(ValidationError::HeightOutOfRange(self.height_cm));
        }
        if !validation::AGE_YEARS_RANGE.contains(&self.age_years) {
            return Err(ValidationError::AgeOutOfRange(self.age_years));
        }
        Ok(())
    }
}

/// Compute daily nutrition targets for validated inputs.
pub fn compute_nutrition_targets(
    input: &NutritionInput,
) -> Result<NutritionTargets, ValidationError> {
    input.validate()?;

    let sex_offset = match input.sex {
        Sex::Male => factors::BMR_OFFSET_MALE,
        Sex::Female | Sex::Other => factors::BMR_OFFSET_FEMALE,
    };
    let bmr = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * f64::from(input.age_years)
        + sex_offset;
    let tdee = bmr * factors::ACTIVITY_MULTIPLIER;

    let calories = match input.goal {
        Goal::WeightLoss => tdee - factors::CALORIE_ADJUSTMENT,
        Goal::MuscleGain => tdee + factors::CALORIE_ADJUSTMENT,
    };

    let protein_factor = match input.goal {
        Goal::MuscleGain => factors::PROTEIN_FACTOR_MUSCLE_GAIN,
        _ => factors::PROTEIN_FACTOR_DEFAULT,
    };
    let protein = input.weight_kg * protein_factor;
    let fats = input.weight_kg * factors::FAT_FACTOR;
    let carbs = (calories
        - protein * factors::KCAL_PER_GRAM_PROTEIN
        - fats * factors::KCAL_PER_GRAM_FAT)
        / factors::KCAL_PER_GRAM_CARBS;

    debug!(
        nutrition.bmr = bmr,
        nutrition.tdee = tdee,
        nutrition.goal = input.goal.as_key(),
        "Nutrition targets computed"
    );

    Ok(NutritionTargets {
        calories: calories.round() as i64,
        protein: protein.round() as i64,
        carbs: carbs.round() as i64,
        fats: fats.round() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(weight: f64, height: f64, age: u32, sex: Sex, goal: Goal) -> NutritionInput {
        NutritionInput {
            weight_kg: weight,
            height_cm: height,
            age_years: age,
            sex,
            goal,
        }
    }

    #[test]
    fn test_muscle_gain_reference_values() {
        // BMR = 700 + 1093.75 - 150 + 5 = 1648.75
        // TDEE = 1648.75 * 1.55 = 2555.5625, + 500 = 3055.5625
        let targets =
            compute_nutrition_targets(&input(70.0, 175.0, 30, Sex::Male, Goal::MuscleGain))
                .unwrap();
        assert_eq!(targets.calories, 3056);
        assert_eq!(targets.protein, 140);
        assert_eq!(targets.fats, 70);
        assert_eq!(targets.carbs, 466);
    }

    #[test]
    fn test_weight_loss_reference_values() {
        // Same body, opposite calorie direction and the lower protein factor.
        let targets =
            compute_nutrition_targets(&input(70.0, 175.0, 30, Sex::Male, Goal::WeightLoss))
                .unwrap();
        assert_eq!(targets.calories, 2056);
        assert_eq!(targets.protein, 112);
        assert_eq!(targets.fats, 70);
        assert_eq!(targets.carbs, 244);
    }

    #[test]
    fn test_female_and_other_share_the_bmr_offset() {
        let female =
            compute_nutrition_targets(&input(60.0, 165.0, 25, Sex::Female, Goal::WeightLoss))
                .unwrap();
        let other =
            compute_nutrition_targets(&input(60.0, 165.0, 25, Sex::Other, Goal::WeightLoss))
                .unwrap();
        assert_eq!(female, other);
    }

    #[test]
    fn test_male_offset_raises_calories() {
        let male = compute_nutrition_targets(&input(70.0, 175.0, 30, Sex::Male, Goal::WeightLoss))
            .unwrap();
        let female =
            compute_nutrition_targets(&input(70.0, 175.0, 30, Sex::Female, Goal::WeightLoss))
                .unwrap();
        assert!(male.calories > female.calories);
        // Offset difference of 166 kcal scaled by 1.55 is 257.3; the two
        // totals round in opposite directions.
        assert_eq!(male.calories - female.calories, 258);
    }

    #[test]
    fn test_negative_carbs_returned_unclamped() {
        // Small, light, older frame on a deficit: the remainder term goes
        // negative and must not be clamped to zero.
        let targets =
            compute_nutrition_targets(&input(30.0, 100.0, 100, Sex::Female, Goal::WeightLoss))
                .unwrap();
        assert!(targets.carbs < 0, "carbs = {}", targets.carbs);
    }

    #[test]
    fn test_validation_rejects_out_of_range_inputs() {
        let err = compute_nutrition_targets(&input(10.0, 175.0, 30, Sex::Male, Goal::WeightLoss))
            .unwrap_err();
        assert_eq!(err, ValidationError::WeightOutOfRange(10.0));

        let err = compute_nutrition_targets(&input(70.0, 90.0, 30, Sex::Male, Goal::WeightLoss))
            .unwrap_err();
        assert_eq!(err, ValidationError::HeightOutOfRange(90.0));

        let err = compute_nutrition_targets(&input(70.0, 175.0, 12, Sex::Male, Goal::WeightLoss))
            .unwrap_err();
        assert_eq!(err, ValidationError::AgeOutOfRange(12));
    }

    #[test]
    fn test_range_boundaries_accepted() {
        assert!(compute_nutrition_targets(&input(30.0, 100.0, 16, Sex::Male, Goal::MuscleGain))
            .is_ok());
        assert!(
            compute_nutrition_targets(&input(300.0, 250.0, 100, Sex::Male, Goal::MuscleGain))
                .is_ok()
        );
    }
}
