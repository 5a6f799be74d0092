// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end tests over the public API: catalog loading, plan generation
//! in both variants, nutrition targets, and the exercise info fallback.

use std::collections::HashSet;

use fitplan::catalog::{Catalog, DEFAULT_INFO_KEY};
use fitplan::models::{ExperienceLevel, Goal, Sex, Weekday};
use fitplan::nutrition::{compute_nutrition_targets, NutritionInput, ValidationError};
use fitplan::planner::{PlanConstraints, PlanError, PlanGenerator, PlanRequest, PlanVariant};

fn catalog() -> Catalog {
    Catalog::load().expect("embedded catalog loads and validates")
}

fn request(goal: &str, experience: &str) -> PlanRequest {
    PlanRequest {
        goal: goal.to_string(),
        experience: experience.to_string(),
        weight_kg: 70.0,
        height_cm: 175.0,
        constraints: PlanConstraints::default(),
    }
}

#[test]
fn test_embedded_catalog_is_complete() {
    let catalog = catalog();

    assert!(catalog.exercise_pool().len() >= 40);
    assert!(catalog.meal_pool().len() >= 25);

    for goal in [Goal::WeightLoss, Goal::MuscleGain] {
        for level in [ExperienceLevel::Beginner, ExperienceLevel::Intermediate] {
            let week = catalog
                .workout_schedule(goal, level)
                .expect("curated schedule present");
            for day in Weekday::ALL {
                assert_eq!(week[&day].len(), 3, "{goal:?}/{level:?}/{day:?}");
            }
        }
        let meal_week = catalog.meal_schedule(goal).expect("meal schedule present");
        assert_eq!(meal_week.len(), 7);
    }
}

#[test]
fn test_randomized_plan_shape_and_catalog_membership() {
    let catalog = catalog();
    let generator = PlanGenerator::new(&catalog);

    let plan = generator
        .generate_seeded(&request("weightLoss", "beginner"), 11)
        .unwrap();

    let mut days = 0;
    for (_, day) in plan.days() {
        days += 1;
        assert_eq!(day.exercises.len(), 3);

        let names: HashSet<&str> = day.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), 3, "exercises repeat within a day");

        for exercise in &day.exercises {
            assert!(catalog.exercise_by_name(&exercise.name).is_some());
        }
        for meal in [&day.meals.breakfast, &day.meals.lunch, &day.meals.dinner] {
            assert!(catalog.meal_by_name(&meal.name).is_some());
        }
    }
    assert_eq!(days, 7);
}

#[test]
fn test_seeded_plans_are_reproducible() {
    let catalog = catalog();
    let generator = PlanGenerator::new(&catalog);
    let req = request("muscleGain", "intermediate");

    let a = generator.generate_seeded(&req, 2024).unwrap();
    let b = generator.generate_seeded(&req, 2024).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_curated_plans_are_deterministic() {
    let catalog = catalog();
    let generator = PlanGenerator::with_variant(&catalog, PlanVariant::Curated);
    let req = request("muscleGain", "beginner");

    let a = generator.generate_seeded(&req, 1).unwrap();
    let b = generator.generate_seeded(&req, 999).unwrap();
    assert_eq!(a, b);

    // The curated plan is the published schedule verbatim.
    let week = catalog
        .workout_schedule(Goal::MuscleGain, ExperienceLevel::Beginner)
        .unwrap();
    assert_eq!(a.wednesday.exercises, week[&Weekday::Wednesday]);
}

#[test]
fn test_unknown_goal_is_rejected() {
    let catalog = catalog();
    let generator = PlanGenerator::new(&catalog);

    let err = generator
        .generate_seeded(&request("getSwole", "beginner"), 5)
        .unwrap_err();
    assert!(matches!(err, PlanError::UnknownGoal(ref g) if g == "getSwole"));
}

#[test]
fn test_advanced_level_serves_intermediate_content() {
    let catalog = catalog();

    let randomized = PlanGenerator::new(&catalog)
        .generate_seeded(&request("weightLoss", "advanced"), 8)
        .unwrap();
    for (_, day) in randomized.days() {
        for exercise in &day.exercises {
            assert_eq!(exercise.level, ExperienceLevel::Intermediate);
        }
    }

    let curated = PlanGenerator::with_variant(&catalog, PlanVariant::Curated);
    let advanced = curated
        .generate_seeded(&request("weightLoss", "advanced"), 1)
        .unwrap();
    let intermediate = curated
        .generate_seeded(&request("weightLoss", "intermediate"), 1)
        .unwrap();
    assert_eq!(advanced, intermediate);
}

#[test]
fn test_vegetarian_plans_only_contain_vegetarian_meals() {
    let catalog = catalog();
    let generator = PlanGenerator::new(&catalog);

    let mut req = request("weightLoss", "beginner");
    req.constraints.vegetarian_only = true;

    for seed in 0..5 {
        let plan = generator.generate_seeded(&req, seed).unwrap();
        for (_, day) in plan.days() {
            for meal in [&day.meals.breakfast, &day.meals.lunch, &day.meals.dinner] {
                assert!(meal.veg, "{} is not vegetarian", meal.name);
            }
        }
    }
}

#[test]
fn test_nutrition_reference_chain() {
    let targets = compute_nutrition_targets(&NutritionInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
        goal: Goal::MuscleGain,
    })
    .unwrap();

    assert_eq!(targets.calories, 3056);
    assert_eq!(targets.protein, 140);
    assert_eq!(targets.fats, 70);
    assert_eq!(targets.carbs, 466);
}

#[test]
fn test_nutrition_rejects_implausible_inputs() {
    let err = compute_nutrition_targets(&NutritionInput {
        weight_kg: 500.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
        goal: Goal::WeightLoss,
    })
    .unwrap_err();
    assert_eq!(err, ValidationError::WeightOutOfRange(500.0));
}

#[test]
fn test_exercise_info_lookup_and_fallback() {
    let catalog = catalog();

    assert!(catalog.has_exercise_info("bench"));
    let bench = catalog.exercise_info("bench");
    assert!(!bench.instructions.is_empty());

    // Unknown ids get the shared generic record, never an error.
    assert!(!catalog.has_exercise_info("underwaterBasketWeaving"));
    let fallback = catalog.exercise_info("underwaterBasketWeaving");
    assert_eq!(fallback, catalog.exercise_info(DEFAULT_INFO_KEY));
}

#[test]
fn test_plans_serialize_to_json() {
    let catalog = catalog();
    let plan = PlanGenerator::new(&catalog)
        .generate_seeded(&request("muscleGain", "beginner"), 3)
        .unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("monday").is_some());
    assert!(value["sunday"]["meals"]["dinner"].get("calories").is_some());
}
