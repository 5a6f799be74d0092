// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Weekly Plan Generator
//!
//! Assembles a seven-day workout and meal plan from the content catalog.
//! Two variants are supported:
//!
//! - **Curated**: deterministic lookup of the hand-authored goal+level
//!   schedule, zipped with the goal meal schedule by weekday. Identical
//!   inputs yield identical output.
//! - **Randomized**: per-day sampling from the level-filtered exercise pool
//!   and the (optionally vegetarian-restricted) meal pool. The random source
//!   is threaded explicitly, so callers that need reproducible plans can
//!   seed it.
//!
//! Goal and experience keys arrive as free-form strings from the profile
//! layer; an unrecognized goal fails loudly with [`PlanError::UnknownGoal`]
//! rather than silently defaulting. The one defined fallback is experience:
//! `advanced` resolves to `intermediate` content before any failure.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::constants::plan::EXERCISES_PER_DAY;
use crate::models::{
    DailyMeals, DailyPlan, Exercise, ExperienceLevel, Goal, Meal, Weekday, WeeklyPlan,
};

/// Plan generation errors. Configuration problems (unknown tables) surface
/// here; they are terminal for the request and never retried.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("unknown goal '{0}', expected one of: weightLoss, muscleGain")]
    UnknownGoal(String),

    #[error("unknown experience level '{0}', expected one of: beginner, intermediate, advanced")]
    UnknownExperienceLevel(String),

    #[error("no curated schedule for goal {goal:?} at level {level:?}")]
    MissingSchedule { goal: Goal, level: ExperienceLevel },

    #[error("curated schedule for {goal:?}/{level:?} has no entry for {day:?}")]
    IncompleteSchedule {
        goal: Goal,
        level: ExperienceLevel,
        day: Weekday,
    },

    #[error("exercise pool for level {level:?} holds {count} entries, need at least {required}")]
    InsufficientExercises {
        level: ExperienceLevel,
        count: usize,
        required: usize,
    },

    #[error("meal pool is empty after applying constraints")]
    NoMealsAvailable,
}

/// Which generation algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanVariant {
    /// Fresh random sample per request
    #[default]
    Randomized,
    /// Deterministic hand-authored schedules
    Curated,
}

/// Optional selection constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanConstraints {
    /// Restrict meal selection to vegetarian catalog entries
    pub vegetarian_only: bool,
}

/// A plan generation request.
///
/// Weight and height are part of the request contract but do not influence
/// selection; they ride along so a caller can derive nutrition targets from
/// the same inputs.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Free-form goal key, resolved via [`Goal::from_key`]
    pub goal: String,
    /// Free-form experience key, resolved via [`ExperienceLevel::from_key`]
    pub experience: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Selection constraints
    pub constraints: PlanConstraints,
}

/// Generates weekly plans over a loaded catalog.
pub struct PlanGenerator<'a> {
    catalog: &'a Catalog,
    variant: PlanVariant,
}

impl<'a> PlanGenerator<'a> {
    /// Create a generator with the default (randomized) variant.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_variant(catalog, PlanVariant::default())
    }

    /// Create a generator with an explicit variant.
    pub fn with_variant(catalog: &'a Catalog, variant: PlanVariant) -> Self {
        Self { catalog, variant }
    }

    /// The variant this generator runs.
    pub fn variant(&self) -> PlanVariant {
        self.variant
    }

    /// Generate a weekly plan for the request.
    ///
    /// The curated variant ignores `rng`; the randomized variant draws all
    /// of its selections from it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Result<WeeklyPlan, PlanError> {
        let (goal, level) = self.resolve(request)?;

        let plan = match self.variant {
            PlanVariant::Randomized => self.generate_randomized(level, request, rng)?,
            PlanVariant::Curated => self.generate_curated(goal, level)?,
        };

        info!(
            plan.goal = goal.as_key(),
            plan.level = level.as_key(),
            plan.variant = ?self.variant,
            plan.vegetarian_only = request.constraints.vegetarian_only,
            "Weekly plan generated"
        );
        Ok(plan)
    }

    /// Generate a reproducible randomized plan from a seed.
    ///
    /// Curated plans are already deterministic; for those the seed is inert.
    pub fn generate_seeded(&self, request: &PlanRequest, seed: u64) -> Result<WeeklyPlan, PlanError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(request, &mut rng)
    }

    /// Resolve free-form goal and experience keys, failing loudly on
    /// anything the catalogs cannot back.
    fn resolve(&self, request: &PlanRequest) -> Result<(Goal, ExperienceLevel), PlanError> {
        let goal = Goal::from_key(&request.goal)
            .ok_or_else(|| PlanError::UnknownGoal(request.goal.clone()))?;
        let level = ExperienceLevel::from_key(&request.experience)
            .ok_or_else(|| PlanError::UnknownExperienceLevel(request.experience.clone()))?
            .resolve_content_level();
        debug!(
            request.goal = %request.goal,
            resolved.goal = goal.as_key(),
            resolved.level = level.as_key(),
            "Plan request resolved"
        );
        Ok((goal, level))
    }

    // Selection here is goal-independent: the level-filtered exercise pool
    // and the meal pool are shared across goals.
    fn generate_randomized<R: Rng + ?Sized>(
        &self,
        level: ExperienceLevel,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Result<WeeklyPlan, PlanError> {
        let pool = self.catalog.exercises_for_level(level);
        if pool.len() < EXERCISES_PER_DAY {
            return Err(PlanError::InsufficientExercises {
                level,
                count: pool.len(),
                required: EXERCISES_PER_DAY,
            });
        }

        let meals = self
            .catalog
            .meals_filtered(request.constraints.vegetarian_only);
        if meals.is_empty() {
            return Err(PlanError::NoMealsAvailable);
        }

        // Sampling is per day: no exercise repeats within a day, but the
        // same exercise may recur on different days. Meal slots draw
        // independently, so a meal may repeat across slots of one day.
        WeeklyPlan::try_from_fn(|_day| {
            let exercises: Vec<Exercise> = pool
                .choose_multiple(rng, EXERCISES_PER_DAY)
                .map(|e| (*e).clone())
                .collect();
            let breakfast = Self::draw_meal(&meals, rng)?;
            let lunch = Self::draw_meal(&meals, rng)?;
            let dinner = Self::draw_meal(&meals, rng)?;
            Ok(DailyPlan {
                exercises,
                meals: DailyMeals {
                    breakfast,
                    lunch,
                    dinner,
                },
            })
        })
    }

    fn generate_curated(&self, goal: Goal, level: ExperienceLevel) -> Result<WeeklyPlan, PlanError> {
        let week = self
            .catalog
            .workout_schedule(goal, level)
            .ok_or(PlanError::MissingSchedule { goal, level })?;
        let meal_week = self
            .catalog
            .meal_schedule(goal)
            .ok_or(PlanError::MissingSchedule { goal, level })?;

        // Curated menus are hand-authored per goal; the vegetarian
        // constraint only applies to the randomized pool.
        WeeklyPlan::try_from_fn(|day| {
            let exercises = week
                .get(&day)
                .cloned()
                .ok_or(PlanError::IncompleteSchedule { goal, level, day })?;
            let meals = meal_week
                .get(&day)
                .cloned()
                .ok_or(PlanError::IncompleteSchedule { goal, level, day })?;
            Ok(DailyPlan { exercises, meals })
        })
    }

    fn draw_meal<R: Rng + ?Sized>(meals: &[&Meal], rng: &mut R) -> Result<Meal, PlanError> {
        meals
            .choose(rng)
            .map(|m| (*m).clone())
            .ok_or(PlanError::NoMealsAvailable)
    }
}
