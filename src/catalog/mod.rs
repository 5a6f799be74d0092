// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Content Catalog
//!
//! Read-only content tables backing plan generation: the global exercise and
//! meal pools, the curated per-goal workout and meal schedules, instructional
//! detail per exercise, and the body-region category index.
//!
//! Content lives in structured JSON assets under `data/`, embedded into the
//! binary at compile time and overridable from an external directory. All
//! tables are seeded once at startup and never mutated; malformed content is
//! rejected at load time with a [`CatalogError`] rather than surfacing as a
//! lookup failure later.

pub mod exercise_info;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::plan::EXERCISES_PER_DAY;
use crate::models::{DailyMeals, Exercise, ExperienceLevel, Goal, Meal, Weekday};

pub use exercise_info::{ExerciseGuidelines, ExerciseInfo, DEFAULT_INFO_KEY};

/// Embedded default content assets.
const EXERCISES_JSON: &str = include_str!("../../data/exercises.json");
const MEALS_JSON: &str = include_str!("../../data/meals.json");
const WORKOUT_SCHEDULES_JSON: &str = include_str!("../../data/workout_schedules.json");
const MEAL_SCHEDULES_JSON: &str = include_str!("../../data/meal_schedules.json");
const EXERCISE_INFO_JSON: &str = include_str!("../../data/exercise_info.json");
const EXERCISE_CATEGORIES_JSON: &str = include_str!("../../data/exercise_categories.json");

/// Curated 7-day workout schedule for one goal and level.
pub type WorkoutWeek = HashMap<Weekday, Vec<Exercise>>;

/// Curated 7-day meal schedule for one goal.
pub type MealWeek = HashMap<Weekday, DailyMeals>;

#[derive(Debug, Deserialize)]
struct ExercisePoolFile {
    exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
struct MealPoolFile {
    meals: Vec<Meal>,
}

/// Errors raised while loading or validating catalog content.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog asset {asset}: {source}")]
    Parse {
        asset: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {table} entry: {name}")]
    DuplicateEntry { table: &'static str, name: String },

    #[error("workout schedule for {goal:?}/{level:?} is missing {day:?}")]
    MissingScheduleDay {
        goal: Goal,
        level: ExperienceLevel,
        day: Weekday,
    },

    #[error("workout schedule for {goal:?}/{level:?} has {count} exercises on {day:?}, expected {expected}")]
    WrongExerciseCount {
        goal: Goal,
        level: ExperienceLevel,
        day: Weekday,
        count: usize,
        expected: usize,
    },

    #[error("meal schedule for {goal:?} is missing {day:?}")]
    MissingMealDay { goal: Goal, day: Weekday },

    #[error("workout schedule for {goal:?} is missing the {level:?} level table")]
    MissingLevelTable { goal: Goal, level: ExperienceLevel },

    #[error("no {goal:?} schedule tables in catalog")]
    MissingGoalTable { goal: Goal },

    #[error("exercise pool holds only {count} {level:?} entries, need at least {required}")]
    PoolTooSmall {
        level: ExperienceLevel,
        count: usize,
        required: usize,
    },

    #[error("meal pool holds no vegetarian entries")]
    NoVegetarianMeals,

    #[error("exercise info table is missing the '{DEFAULT_INFO_KEY}' fallback record")]
    MissingDefaultInfo,
}

/// The full in-memory content catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    meals: Vec<Meal>,
    workout_schedules: HashMap<Goal, HashMap<ExperienceLevel, WorkoutWeek>>,
    meal_schedules: HashMap<Goal, MealWeek>,
    exercise_info: HashMap<String, ExerciseInfo>,
    categories: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// Load the embedded default content assets.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_assets(
            EXERCISES_JSON,
            MEALS_JSON,
            WORKOUT_SCHEDULES_JSON,
            MEAL_SCHEDULES_JSON,
            EXERCISE_INFO_JSON,
            EXERCISE_CATEGORIES_JSON,
        )?;
        info!(
            catalog.exercises = catalog.exercises.len(),
            catalog.meals = catalog.meals.len(),
            catalog.info_records = catalog.exercise_info.len(),
            "Content catalog loaded from embedded assets"
        );
        Ok(catalog)
    }

    /// Load content assets from an external directory.
    ///
    /// The directory must hold the same six JSON files as `data/`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let read = |file: &str| -> Result<String, CatalogError> {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        let catalog = Self::from_assets(
            &read("exercises.json")?,
            &read("meals.json")?,
            &read("workout_schedules.json")?,
            &read("meal_schedules.json")?,
            &read("exercise_info.json")?,
            &read("exercise_categories.json")?,
        )?;
        info!(
            catalog.dir = %dir.display(),
            catalog.exercises = catalog.exercises.len(),
            catalog.meals = catalog.meals.len(),
            "Content catalog loaded from directory"
        );
        Ok(catalog)
    }

    fn from_assets(
        exercises: &str,
        meals: &str,
        workout_schedules: &str,
        meal_schedules: &str,
        exercise_info: &str,
        categories: &str,
    ) -> Result<Self, CatalogError> {
        fn parse<'a, T: Deserialize<'a>>(asset: &'static str, raw: &'a str) -> Result<T, CatalogError> {
            serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
                asset: asset.to_string(),
                source,
            })
        }

        let pool: ExercisePoolFile = parse("exercises.json", exercises)?;
        let meals: MealPoolFile = parse("meals.json", meals)?;
        let workout_schedules = parse("workout_schedules.json", workout_schedules)?;
        let meal_schedules = parse("meal_schedules.json", meal_schedules)?;
        let exercise_info = parse("exercise_info.json", exercise_info)?;
        let categories = parse("exercise_categories.json", categories)?;

        let catalog = Self {
            exercises: pool.exercises,
            meals: meals.meals,
            workout_schedules,
            meal_schedules,
            exercise_info,
            categories,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject malformed content before any lookup can observe it.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for exercise in &self.exercises {
            if !seen.insert(exercise.name.as_str()) {
                return Err(CatalogError::DuplicateEntry {
                    table: "exercise pool",
                    name: exercise.name.clone(),
                });
            }
        }
        seen.clear();
        for meal in &self.meals {
            if !seen.insert(meal.name.as_str()) {
                return Err(CatalogError::DuplicateEntry {
                    table: "meal pool",
                    name: meal.name.clone(),
                });
            }
        }

        // Randomized selection must always be able to fill a day.
        for level in [ExperienceLevel::Beginner, ExperienceLevel::Intermediate] {
            let count = self.exercises_for_level(level).len();
            if count < EXERCISES_PER_DAY {
                return Err(CatalogError::PoolTooSmall {
                    level,
                    count,
                    required: EXERCISES_PER_DAY,
                });
            }
        }
        if !self.meals.iter().any(|m| m.veg) {
            return Err(CatalogError::NoVegetarianMeals);
        }

        for goal in [Goal::WeightLoss, Goal::MuscleGain] {
            let levels = self
                .workout_schedules
                .get(&goal)
                .ok_or(CatalogError::MissingGoalTable { goal })?;
            for level in [ExperienceLevel::Beginner, ExperienceLevel::Intermediate] {
                let week = levels
                    .get(&level)
                    .ok_or(CatalogError::MissingLevelTable { goal, level })?;
                for day in Weekday::ALL {
                    let exercises = week.get(&day).ok_or(CatalogError::MissingScheduleDay {
                        goal,
                        level,
                        day,
                    })?;
                    if exercises.len() != EXERCISES_PER_DAY {
                        return Err(CatalogError::WrongExerciseCount {
                            goal,
                            level,
                            day,
                            count: exercises.len(),
                            expected: EXERCISES_PER_DAY,
                        });
                    }
                }
            }

            let meal_week = self
                .meal_schedules
                .get(&goal)
                .ok_or(CatalogError::MissingGoalTable { goal })?;
            for day in Weekday::ALL {
                if !meal_week.contains_key(&day) {
                    return Err(CatalogError::MissingMealDay { goal, day });
                }
            }
        }

        if !self.exercise_info.contains_key(DEFAULT_INFO_KEY) {
            return Err(CatalogError::MissingDefaultInfo);
        }

        debug!("Catalog content validated");
        Ok(())
    }

    /// The global exercise pool.
    pub fn exercise_pool(&self) -> &[Exercise] {
        &self.exercises
    }

    /// The global meal pool.
    pub fn meal_pool(&self) -> &[Meal] {
        &self.meals
    }

    /// Pool entries matching the resolved content level.
    pub fn exercises_for_level(&self, level: ExperienceLevel) -> Vec<&Exercise> {
        let level = level.resolve_content_level();
        self.exercises.iter().filter(|e| e.level == level).collect()
    }

    /// Pool meals, restricted to vegetarian entries when requested.
    pub fn meals_filtered(&self, vegetarian_only: bool) -> Vec<&Meal> {
        self.meals
            .iter()
            .filter(|m| !vegetarian_only || m.veg)
            .collect()
    }

    /// Curated workout week for a goal, at the resolved content level.
    pub fn workout_schedule(&self, goal: Goal, level: ExperienceLevel) -> Option<&WorkoutWeek> {
        self.workout_schedules
            .get(&goal)?
            .get(&level.resolve_content_level())
    }

    /// Curated meal week for a goal.
    pub fn meal_schedule(&self, goal: Goal) -> Option<&MealWeek> {
        self.meal_schedules.get(&goal)
    }

    /// Instructional detail for an exercise identifier.
    ///
    /// Unknown identifiers resolve to the shared generic record; this never
    /// fails. Validation guarantees the fallback record exists.
    pub fn exercise_info(&self, id: &str) -> &ExerciseInfo {
        self.exercise_info
            .get(id)
            .unwrap_or_else(|| &self.exercise_info[DEFAULT_INFO_KEY])
    }

    /// True if a dedicated (non-fallback) info record exists for the id.
    pub fn has_exercise_info(&self, id: &str) -> bool {
        id != DEFAULT_INFO_KEY && self.exercise_info.contains_key(id)
    }

    /// Body-region category index: category name to exercise identifiers.
    pub fn categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.categories
    }

    /// All browsable exercise identifiers across categories.
    pub fn exercise_ids(&self) -> Vec<&str> {
        self.categories
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Look up a pool exercise by name.
    pub fn exercise_by_name(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Look up a pool meal by name.
    pub fn meal_by_name(&self, name: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.name == name)
    }
}
