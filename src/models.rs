// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures shared across the fitplan crate: catalog records
//! (exercises, meals), the generated weekly plan, and the strongly-typed
//! keys (goal, experience level, weekday) used to index the content tables.
//!
//! ## Design Principles
//!
//! - **Typed keys**: goals, levels and weekdays are enums rather than string
//!   indices, so malformed keys are rejected at the boundary instead of at
//!   lookup time
//! - **Full copies**: a generated plan carries complete catalog records, not
//!   references requiring further lookup
//! - **Serializable**: all models round-trip through JSON for asset loading
//!   and plan output

use serde::{Deserialize, Serialize};

/// Fitness objective used to select content tables.
///
/// Only goals with backing workout and meal schedules are representable.
/// Free-form goal strings from a profile form are resolved through
/// [`Goal::from_key`]; unknown keys are the caller's configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Calorie-deficit oriented training and meals
    WeightLoss,
    /// Hypertrophy oriented training and calorie-surplus meals
    MuscleGain,
}

impl Goal {
    /// Resolve a free-form goal key (`"weightLoss"`, `"weight_loss"`,
    /// `"Weight Loss"`, case-insensitive) to a typed goal.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "weightloss" => Some(Self::WeightLoss),
            "musclegain" => Some(Self::MuscleGain),
            _ => None,
        }
    }

    /// Canonical snake_case key, matching the catalog asset tables.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
        }
    }

    /// Human-readable name for display output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
        }
    }
}

/// Training experience level, selecting difficulty-appropriate content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Resolve a free-form experience key, case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// The level that content tables are actually keyed by.
    ///
    /// No advanced table exists in the catalog, so `Advanced` degrades to
    /// `Intermediate` deterministically before any lookup can fail.
    pub fn resolve_content_level(&self) -> Self {
        match self {
            Self::Advanced => Self::Intermediate,
            other => *other,
        }
    }

    /// Canonical lowercase key, matching the catalog asset tables.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Equipment category tag for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Bodyweight,
    Gym,
    Boxing,
}

/// Day of the week keying a daily plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in plan order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Lowercase key matching the catalog asset tables.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

/// Biological sex selection from the profile form.
///
/// The BMR formula only branches on male/not-male; `Other` takes the female
/// offset. That mirrors the profile form this model was lifted from and is
/// deliberately left as-is rather than silently reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// Resolve a free-form sex key, case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A single exercise catalog record.
///
/// Loaded once from the content assets and never mutated. Reps and rest are
/// deliberately free-form strings: the source content mixes count ranges
/// (`"8-12"`), durations (`"30 minutes"`) and open-ended prescriptions
/// (`"until failure"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name; unique within its catalog table
    pub name: String,
    /// Target number of sets
    pub sets: u32,
    /// Target reps, free-form (count range, duration, or "until failure")
    pub reps: String,
    /// Rest interval between sets, free-form
    pub rest: String,
    /// Short coaching description
    pub description: String,
    /// Equipment category
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// Difficulty level this record is appropriate for
    pub level: ExperienceLevel,
}

/// A single meal catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Display name; unique within its catalog table
    pub name: String,
    /// Estimated calories per serving
    pub calories: u32,
    /// Protein grams per serving
    pub protein: u32,
    /// Carbohydrate grams per serving
    pub carbs: u32,
    /// Fat grams per serving
    pub fats: u32,
    /// Ordered ingredient list
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Vegetarian flag, used by the meal selection constraint
    pub veg: bool,
}

/// The three meal slots assigned to one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

/// One day of a weekly plan: a fixed-size exercise selection plus meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Exactly three exercises, full records copied from the catalog
    pub exercises: Vec<Exercise>,
    /// Breakfast, lunch and dinner assignments
    pub meals: DailyMeals,
}

/// A full seven-day plan, Monday through Sunday.
///
/// Derived fresh on every request; not persisted. Using one named field per
/// weekday makes "exactly 7 day-keys present" a type-level guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub monday: DailyPlan,
    pub tuesday: DailyPlan,
    pub wednesday: DailyPlan,
    pub thursday: DailyPlan,
    pub friday: DailyPlan,
    pub saturday: DailyPlan,
    pub sunday: DailyPlan,
}

impl WeeklyPlan {
    /// Access the plan for a given weekday.
    pub fn day(&self, day: Weekday) -> &DailyPlan {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Iterate days in plan order, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DailyPlan)> {
        Weekday::ALL.iter().map(move |d| (*d, self.day(*d)))
    }

    /// Build a plan from a per-day constructor, Monday through Sunday.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(Weekday) -> Result<DailyPlan, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            monday: f(Weekday::Monday)?,
            tuesday: f(Weekday::Tuesday)?,
            wednesday: f(Weekday::Wednesday)?,
            thursday: f(Weekday::Thursday)?,
            friday: f(Weekday::Friday)?,
            saturday: f(Weekday::Saturday)?,
            sunday: f(Weekday::Sunday)?,
        })
    }
}

/// Derived daily nutrition targets.
///
/// Computed, never stored. Values are rounded to the nearest whole unit at
/// the end of the arithmetic chain; a negative carbohydrate target is
/// possible for extreme inputs and is returned unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Daily calorie target (kcal)
    pub calories: i64,
    /// Daily protein target (g)
    pub protein: i64,
    /// Daily carbohydrate target (g); may be negative for extreme inputs
    pub carbs: i64,
    /// Daily fat target (g)
    pub fats: i64,
}
