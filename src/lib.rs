// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Fitplan
//!
//! A fitness planning library: static exercise and meal catalogs, a weekly
//! plan generator, and a nutrition target calculator. Everything runs
//! locally against embedded content tables; there are no network calls and
//! no database.
//!
//! ## Features
//!
//! - **Content catalogs**: Typed exercise, meal, and instructional tables,
//!   validated at load time
//! - **Weekly plans**: Seven days of three exercises and three meals,
//!   curated or randomized per request
//! - **Nutrition targets**: Mifflin-St Jeor calorie and macro targets
//!   derived from the user profile
//! - **Profiles**: JSON-file-backed user profile storage
//!
//! ## Architecture
//!
//! - **Models**: Core domain types (goals, levels, plans, targets)
//! - **Catalog**: Content tables with load-time validation
//! - **Planner**: Curated and randomized weekly plan generation
//! - **Nutrition**: The target arithmetic chain
//! - **Profile / Config**: Persistence for user data and settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::catalog::Catalog;
//! use fitplan::planner::{PlanConstraints, PlanGenerator, PlanRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = Catalog::load()?;
//!     let generator = PlanGenerator::new(&catalog);
//!
//!     let request = PlanRequest {
//!         goal: "muscleGain".to_string(),
//!         experience: "beginner".to_string(),
//!         weight_kg: 70.0,
//!         height_cm: 175.0,
//!         constraints: PlanConstraints::default(),
//!     };
//!     let plan = generator.generate(&request, &mut rand::thread_rng())?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod planner;
pub mod profile;
