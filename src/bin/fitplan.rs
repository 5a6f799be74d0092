// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command-line front end for the fitness planner.
//!
//! Reads profile attributes from flags or from the stored profile, then
//! generates weekly plans, nutrition targets, and exercise detail lookups.
//! All command output goes to stdout as JSON; logs go to stderr.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;

use fitplan::catalog::Catalog;
use fitplan::config::Config;
use fitplan::logging;
use fitplan::models::Sex;
use fitplan::nutrition::{compute_nutrition_targets, NutritionInput};
use fitplan::planner::{PlanConstraints, PlanGenerator, PlanRequest, PlanVariant};
use fitplan::profile::{ProfileStore, UserProfile};

#[derive(Parser, Debug)]
#[command(author, version, about = "Weekly workout and meal planning", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a weekly workout and meal plan
    Plan {
        #[command(flatten)]
        attrs: ProfileArgs,

        /// Use the hand-authored schedules instead of random sampling
        #[arg(long)]
        curated: bool,

        /// Restrict meals to vegetarian entries (randomized variant)
        #[arg(long)]
        veg: bool,

        /// Seed for reproducible randomized plans
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute daily calorie and macronutrient targets
    Nutrition {
        #[command(flatten)]
        attrs: ProfileArgs,
    },

    /// Show instructional detail for an exercise
    Info {
        /// Exercise identifier, e.g. "bench" or "goblet_squat"
        id: String,
    },

    /// Save profile attributes for later invocations
    SaveProfile {
        #[command(flatten)]
        attrs: ProfileArgs,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Print the stored profile
    ShowProfile,
}

/// Profile attributes, each overriding the stored profile when given.
#[derive(clap::Args, Debug)]
struct ProfileArgs {
    /// Fitness goal (weightLoss or muscleGain)
    #[arg(long)]
    goal: Option<String>,

    /// Experience level (beginner, intermediate, advanced)
    #[arg(long)]
    experience: Option<String>,

    /// Body weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Biological sex (male, female, other)
    #[arg(long)]
    sex: Option<String>,
}

impl ProfileArgs {
    /// Merge flag overrides with the stored profile; every field must come
    /// from one of the two.
    fn resolve(&self, stored: Option<&UserProfile>) -> Result<ResolvedProfile> {
        let goal = self
            .goal
            .clone()
            .or_else(|| stored.and_then(|p| p.primary_goal().map(String::from)))
            .ok_or_else(|| anyhow!("no goal given and no stored profile; pass --goal"))?;
        let experience = self
            .experience
            .clone()
            .or_else(|| stored.map(|p| p.experience.clone()))
            .ok_or_else(|| anyhow!("no experience level given; pass --experience"))?;
        let weight_kg = self
            .weight
            .or_else(|| stored.map(|p| p.weight_kg))
            .ok_or_else(|| anyhow!("no weight given; pass --weight"))?;
        let height_cm = self
            .height
            .or_else(|| stored.map(|p| p.height_cm))
            .ok_or_else(|| anyhow!("no height given; pass --height"))?;
        let age_years = self
            .age
            .or_else(|| stored.map(|p| p.age_years))
            .ok_or_else(|| anyhow!("no age given; pass --age"))?;
        let sex = match &self.sex {
            Some(key) => {
                Sex::from_key(key).ok_or_else(|| anyhow!("unrecognized sex '{key}'"))?
            }
            None => stored
                .map(|p| p.sex)
                .ok_or_else(|| anyhow!("no sex given; pass --sex"))?,
        };

        Ok(ResolvedProfile {
            goal,
            experience,
            weight_kg,
            height_cm,
            age_years,
            sex,
        })
    }
}

struct ResolvedProfile {
    goal: String,
    experience: String,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog.data_dir {
        Some(dir) => Catalog::load_from_dir(Path::new(dir))
            .with_context(|| format!("Failed to load catalog from {dir}"))?,
        None => Catalog::load().context("Failed to load embedded catalog")?,
    };
    Ok(catalog)
}

fn main() -> Result<()> {
    logging::init_from_env()?;

    let args = Args::parse();
    let config = Config::load(args.config)?;
    let store = ProfileStore::default_location();

    match args.command {
        Command::Plan {
            attrs,
            curated,
            veg,
            seed,
        } => {
            let stored = store.load()?;
            let profile = attrs.resolve(stored.as_ref())?;
            let catalog = load_catalog(&config)?;

            let variant = if curated {
                PlanVariant::Curated
            } else {
                config.planner.variant
            };
            let generator = PlanGenerator::with_variant(&catalog, variant);
            let request = PlanRequest {
                goal: profile.goal,
                experience: profile.experience,
                weight_kg: profile.weight_kg,
                height_cm: profile.height_cm,
                constraints: PlanConstraints {
                    vegetarian_only: veg || config.planner.vegetarian_only,
                },
            };

            let plan = match seed {
                Some(seed) => generator.generate_seeded(&request, seed)?,
                None => generator.generate(&request, &mut rand::thread_rng())?,
            };
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }

        Command::Nutrition { attrs } => {
            let stored = store.load()?;
            let profile = attrs.resolve(stored.as_ref())?;
            let goal = fitplan::models::Goal::from_key(&profile.goal)
                .ok_or_else(|| anyhow!("unknown goal '{}'", profile.goal))?;

            let targets = compute_nutrition_targets(&NutritionInput {
                weight_kg: profile.weight_kg,
                height_cm: profile.height_cm,
                age_years: profile.age_years,
                sex: profile.sex,
                goal,
            })?;
            println!("{}", serde_json::to_string_pretty(&targets)?);
        }

        Command::Info { id } => {
            let catalog = load_catalog(&config)?;
            if !catalog.has_exercise_info(&id) {
                info!(exercise.id = %id, "No dedicated record, serving the generic fallback");
            }
            println!(
                "{}",
                serde_json::to_string_pretty(catalog.exercise_info(&id))?
            );
        }

        Command::SaveProfile { attrs, name } => {
            let stored = store.load()?;
            let resolved = attrs.resolve(stored.as_ref())?;

            let mut profile = UserProfile {
                name: if name.is_empty() {
                    stored.as_ref().map_or_else(String::new, |p| p.name.clone())
                } else {
                    name
                },
                weight_kg: resolved.weight_kg,
                height_cm: resolved.height_cm,
                age_years: resolved.age_years,
                sex: resolved.sex,
                goals: vec![resolved.goal],
                experience: resolved.experience,
                medical_conditions: stored
                    .map(|p| p.medical_conditions)
                    .unwrap_or_default(),
                updated_at: chrono::Utc::now(),
            };
            profile.validate()?;
            store.save(&mut profile)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }

        Command::ShowProfile => match store.load()? {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => return Err(anyhow!("no profile stored at {}", store.path().display())),
        },
    }

    Ok(())
}
