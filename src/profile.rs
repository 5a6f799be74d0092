// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # User Profile
//!
//! The persisted user profile: physiological attributes, goals, and
//! experience level. Stored as a single JSON document; the first entry in
//! `goals` drives plan generation and nutrition targets.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::env_config;
use crate::models::Sex;
use crate::nutrition::{NutritionInput, ValidationError};

/// A stored user profile.
///
/// Goal and experience are kept as free-form keys, exactly as entered; they
/// are resolved against the catalog at plan time so a profile written by an
/// older version never fails to load outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Fitness goals in priority order; the first drives planning
    pub goals: Vec<String>,
    /// Experience level key
    pub experience: String,
    /// Free-form medical notes, informational only
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Validate the physiological fields against the accepted ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Reuse the nutrition input validator; goal resolution is not part
        // of profile validity.
        NutritionInput {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            sex: self.sex,
            goal: crate::models::Goal::WeightLoss,
        }
        .validate()
    }

    /// The goal key that drives plan generation, if any goal is set.
    pub fn primary_goal(&self) -> Option<&str> {
        self.goals.first().map(String::as_str)
    }
}

/// JSON-file-backed profile storage.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location: the `FITPLAN_PROFILE` environment
    /// variable if set, otherwise `profile.json` under the platform config
    /// directory.
    pub fn default_location() -> Self {
        let path = env_config::profile_path().map_or_else(
            || {
                dirs::config_dir()
                    .map(|p| p.join("fitplan/profile.json"))
                    .unwrap_or_else(|| "profile.json".into())
            },
            PathBuf::from,
        );
        Self::new(path)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored profile. A missing file is not an error; it means no
    /// profile has been saved yet.
    pub fn load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            debug!(profile.path = %self.path.display(), "No stored profile");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read profile file {}", self.path.display()))?;
        let profile: UserProfile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile file {}", self.path.display()))?;
        debug!(
            profile.path = %self.path.display(),
            profile.name = %profile.name,
            "Profile loaded"
        );
        Ok(Some(profile))
    }

    /// Save the profile, stamping `updated_at` with the current time.
    pub fn save(&self, profile: &mut UserProfile) -> Result<()> {
        profile.updated_at = Utc::now();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create profile directory {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write profile file {}", self.path.display()))?;

        info!(
            profile.path = %self.path.display(),
            profile.name = %profile.name,
            "Profile saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;
    use tempfile::TempDir;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            sex: Sex::Female,
            goals: vec!["muscleGain".to_string(), "weightLoss".to_string()],
            experience: "beginner".to_string(),
            medical_conditions: vec![],
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("nested/profile.json"));

        let mut profile = sample_profile();
        store.save(&mut profile).unwrap();

        let loaded = store.load().unwrap().expect("profile present");
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(ProfileStore::new(path).load().is_err());
    }

    #[test]
    fn test_primary_goal_is_first_entry() {
        let profile = sample_profile();
        assert_eq!(profile.primary_goal(), Some("muscleGain"));
        assert_eq!(Goal::from_key(profile.primary_goal().unwrap()), Some(Goal::MuscleGain));

        let mut empty = sample_profile();
        empty.goals.clear();
        assert_eq!(empty.primary_goal(), None);
    }

    #[test]
    fn test_validate_checks_ranges() {
        let mut profile = sample_profile();
        assert!(profile.validate().is_ok());

        profile.age_years = 12;
        assert_eq!(
            profile.validate().unwrap_err(),
            ValidationError::AgeOutOfRange(12)
        );
    }

    #[test]
    fn test_save_refreshes_updated_at() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        let mut profile = sample_profile();
        let before = profile.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.save(&mut profile).unwrap();
        assert!(profile.updated_at > before);
    }
}
