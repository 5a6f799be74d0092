// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration management for the fitness planner

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::env_config;
use crate::planner::PlanVariant;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Default behavior of the plan generator, overridable per invocation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlannerSettings {
    /// Generation variant when none is requested
    #[serde(default)]
    pub variant: PlanVariant,
    /// Restrict meal selection to vegetarian entries by default
    #[serde(default)]
    pub vegetarian_only: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Directory of catalog JSON files; embedded assets are used when unset
    pub data_dir: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Resolution order: explicit `path` argument, then the `FITPLAN_CONFIG`
    /// environment variable, then `fitplan/config.toml` under the platform
    /// config directory. A missing file yields the defaults; environment
    /// variables (via dotenv) can still override individual settings.
    pub fn load(path: Option<String>) -> Result<Self> {
        let config_path = path
            .or_else(env_config::config_path)
            .unwrap_or_else(Self::default_path);

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            dotenv::dotenv().ok();
            Config::default()
        };

        if let Some(data_dir) = env_config::data_dir() {
            config.catalog.data_dir = Some(data_dir);
        }

        Ok(config)
    }

    pub fn save(&self, path: Option<String>) -> Result<()> {
        let config_path = path
            .or_else(env_config::config_path)
            .unwrap_or_else(Self::default_path);

        let parent = Path::new(&config_path)
            .parent()
            .context("Invalid config path")?;
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    fn default_path() -> String {
        dirs::config_dir()
            .map(|p| p.join("fitplan/config.toml"))
            .unwrap_or_else(|| "config.toml".into())
            .to_string_lossy()
            .to_string()
    }
}
