use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::approximation::{ConvergenceCriterion, DEFAULT_ITERATION_BUDGET, SqrtApproximator};
use crate::config::ConfigError;

fn default_iteration_budget() -> u32 {
    DEFAULT_ITERATION_BUDGET
}

/// Settings file (JSON). Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    #[schemars(
        title = "Seed",
        description = "PRNG seed for picking greeting phrasings; empty = seeded from the OS"
    )]
    pub seed: Option<u64>,

    #[schemars(title = "Approximation", description = "Square-root approximator settings")]
    pub approximation: ApproximationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ApproximationConfig {
    #[schemars(
        title = "Iteration Budget",
        description = "Maximum number of Newton updates",
        range(min = 1),
        default = "default_iteration_budget"
    )]
    pub iteration_budget: u32,

    #[schemars(
        title = "Tolerance",
        description = "Stop once successive estimates differ by at most this much; empty = exact equality"
    )]
    pub tolerance: Option<f64>,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            tolerance: None,
        }
    }
}

impl ApproximationConfig {
    pub fn criterion(&self) -> Result<ConvergenceCriterion, ConfigError> {
        match self.tolerance {
            Some(eps) => ConvergenceCriterion::tolerance(eps),
            None => Ok(ConvergenceCriterion::Exact),
        }
    }

    pub fn build(&self) -> Result<SqrtApproximator, ConfigError> {
        SqrtApproximator::new(self.iteration_budget, self.criterion()?)
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.approximation.build().map(|_| ())
    }
}

/// Loads settings from a JSON file.
///
/// A missing file yields `AppConfig::default()`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let cfg: AppConfig = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

pub fn config_schema() -> Schema {
    schema_for!(AppConfig)
}
