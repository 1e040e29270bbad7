use std::path::PathBuf;

use ssp_copras_core::{SweepPlan, DEFAULT_SWEEP_STEP, MIN_SWEEP_STEP};
use ssp_copras_weighting::WeightingConfig;

use crate::error::CliError;

pub const DATA_ENV: &str = "SSP_COPRAS_DATA";
pub const RESULTS_DIR_ENV: &str = "SSP_COPRAS_RESULTS_DIR";
pub const WEIGHTING_ENV: &str = "SSP_COPRAS_WEIGHTING";
pub const WEIGHTS_ENV: &str = "SSP_COPRAS_WEIGHTS";
pub const SWEEP_STEP_ENV: &str = "SSP_COPRAS_SWEEP_STEP";
pub const SWEEP_CRITERIA_ENV: &str = "SSP_COPRAS_SWEEP_CRITERIA";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub results_dir: PathBuf,
    pub weighting: WeightingConfig,
    pub sweep: SweepPlan,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./dataset/data.csv"),
            results_dir: PathBuf::from("./results"),
            weighting: WeightingConfig::Gini,
            sweep: SweepPlan::default(),
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let data_path = get(DATA_ENV).map_or(defaults.data_path, PathBuf::from);
        let results_dir = get(RESULTS_DIR_ENV).map_or(defaults.results_dir, PathBuf::from);

        let method = get(WEIGHTING_ENV).unwrap_or_else(|| "gini".to_string());
        let weights = get(WEIGHTS_ENV);
        let weighting = WeightingConfig::parse(&method, weights.as_deref())?;

        let step = get(SWEEP_STEP_ENV)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_SWEEP_STEP)
            .clamp(MIN_SWEEP_STEP, 1.0);
        let criteria = get(SWEEP_CRITERIA_ENV)
            .map(|raw| parse_indexes(&raw))
            .transpose()?;

        Ok(Self {
            data_path,
            results_dir,
            weighting,
            sweep: SweepPlan { step, criteria },
        })
    }
}

fn parse_indexes(raw: &str) -> Result<Vec<usize>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>().map_err(|e| {
                CliError::Config(format!(
                    "{SWEEP_CRITERIA_ENV} entry {part:?} is not a criterion index: {e}"
                ))
            })
        })
        .collect()
}
