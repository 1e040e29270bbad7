use std::path::PathBuf;

use ssp_copras_core::{
    rank_descending, score, Compensation, Ranking, SweepReport, SweepRunner, Weights,
};
use ssp_copras_data::{load_dataset, write_json, Dataset, ResultTable, RunSummary};
use ssp_copras_weighting::build_weighting_method;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::CliError;

/// Everything one run produced, in memory.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub dataset: Dataset,
    pub weighting: &'static str,
    pub weights: Weights,
    pub utility: Vec<f64>,
    pub rank: Ranking,
    pub sweep: SweepReport,
    pub written: Vec<PathBuf>,
}

impl PipelineOutcome {
    pub fn results_table(&self) -> ResultTable {
        ResultTable::utility_and_rank(&self.dataset.alternatives, &self.utility, &self.rank)
    }

    pub fn compared_table(&self) -> ResultTable {
        let reduced = self.sweep.final_rank().unwrap_or(&self.rank);
        ResultTable::compared(&self.dataset.alternatives, &self.rank, reduced)
    }
}

pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    pub const fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<PipelineOutcome, CliError> {
        info!(path = %self.config.data_path.display(), "loading dataset");
        let dataset = load_dataset(&self.config.data_path)?;
        self.run_dataset(dataset)
    }

    pub fn run_dataset(&self, dataset: Dataset) -> Result<PipelineOutcome, CliError> {
        info!(
            alternatives = dataset.matrix.rows(),
            criteria = dataset.matrix.cols(),
            "dataset ready"
        );

        let method = build_weighting_method(self.config.weighting.clone())?;
        let weights = method.weigh(&dataset.matrix)?;
        debug!(method = method.name(), weights = ?weights.as_slice(), "criteria weighted");

        let utility = score(
            &dataset.matrix,
            &weights,
            &dataset.types,
            &Compensation::Full,
        )?;
        let rank = rank_descending(&utility)?;

        let sweep = SweepRunner::new(self.config.sweep.clone()).run(
            &dataset.matrix,
            &weights,
            &dataset.types,
        )?;
        let changed = sweep.rank_changes();
        info!(
            method = method.name(),
            steps = sweep.coefficients.len(),
            rank_changes = changed.len(),
            "sustainability sweep finished"
        );

        let mut outcome = PipelineOutcome {
            dataset,
            weighting: method.name(),
            weights,
            utility,
            rank,
            sweep,
            written: Vec::new(),
        };
        outcome.written = self.write_results(&outcome)?;
        Ok(outcome)
    }

    fn write_results(&self, outcome: &PipelineOutcome) -> Result<Vec<PathBuf>, CliError> {
        let dir = &self.config.results_dir;
        let method = outcome.weighting;
        let names = &outcome.dataset.alternatives;
        let sweep = &outcome.sweep;

        let tables = [
            (
                format!("weights_{method}.csv"),
                ResultTable::weights(&outcome.dataset.criteria, &outcome.weights),
            ),
            ("copras_results.csv".to_string(), outcome.results_table()),
            (
                format!("sust_utility_vals_{method}.csv"),
                ResultTable::per_coefficient(names, &sweep.coefficients, &sweep.utilities),
            ),
            (
                format!("sust_rank_{method}.csv"),
                ResultTable::per_coefficient(names, &sweep.coefficients, &sweep.ranks),
            ),
            ("compared.csv".to_string(), outcome.compared_table()),
        ];

        let mut written = Vec::with_capacity(tables.len() + 1);
        for (file, table) in tables {
            let path = dir.join(file);
            table.write_csv(&path)?;
            debug!(path = %path.display(), "table written");
            written.push(path);
        }

        let summary = RunSummary {
            weighting: method.to_string(),
            alternatives: names.clone(),
            criteria: outcome.dataset.criteria.clone(),
            weights: outcome.weights.as_slice().to_vec(),
            utility: outcome.utility.clone(),
            rank: outcome.rank.as_slice().to_vec(),
            coefficients: sweep.coefficients.clone(),
            reduced_rank: sweep
                .final_rank()
                .map(|r| r.as_slice().to_vec())
                .unwrap_or_default(),
            rank_changes: sweep
                .rank_changes()
                .into_iter()
                .filter_map(|i| names.get(i).cloned())
                .collect(),
        };
        let summary_path = dir.join("summary.json");
        write_json(&summary_path, &summary)?;
        written.push(summary_path);

        info!(dir = %dir.display(), files = written.len(), "results written");
        Ok(written)
    }
}
