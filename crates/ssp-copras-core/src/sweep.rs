use crate::copras::score;
use crate::error::{CoprasError, ValidationError};
use crate::matrix::{
    Compensation, CompensationCoefficient, CriterionType, DecisionMatrix, Weights,
};
use crate::ranking::{rank_descending, Ranking};

pub const DEFAULT_SWEEP_STEP: f64 = 0.05;
pub const MIN_SWEEP_STEP: f64 = 0.001;

#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    pub step: f64,
    /// `None` applies the coefficient to every criterion.
    pub criteria: Option<Vec<usize>>,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            step: DEFAULT_SWEEP_STEP,
            criteria: None,
        }
    }
}

impl SweepPlan {
    /// `0, step, 2*step, ...` up to and including 1. The step must lie in
    /// `[MIN_SWEEP_STEP, 1]`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn coefficients(&self) -> Result<Vec<f64>, CoprasError> {
        if !(MIN_SWEEP_STEP..=1.0).contains(&self.step) {
            return Err(ValidationError::InvalidSweepStep { step: self.step }.into());
        }
        let steps = (1.0 / self.step + 1e-9).floor() as usize;
        let mut out: Vec<f64> = (0..=steps)
            .map(|k| (k as f64 * self.step).min(1.0))
            .collect();
        match out.last_mut() {
            Some(last) if (1.0 - *last).abs() < 1e-9 => *last = 1.0,
            _ => out.push(1.0),
        }
        Ok(out)
    }

    fn coefficient_for(&self, n: usize, s: f64) -> Result<CompensationCoefficient, CoprasError> {
        let Some(criteria) = &self.criteria else {
            return Ok(CompensationCoefficient::Uniform(s));
        };
        let mut values = vec![0.0; n];
        for &index in criteria {
            let slot = values
                .get_mut(index)
                .ok_or(ValidationError::CriterionIndexOutOfRange { index, count: n })?;
            *slot = s;
        }
        Ok(CompensationCoefficient::PerCriterion(values))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub coefficients: Vec<f64>,
    pub utilities: Vec<Vec<f64>>,
    pub ranks: Vec<Ranking>,
    pub baseline_utility: Vec<f64>,
    pub baseline_rank: Ranking,
}

impl SweepReport {
    pub fn spread(&self, k: usize) -> Option<f64> {
        let u = self.utilities.get(k)?;
        let max = u.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = u.iter().copied().fold(f64::INFINITY, f64::min);
        Some(max - min)
    }

    pub fn final_rank(&self) -> Option<&Ranking> {
        self.ranks.last()
    }

    /// Alternatives whose rank under the strongest reduction differs from the classical rank.
    pub fn rank_changes(&self) -> Vec<usize> {
        let Some(last) = self.final_rank() else {
            return Vec::new();
        };
        self.baseline_rank
            .as_slice()
            .iter()
            .zip(last.as_slice())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }
}

pub struct SweepRunner {
    plan: SweepPlan,
}

impl SweepRunner {
    pub const fn new(plan: SweepPlan) -> Self {
        Self { plan }
    }

    pub fn run(
        &self,
        matrix: &DecisionMatrix,
        weights: &Weights,
        types: &[CriterionType],
    ) -> Result<SweepReport, CoprasError> {
        let coefficients = self.plan.coefficients()?;
        let baseline_utility = score(matrix, weights, types, &Compensation::Full)?;
        let baseline_rank = rank_descending(&baseline_utility)?;

        let mut utilities = Vec::with_capacity(coefficients.len());
        let mut ranks = Vec::with_capacity(coefficients.len());
        for &s in &coefficients {
            let coefficient = self.plan.coefficient_for(matrix.cols(), s)?;
            let utility = score(matrix, weights, types, &Compensation::Reduced(coefficient))?;
            ranks.push(rank_descending(&utility)?);
            utilities.push(utility);
        }

        Ok(SweepReport {
            coefficients,
            utilities,
            ranks,
            baseline_utility,
            baseline_rank,
        })
    }
}
