use ssp_copras_core::{ComputationError, CoprasError, DecisionMatrix, ValidationError, Weights};

use crate::error::WeightingError;
use crate::traits::WeightingMethod;

/// Objective weighting: each criterion is weighted by the dispersion of its
/// values, measured as a Gini coefficient.
#[derive(Debug, Clone, Copy, Default)]
pub struct GiniWeighting;

impl WeightingMethod for GiniWeighting {
    fn name(&self) -> &'static str {
        "gini"
    }

    fn weigh(&self, matrix: &DecisionMatrix) -> Result<Weights, WeightingError> {
        let g = gini_coefficients(matrix)?;
        if let Some(col) = g.iter().position(|v| *v < 0.0) {
            return Err(CoprasError::from(negative_entry(matrix, col)).into());
        }
        let total: f64 = g.iter().sum();
        if total == 0.0 {
            return Err(CoprasError::from(ComputationError::ZeroGiniSum).into());
        }
        Ok(Weights::normalized(g)?)
    }
}

// A column only gets a negative coefficient when its mean is negative, so it
// holds at least one negative entry.
fn negative_entry(matrix: &DecisionMatrix, col: usize) -> ValidationError {
    let (row, value) = matrix
        .column(col)
        .enumerate()
        .find(|(_, v)| *v < 0.0)
        .unwrap_or((0, 0.0));
    ValidationError::NegativeEntry { row, col, value }
}

/// Gini coefficient of every column.
///
/// A column with zero mean uses `m^2 - m` as the normalizer instead of
/// `2 m^2 mean`. A negative mean yields a negative coefficient, which
/// [`GiniWeighting`] rejects as a negative entry of that column.
#[allow(clippy::cast_precision_loss)]
pub fn gini_coefficients(matrix: &DecisionMatrix) -> Result<Vec<f64>, CoprasError> {
    let m = matrix.rows();
    if m < 2 {
        return Err(ValidationError::TooFewAlternatives { found: m, min: 2 }.into());
    }
    let mf = m as f64;

    let g: Vec<f64> = (0..matrix.cols())
        .map(|j| {
            let column: Vec<f64> = matrix.column(j).collect();
            let mean = column.iter().sum::<f64>() / mf;
            let denominator = if mean == 0.0 {
                mf * mf - mf
            } else {
                2.0 * mf * mf * mean
            };
            column
                .iter()
                .map(|xi| {
                    column
                        .iter()
                        .map(|xk| (xi - xk).abs() / denominator)
                        .sum::<f64>()
                })
                .sum()
        })
        .collect();

    if g.iter().all(|v| v.is_finite()) {
        Ok(g)
    } else {
        Err(ComputationError::NonFinite {
            stage: "gini coefficient",
        }
        .into())
    }
}
