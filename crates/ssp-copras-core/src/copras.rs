//! COPRAS (Complex Proportional Assessment) and its SSP variant with reduced
//! criteria compensation.

use crate::error::{ComputationError, CoprasError, ValidationError};
use crate::matrix::{ensure_mixed_types, Compensation, CriterionType, DecisionMatrix, Weights};

#[derive(Debug, Clone, PartialEq)]
pub struct CoprasOutcome {
    pub sum_profit: Vec<f64>,
    pub sum_cost: Vec<f64>,
    pub priority: Vec<f64>,
    pub utility: Vec<f64>,
}

pub fn score(
    matrix: &DecisionMatrix,
    weights: &Weights,
    types: &[CriterionType],
    compensation: &Compensation,
) -> Result<Vec<f64>, CoprasError> {
    evaluate(matrix, weights, types, compensation).map(|outcome| outcome.utility)
}

pub fn evaluate(
    matrix: &DecisionMatrix,
    weights: &Weights,
    types: &[CriterionType],
    compensation: &Compensation,
) -> Result<CoprasOutcome, CoprasError> {
    let n = matrix.cols();
    check_len("weights", n, weights.len())?;
    check_len("criterion types", n, types.len())?;
    ensure_mixed_types(types)?;
    matrix.ensure_non_negative()?;
    let coefficients = match compensation {
        Compensation::Full => None,
        Compensation::Reduced(s) => Some(s.resolve(n)?),
    };

    let mut normalized = normalize_linear(matrix)?;
    if let Some(s) = coefficients {
        normalized = reduce_compensation(&normalized, types, &s);
    }

    let w = weights.as_slice();
    let weighted = normalized.map_indexed(|_, j, v| v * w.get(j).copied().unwrap_or(0.0));
    let (sum_profit, sum_cost) = aggregate(&weighted, types);
    let priority = relative_priority(&sum_profit, &sum_cost)?;
    let utility = to_utility(&priority)?;

    Ok(CoprasOutcome {
        sum_profit,
        sum_cost,
        priority,
        utility,
    })
}

pub fn normalize_linear(matrix: &DecisionMatrix) -> Result<DecisionMatrix, CoprasError> {
    let sums: Vec<f64> = (0..matrix.cols()).map(|j| matrix.column_sum(j)).collect();
    if let Some(col) = sums.iter().position(|&s| s == 0.0) {
        return Err(ComputationError::ZeroColumnSum { col }.into());
    }
    Ok(matrix.map_indexed(|_, j, v| v / sums.get(j).copied().unwrap_or(1.0)))
}

/// Pulls entries that beat their column mean in the criterion's favourable
/// direction back toward the mean by the fraction `s[j]`.
///
/// Profit columns keep only positive deviations, cost columns only negative
/// ones; everything else is left untouched. `s = 0` is the identity.
pub fn reduce_compensation(
    normalized: &DecisionMatrix,
    types: &[CriterionType],
    s: &[f64],
) -> DecisionMatrix {
    let means: Vec<f64> = (0..normalized.cols())
        .map(|j| normalized.column_mean(j))
        .collect();
    normalized.map_indexed(|_, j, v| {
        let deviation = v - means.get(j).copied().unwrap_or(v);
        let kept = match types.get(j) {
            Some(CriterionType::Profit) if deviation < 0.0 => 0.0,
            Some(CriterionType::Cost) if deviation > 0.0 => 0.0,
            _ => deviation,
        };
        v - kept * s.get(j).copied().unwrap_or(0.0)
    })
}

fn aggregate(weighted: &DecisionMatrix, types: &[CriterionType]) -> (Vec<f64>, Vec<f64>) {
    weighted
        .rows_iter()
        .map(|row| {
            row.iter()
                .zip(types)
                .fold((0.0, 0.0), |(sp, sm), (&d, ty)| match ty {
                    CriterionType::Profit => (sp + d, sm),
                    CriterionType::Cost => (sp, sm + d),
                })
        })
        .unzip()
}

/// `Q_i = S+_i + sum(S-) / (S-_i * sum(1 / S-))`.
fn relative_priority(sum_profit: &[f64], sum_cost: &[f64]) -> Result<Vec<f64>, CoprasError> {
    if let Some(alternative) = sum_cost.iter().position(|&sm| sm == 0.0) {
        return Err(ComputationError::ZeroCostAggregate { alternative }.into());
    }
    let total_cost: f64 = sum_cost.iter().sum();
    let inverse_total: f64 = sum_cost.iter().map(|sm| 1.0 / sm).sum();

    let priority: Vec<f64> = sum_profit
        .iter()
        .zip(sum_cost)
        .map(|(sp, sm)| sp + total_cost / (sm * inverse_total))
        .collect();
    ensure_finite(&priority, "relative priority")?;
    Ok(priority)
}

fn to_utility(priority: &[f64]) -> Result<Vec<f64>, CoprasError> {
    if let Some((alternative, &value)) = priority.iter().enumerate().find(|(_, q)| **q <= 0.0) {
        return Err(ComputationError::NonPositivePriority { alternative, value }.into());
    }
    let max = priority.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let utility: Vec<f64> = priority.iter().map(|q| q / max).collect();
    ensure_finite(&utility, "utility")?;
    Ok(utility)
}

fn ensure_finite(values: &[f64], stage: &'static str) -> Result<(), CoprasError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ComputationError::NonFinite { stage }.into())
    }
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), CoprasError> {
    if expected == found {
        Ok(())
    } else {
        Err(ValidationError::DimensionMismatch {
            what,
            expected,
            found,
        }
        .into())
    }
}
