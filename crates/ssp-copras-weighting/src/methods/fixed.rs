use ssp_copras_core::{CoprasError, DecisionMatrix, ValidationError, Weights};

use crate::error::WeightingError;
use crate::traits::WeightingMethod;

#[derive(Debug, Clone)]
pub struct FixedWeighting {
    weights: Weights,
}

impl FixedWeighting {
    pub const fn new(weights: Weights) -> Self {
        Self { weights }
    }
}

impl WeightingMethod for FixedWeighting {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn weigh(&self, matrix: &DecisionMatrix) -> Result<Weights, WeightingError> {
        if self.weights.len() != matrix.cols() {
            let mismatch = ValidationError::DimensionMismatch {
                what: "weights",
                expected: matrix.cols(),
                found: self.weights.len(),
            };
            return Err(CoprasError::from(mismatch).into());
        }
        Ok(self.weights.clone())
    }
}
