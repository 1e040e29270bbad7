use ssp_copras_core::{DecisionMatrix, Weights};

use crate::error::WeightingError;

pub trait WeightingMethod: Send + Sync {
    fn name(&self) -> &'static str;

    fn weigh(&self, matrix: &DecisionMatrix) -> Result<Weights, WeightingError>;
}
