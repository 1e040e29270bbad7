use ssp_copras_core::{DecisionMatrix, Weights};

use crate::error::WeightingError;
use crate::traits::WeightingMethod;

#[derive(Debug, Clone, Copy, Default)]
pub struct EqualWeighting;

impl WeightingMethod for EqualWeighting {
    fn name(&self) -> &'static str {
        "equal"
    }

    fn weigh(&self, matrix: &DecisionMatrix) -> Result<Weights, WeightingError> {
        Ok(Weights::equal(matrix.cols())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_weight_evenly() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0]]).unwrap();
        let w = EqualWeighting.weigh(&m).unwrap();
        assert_eq!(w.as_slice(), &[0.25, 0.25, 0.25, 0.25]);
    }
}
