use ssp_copras_core::Weights;

use crate::config::WeightingConfig;
use crate::error::WeightingError;
use crate::methods::{EqualWeighting, FixedWeighting, GiniWeighting};
use crate::traits::WeightingMethod;

pub fn build_weighting_method(
    cfg: WeightingConfig,
) -> Result<Box<dyn WeightingMethod>, WeightingError> {
    match cfg {
        WeightingConfig::Gini => Ok(Box::new(GiniWeighting)),
        WeightingConfig::Equal => Ok(Box::new(EqualWeighting)),
        WeightingConfig::Fixed { weights } => {
            Ok(Box::new(FixedWeighting::new(Weights::new(weights)?)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_method() {
        assert_eq!(build_weighting_method(WeightingConfig::Gini).unwrap().name(), "gini");
        assert_eq!(build_weighting_method(WeightingConfig::Equal).unwrap().name(), "equal");
        let fixed = WeightingConfig::Fixed {
            weights: vec![0.4, 0.6],
        };
        assert_eq!(build_weighting_method(fixed).unwrap().name(), "fixed");
    }

    #[test]
    fn fixed_weights_are_validated_at_build_time() {
        let bad = WeightingConfig::Fixed {
            weights: vec![0.4, 0.4],
        };
        assert!(matches!(
            build_weighting_method(bad),
            Err(WeightingError::Copras(_))
        ));
    }
}
