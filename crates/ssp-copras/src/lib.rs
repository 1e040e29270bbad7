pub use ssp_copras_core::*;
pub use ssp_copras_weighting::{
    build_weighting_method, gini_coefficients, WeightingConfig, WeightingError, WeightingMethod,
};
