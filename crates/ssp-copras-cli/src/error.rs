use ssp_copras_core::CoprasError;
use ssp_copras_data::DataError;
use ssp_copras_weighting::WeightingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("weighting error: {0}")]
    Weighting(#[from] WeightingError),

    #[error("scoring error: {0}")]
    Copras(#[from] CoprasError),
}
