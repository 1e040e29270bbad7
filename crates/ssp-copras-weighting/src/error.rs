use ssp_copras_core::CoprasError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeightingError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Copras(#[from] CoprasError),
}
