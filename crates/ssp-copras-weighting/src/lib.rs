pub mod config;
pub mod error;
pub mod factory;
pub mod methods;
pub mod traits;

pub use config::*;
pub use error::WeightingError;
pub use factory::*;
pub use methods::gini_coefficients;
pub use traits::*;
