pub mod equal;
pub mod fixed;
pub mod gini;

pub use equal::EqualWeighting;
pub use fixed::FixedWeighting;
pub use gini::{gini_coefficients, GiniWeighting};
