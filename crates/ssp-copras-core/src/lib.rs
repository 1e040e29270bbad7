pub mod copras;
pub mod error;
pub mod matrix;
pub mod ranking;
pub mod sweep;

pub use copras::*;
pub use error::*;
pub use matrix::*;
pub use ranking::*;
pub use sweep::*;
