pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use config::RunConfig;
pub use error::CliError;
pub use logging::init_tracing;
pub use pipeline::{Pipeline, PipelineOutcome};
