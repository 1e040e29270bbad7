use std::io::{self, Write};
use std::process::ExitCode;

use ssp_copras_cli::{init_tracing, CliError, Pipeline, RunConfig};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "ssp-copras failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = RunConfig::from_env()?;
    let outcome = Pipeline::new(config).run()?;

    let mut stdout = io::stdout().lock();
    outcome.results_table().write_to(&mut stdout)?;
    writeln!(stdout).map_err(ssp_copras_data::DataError::from)?;
    outcome.compared_table().write_to(&mut stdout)?;
    Ok(())
}
