use std::process::ExitCode;
use tracing::error;

mod cli;

fn main() -> ExitCode {
    match cli::cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("citegraph-sim: {err}");
            ExitCode::FAILURE
        }
    }
}
