use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    order_ledger::logging::setup_tracing();

    match order_ledger::app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
