use romlink_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("romlink error: {:#}", err);
        std::process::exit(1);
    }
}
