use ccheck_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; never let it stop the check.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    let report = Cli::run_from_args();
    println!("{}", report);
    std::process::exit(report.exit_code());
}
