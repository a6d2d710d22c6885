use clap::Parser;
use colored::Colorize;
use flexi_logger::{Logger, LoggerHandle};

mod cli;
use cli::setup::Cli;

fn main() {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) -> Option<LoggerHandle> {
    let spec = if verbose { "warn, quire=debug" } else { "warn" };
    match Logger::try_with_env_or_str(spec).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to start logging: {}", e);
            None
        }
    }
}
