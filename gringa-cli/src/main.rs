use anyhow::Result;
use clap::Parser;
use tracing::debug;

use gringa_cli::{Cli, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging();
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    debug!(command = ?cli.command, "starting");
    let output = gringa_cli::run(&cli.command)?;
    print!("{output}");

    Ok(())
}
