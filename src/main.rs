//! CLI entry point for bilateral filter calibration

use bilateral_search::io::cli::{Cli, SearchRunner};
use bilateral_search::io::logging::init_logging;
use clap::Parser;

fn main() -> bilateral_search::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref())?;
    let runner = SearchRunner::new(cli);
    runner.run().map(|_| ())
}
