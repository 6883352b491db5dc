//! CLI entry point for the region infill tool

use clap::Parser;
use regionfill::io::cli::{Cli, InfillProcessor};

fn main() -> regionfill::Result<()> {
    let cli = Cli::parse();
    let processor = InfillProcessor::new(cli);
    processor.process()?;
    Ok(())
}
