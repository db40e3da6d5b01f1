//! CLI entry point for the lozenge tiling sampler

use clap::Parser;
use lozenge_cftp::io::cli::{Cli, SampleRunner};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> lozenge_cftp::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let mut runner = SampleRunner::new(cli);
    runner.run().map(drop)
}
