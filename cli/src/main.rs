use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod commands;
mod config;
pub mod output;
#[cfg(test)]
#[macro_use]
mod test_macros;

use cli::Args;

/// Install the stderr subscriber. `RUST_LOG` overrides the flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    let config = config::resolve(args.db.as_deref())?;
    tracing::debug!(database = %config.describe(), "opening database");
    let db = config.connect()?;

    let output = args.command.run(db.as_ref(), args.format)?;
    println!("{}", output);
    Ok(())
}
