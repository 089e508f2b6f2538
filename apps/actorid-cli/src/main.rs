//! actorid command-line entry point.

mod app;
mod cli;
mod config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let (config, save_error) = match &args.config {
        Some(path) => (config::Config::load_from(path)?, None),
        None => config::Config::load()?,
    };

    // Logs go to stderr; stdout carries only identifiers.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = save_error {
        tracing::warn!(error = %format!("{e:#}"), "default configuration not saved");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting actorid");

    let rt = tokio::runtime::Runtime::new()?;
    let lines = rt.block_on(app::run(&args, &config))?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
