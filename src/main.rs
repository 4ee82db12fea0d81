//! Blocklist parser - Entry point.
//!
//! Parses the command line, runs the selected mode and prints the resulting
//! domains to standard output. Logs go to standard error.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blocklist_parser::cli::Cli;
use blocklist_parser::config::Config;
use blocklist_parser::runner::Runner;

/// Log to stderr so stdout only carries the result. `RUST_LOG` overrides the
/// default level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    let Some(options) = cli.run_options() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let runner = Runner::new(config).context("Failed to create HTTP client")?;
    let outcome = runner.run(&options).await?;

    let Some(text) = outcome.render() else {
        info!("nothing to output");
        return Ok(());
    };

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, format!("{text}\n"))
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote result");
        }
        None => println!("{text}"),
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse()).await
}
