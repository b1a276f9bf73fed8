mod cli;
mod models;
mod render;
mod repl;

use anyhow::Context;
use clap::Parser;
use idtask_dashboard::api::HTTPClient;

use repl::REPL;

fn main() {
    if let Err(err) = run() {
        eprintln!("idtask-dashboard error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = cli::Cli::parse().into_config();
    init_tracing(config.verbose)?;

    let client = HTTPClient::new(config.client_config()).context("failed to build http client")?;
    let mut repl = REPL::new(config, client);
    repl.run();
    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("IDTASK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing subscriber: {err}"))
}
