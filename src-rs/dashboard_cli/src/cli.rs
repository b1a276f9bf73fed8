use clap::Parser;

use crate::models::CLIConfig;

/// Operator console for the task scheduler backend.
#[derive(Debug, Parser)]
#[command(name = "idtask-dashboard", version)]
pub struct Cli {
    /// Base URL of the scheduler API.
    #[arg(long = "base", env = "IDTASK_API_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Page to open on start.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Log requests and discarded responses to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> CLIConfig {
        CLIConfig {
            base_url: self.base_url.trim().to_string(),
            start_page: usize::try_from(self.page).unwrap_or(1),
            verbose: self.verbose,
        }
    }
}
