use anyhow::Result;
use clap::Parser;

use engagement_console::cli::{run, Cli};
use engagement_console::config::{config, EngagementConsoleConfig};
use engagement_console::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    EngagementConsoleConfig::load_env_file()?;
    let cli = Cli::parse();
    let config = config()?;
    init_telemetry(&config.observability.log_level)?;

    run(cli).await
}
