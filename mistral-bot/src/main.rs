//! mistral-bot: entry point. Loads config, then serves the Telegram webhook.

use anyhow::Result;
use clap::Parser;
use mistral_bot::{load_config, run_relay_bot, Cli, Commands};
use telegram_bot::{init_tracing, BaseConfig};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&BaseConfig::log_file_from_env())?;

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token).inspect_err(|e| {
                error!(error = %format!("{:#}", e), "Startup aborted: invalid configuration")
            })?;
            run_relay_bot(config).await
        }
    }
}
