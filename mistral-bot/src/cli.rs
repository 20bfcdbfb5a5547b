use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mistral-bot")]
#[command(about = "Telegram webhook bot answering with Mistral AI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register the webhook and serve updates
    Run {
        /// Bot token (overrides BOT_TOKEN)
        #[arg(short, long)]
        token: Option<String>,
    },
}
