//! Base config: Telegram connection, webhook endpoint, logging. Loaded from env.

use anyhow::{bail, Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::telegram::WebhookOptions;

const DEFAULT_PORT: u16 = 8443;
const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";
const DEFAULT_LOG_FILE: &str = "logs/mistral-bot.log";

/// Telegram-side config. Read once at startup; immutable afterwards.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN (or TELEGRAM_TOKEN)
    pub bot_token: String,
    /// WEBHOOK_URL: public base URL; the token is appended as the secret path.
    pub webhook_url: String,
    /// LISTEN_HOST
    pub listen_host: String,
    /// PORT
    pub port: u16,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Missing BOT_TOKEN or WEBHOOK_URL is an error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None => non_empty_var("BOT_TOKEN")
                .or_else(|| non_empty_var("TELEGRAM_TOKEN"))
                .context("BOT_TOKEN not set")?,
        };
        let webhook_url = non_empty_var("WEBHOOK_URL").context("WEBHOOK_URL not set")?;
        let listen_host =
            non_empty_var("LISTEN_HOST").unwrap_or_else(|| DEFAULT_LISTEN_HOST.to_string());
        let port = match non_empty_var("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", p))?,
            None => DEFAULT_PORT,
        };
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        let log_file = Self::log_file_from_env();

        Ok(Self {
            bot_token,
            webhook_url,
            listen_host,
            port,
            telegram_api_url,
            log_file,
        })
    }

    /// LOG_FILE or its default. Readable before the rest of the config so startup errors get logged.
    pub fn log_file_from_env() -> String {
        non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
    }

    /// Validate URLs and the listen address. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.webhook_url)
            .with_context(|| format!("WEBHOOK_URL is not a valid URL: {}", self.webhook_url))?;
        if url.scheme() != "https" && url.scheme() != "http" {
            bail!("WEBHOOK_URL must be http(s): {}", self.webhook_url);
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        self.listen_addr()?;
        Ok(())
    }

    /// `<WEBHOOK_URL>/<BOT_TOKEN>`: the URL registered with Telegram.
    pub fn webhook_endpoint(&self) -> Result<reqwest::Url> {
        let full = format!("{}/{}", self.webhook_url.trim_end_matches('/'), self.bot_token);
        reqwest::Url::parse(&full).context("WEBHOOK_URL with token path is not a valid URL")
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.listen_host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.listen_host, self.port))
    }

    pub fn webhook_options(&self) -> Result<WebhookOptions> {
        Ok(WebhookOptions {
            listen_addr: self.listen_addr()?,
            url: self.webhook_endpoint()?,
        })
    }
}
