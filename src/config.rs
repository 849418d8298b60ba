use anyhow::{anyhow, Result};
use std::env;

const DEFAULT_HTTP_PORT: u16 = 3000;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token
    pub bot_token: String,
    /// Port for the health endpoints
    pub http_port: u16,
}

impl Config {
    /// Reads `BOT_TOKEN` (or `TELEGRAM_BOT_TOKEN`) and `HTTP_PORT`.
    pub fn from_env() -> Result<Self> {
        let token = env::var("BOT_TOKEN")
            .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
            .unwrap_or_default();

        if token.trim().is_empty() {
            return Err(anyhow!(
                "BOT_TOKEN must be set. Export it or add it to a .env file."
            ));
        }

        let http_port = match env::var("HTTP_PORT") {
            Ok(port) if !port.trim().is_empty() => port
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid HTTP_PORT: {}", port))?,
            _ => DEFAULT_HTTP_PORT,
        };

        Ok(Config {
            bot_token: token,
            http_port,
        })
    }
}
