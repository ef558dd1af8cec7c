use crate::error::{config::ConfigError, AppError};

const DEFAULT_CHANNEL_PREFIX: &str = "text-";

pub struct Config {
    pub discord_bot_token: String,

    /// Prepended to the normalized voice channel name when naming a companion channel.
    pub channel_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            channel_prefix: std::env::var("COMPANION_CHANNEL_PREFIX")
                .unwrap_or_else(|_| DEFAULT_CHANNEL_PREFIX.to_string()),
        })
    }
}
