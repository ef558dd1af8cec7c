use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::channel_meta::ChannelMetaStore;
use crate::error::AppError;

/// Builds the Discord gateway client.
///
/// The client is returned unstarted so the caller can grab its shard manager for
/// shutdown before handing it to `start_bot`.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token and channel prefix
/// - `store` - Lifecycle state shared by every voice-state event
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config, store: ChannelMetaStore) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(store, config.channel_prefix.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until every shard has shut down, either through the shard manager or because
/// the gateway connection failed irrecoverably.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
