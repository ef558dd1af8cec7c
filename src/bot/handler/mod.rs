use serenity::all::{Context, EventHandler, Ready, VoiceState};
use serenity::async_trait;

use crate::data::channel_meta::ChannelMetaStore;

pub mod ready;
pub mod voice_state;

/// Discord bot event handler
pub struct Handler {
    pub store: ChannelMetaStore,
    pub channel_prefix: String,
}

impl Handler {
    pub fn new(store: ChannelMetaStore, channel_prefix: String) -> Self {
        Self {
            store,
            channel_prefix,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member joins, leaves, moves between, or changes state in a voice channel
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice_state::handle_voice_state_update(&self.store, &self.channel_prefix, ctx, old, new)
            .await;
    }
}
