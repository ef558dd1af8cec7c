//! Voice-state event handler.
//!
//! Serenity delivers the previous voice state from its guild cache and the new one from
//! the gateway payload. Both are converted to `VoicePresence` and passed to the companion
//! channel lifecycle, which decides whether the update is a join, a leave, or both.

use serenity::all::{Context, VoiceState};

use crate::data::channel_meta::ChannelMetaStore;
use crate::model::presence::VoicePresence;
use crate::service::companion::CompanionChannelService;
use crate::service::discord::DiscordChannelApi;

/// Handles the voice_state_update event.
///
/// # Arguments
/// - `store` - Lifecycle state shared by all events
/// - `channel_prefix` - Prefix for companion channel names
/// - `ctx` - Discord context providing the HTTP client and the bot's own user
/// - `old` - Previous voice state if it was cached
/// - `new` - Updated voice state from Discord
pub async fn handle_voice_state_update(
    store: &ChannelMetaStore,
    channel_prefix: &str,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let bot_user_id = ctx.cache.current_user().id;
    let api = DiscordChannelApi::new(ctx.http.clone(), bot_user_id);
    let service = CompanionChannelService::new(store, &api, channel_prefix);

    let before = old.as_ref().map(VoicePresence::from);
    let after = VoicePresence::from(&new);

    service.handle_voice_state_update(before.as_ref(), &after).await;
}
