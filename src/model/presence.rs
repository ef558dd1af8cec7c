//! Voice presence domain models.
//!
//! `VoicePresence` is the subset of Serenity's `VoiceState` the lifecycle handlers care
//! about. Converting at the bot boundary keeps the dispatcher and handlers independent
//! of the gateway payload shape.

use serenity::all::{ChannelId, GuildId, UserId, VoiceState};

/// A user's voice connection at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicePresence {
    /// Guild the voice state belongs to, absent for direct-message calls.
    pub guild_id: Option<GuildId>,
    /// Voice channel the user is connected to, absent when disconnected.
    pub channel_id: Option<ChannelId>,
    pub user_id: UserId,
}

impl VoicePresence {
    pub fn new(
        guild_id: Option<GuildId>,
        channel_id: Option<ChannelId>,
        user_id: UserId,
    ) -> Self {
        Self {
            guild_id,
            channel_id,
            user_id,
        }
    }
}

impl From<&VoiceState> for VoicePresence {
    fn from(state: &VoiceState) -> Self {
        Self {
            guild_id: state.guild_id,
            channel_id: state.channel_id,
            user_id: state.user_id,
        }
    }
}

/// A logical membership change derived from a voice-state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    /// The user left the voice channel in the carried presence.
    Left(VoicePresence),
    /// The user joined the voice channel in the carried presence.
    Joined(VoicePresence),
}
