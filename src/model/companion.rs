//! Parameter and result types for companion channel operations against Discord.

use serenity::all::{
    ChannelId, GuildChannel, GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions,
    RoleId, UserId,
};

/// Fields of a voice channel needed to derive its companion text channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannelInfo {
    /// Display name of the voice channel.
    pub name: String,
    /// Category the voice channel is placed under, if any.
    pub parent_id: Option<ChannelId>,
}

impl From<&GuildChannel> for VoiceChannelInfo {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            name: channel.name.clone(),
            parent_id: channel.parent_id,
        }
    }
}

/// Parameters for creating a companion text channel.
///
/// The created channel denies view access to `hidden_from` and allows it for
/// `visible_to`; members are granted access individually afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCompanionChannelParams {
    pub guild_id: GuildId,
    pub name: String,
    pub parent_id: Option<ChannelId>,
    pub topic: String,
    /// Role denied view access, the guild's `@everyone` role.
    pub hidden_from: RoleId,
    /// Member allowed view access, the bot itself.
    pub visible_to: UserId,
}

impl CreateCompanionChannelParams {
    /// Builds the parameters for the companion of a voice channel.
    ///
    /// # Arguments
    /// - `guild_id` - Guild both channels belong to
    /// - `voice_channel` - Name and category of the voice channel
    /// - `name` - Already normalized text channel name
    /// - `bot_user_id` - The bot's own user, kept able to see the channel
    pub fn for_voice_channel(
        guild_id: GuildId,
        voice_channel: &VoiceChannelInfo,
        name: String,
        bot_user_id: UserId,
    ) -> Self {
        Self {
            guild_id,
            name,
            parent_id: voice_channel.parent_id,
            topic: companion_topic(&voice_channel.name),
            hidden_from: guild_id.everyone_role(),
            visible_to: bot_user_id,
        }
    }

    /// Overwrites applied when the channel is created.
    ///
    /// Denies `VIEW_CHANNEL` to `hidden_from` and allows it for `visible_to`.
    pub fn permission_overwrites(&self) -> Vec<PermissionOverwrite> {
        vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(self.hidden_from),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(self.visible_to),
            },
        ]
    }
}

/// Topic set on every companion text channel.
pub fn companion_topic(voice_channel_name: &str) -> String {
    format!(
        "This is an **ephemeral text channel** for the voice channel \"{}\". You can use it to send media related to conversations happening in the voice channel. It will be deleted once everyone leaves.",
        voice_channel_name
    )
}
