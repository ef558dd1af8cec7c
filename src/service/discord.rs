//! Discord channel-management operations used by the lifecycle handlers.
//!
//! `ChannelApi` is the seam between the companion lifecycle and Discord's HTTP API.
//! `DiscordChannelApi` implements it on top of Serenity's shared HTTP client; tests
//! substitute a recording implementation.

use serenity::all::{
    ChannelId, ChannelType, CreateChannel, Http, PermissionOverwrite, PermissionOverwriteType,
    Permissions, UserId,
};
use serenity::async_trait;
use std::sync::Arc;

use crate::error::{channel::ChannelError, AppError};
use crate::model::companion::{CreateCompanionChannelParams, VoiceChannelInfo};

/// Channel operations the lifecycle handlers need from Discord.
#[async_trait]
pub trait ChannelApi: Send + Sync {
    /// The bot's own user ID.
    fn current_user_id(&self) -> UserId;

    /// Fetches the name and category of a guild channel.
    async fn get_channel(&self, channel_id: ChannelId) -> Result<VoiceChannelInfo, AppError>;

    /// Creates a text channel and returns its ID.
    async fn create_text_channel(
        &self,
        params: CreateCompanionChannelParams,
    ) -> Result<ChannelId, AppError>;

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError>;

    /// Sets a member permission overwrite on a channel, replacing any existing one.
    async fn set_member_permission(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
        allow: Permissions,
        deny: Permissions,
    ) -> Result<(), AppError>;
}

/// `ChannelApi` backed by Serenity's HTTP client.
pub struct DiscordChannelApi {
    http: Arc<Http>,
    bot_user_id: UserId,
}

impl DiscordChannelApi {
    /// Creates a new API wrapper.
    ///
    /// # Arguments
    /// - `http` - Serenity HTTP client shared with the gateway client
    /// - `bot_user_id` - The bot's own user, taken from the cache or ready event
    pub fn new(http: Arc<Http>, bot_user_id: UserId) -> Self {
        Self { http, bot_user_id }
    }
}

#[async_trait]
impl ChannelApi for DiscordChannelApi {
    fn current_user_id(&self) -> UserId {
        self.bot_user_id
    }

    async fn get_channel(&self, channel_id: ChannelId) -> Result<VoiceChannelInfo, AppError> {
        let channel = self.http.get_channel(channel_id).await?;

        let Some(guild_channel) = channel.guild() else {
            return Err(ChannelError::NotGuildChannel(channel_id).into());
        };

        Ok(VoiceChannelInfo::from(&guild_channel))
    }

    async fn create_text_channel(
        &self,
        params: CreateCompanionChannelParams,
    ) -> Result<ChannelId, AppError> {
        let overwrites = params.permission_overwrites();

        let mut builder = CreateChannel::new(params.name)
            .kind(ChannelType::Text)
            .topic(params.topic)
            .permissions(overwrites);

        if let Some(parent_id) = params.parent_id {
            builder = builder.category(parent_id);
        }

        let channel = params.guild_id.create_channel(&self.http, builder).await?;

        Ok(channel.id)
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        channel_id.delete(&self.http).await?;

        Ok(())
    }

    async fn set_member_permission(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
        allow: Permissions,
        deny: Permissions,
    ) -> Result<(), AppError> {
        let overwrite = PermissionOverwrite {
            allow,
            deny,
            kind: PermissionOverwriteType::Member(user_id),
        };

        channel_id.create_permission(&self.http, overwrite).await?;

        Ok(())
    }
}
