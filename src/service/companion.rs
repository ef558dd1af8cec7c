//! Companion text channel lifecycle.
//!
//! Creates a hidden text channel the first time someone joins a voice channel, grants
//! each joiner view access, revokes it when they leave, and deletes the channel when the
//! last counted member leaves. Each transition holds the `ChannelMetaStore` lock from
//! start to finish, Discord API calls included, so transitions never interleave.

use serenity::all::Permissions;

use crate::data::channel_meta::ChannelMetaStore;
use crate::error::AppError;
use crate::model::channel_meta::CompanionState;
use crate::model::companion::CreateCompanionChannelParams;
use crate::model::presence::{VoicePresence, VoiceTransition};
use crate::service::discord::ChannelApi;
use crate::service::presence;
use crate::util::normalize::companion_channel_name;

pub struct CompanionChannelService<'a> {
    store: &'a ChannelMetaStore,
    api: &'a dyn ChannelApi,
    channel_prefix: &'a str,
}

impl<'a> CompanionChannelService<'a> {
    pub fn new(
        store: &'a ChannelMetaStore,
        api: &'a dyn ChannelApi,
        channel_prefix: &'a str,
    ) -> Self {
        Self {
            store,
            api,
            channel_prefix,
        }
    }

    /// Applies a voice-state update.
    ///
    /// Classifies the update and runs the resulting transitions in order, leave before
    /// join. A failed join is logged and does not affect the leave that preceded it.
    ///
    /// # Arguments
    /// - `before` - Previous voice state, if Discord supplied one
    /// - `after` - Current voice state
    pub async fn handle_voice_state_update(
        &self,
        before: Option<&VoicePresence>,
        after: &VoicePresence,
    ) {
        for transition in presence::classify(before, after) {
            match transition {
                VoiceTransition::Left(state) => self.user_left(&state).await,
                VoiceTransition::Joined(state) => {
                    if let Err(e) = self.user_joined(&state).await {
                        tracing::error!(
                            "Failed to set up companion channel for user {} joining {:?}: {}",
                            state.user_id,
                            state.channel_id,
                            e
                        );
                    }
                }
            }
        }
    }

    /// Handles a user joining a voice channel.
    ///
    /// Creates the companion text channel if the voice channel has none, then grants the
    /// user view access and counts them as present. The permission grant is best-effort;
    /// a failure is logged and the user is still counted.
    ///
    /// # Arguments
    /// - `presence` - Voice state the user joined with
    ///
    /// # Returns
    /// - `Ok(())` - User counted, or the presence had no guild or channel
    /// - `Err(AppError)` - Fetching the voice channel or creating the companion failed;
    ///   the voice channel's state is left unchanged
    pub async fn user_joined(&self, presence: &VoicePresence) -> Result<(), AppError> {
        let (Some(guild_id), Some(voice_channel_id)) = (presence.guild_id, presence.channel_id)
        else {
            tracing::debug!(
                "Ignoring join by user {} without guild or channel",
                presence.user_id
            );
            return Ok(());
        };

        let mut guard = self.store.lock().await;
        let meta = guard.get_or_create(voice_channel_id);

        let text_channel_id = match meta.text_channel_id {
            Some(text_channel_id) => text_channel_id,
            None => {
                let voice_channel = self.api.get_channel(voice_channel_id).await?;
                let name = companion_channel_name(self.channel_prefix, &voice_channel.name);

                let params = CreateCompanionChannelParams::for_voice_channel(
                    guild_id,
                    &voice_channel,
                    name,
                    self.api.current_user_id(),
                );
                let text_channel_id = self.api.create_text_channel(params).await?;
                meta.attach(text_channel_id);

                tracing::info!(
                    "Created companion channel {} for voice channel {} ({}) in guild {}",
                    text_channel_id,
                    voice_channel.name,
                    voice_channel_id,
                    guild_id
                );

                text_channel_id
            }
        };

        if let Err(e) = self
            .api
            .set_member_permission(
                text_channel_id,
                presence.user_id,
                Permissions::VIEW_CHANNEL,
                Permissions::empty(),
            )
            .await
        {
            tracing::error!(
                "Failed to grant user {} access to companion channel {}: {}",
                presence.user_id,
                text_channel_id,
                e
            );
        }

        meta.member_joined();

        tracing::debug!(
            "User {} joined voice channel {}, {} member(s) counted",
            presence.user_id,
            voice_channel_id,
            meta.members_count
        );

        Ok(())
    }

    /// Handles a user leaving a voice channel.
    ///
    /// Does nothing if the voice channel has no companion channel. Otherwise uncounts the
    /// user and either deletes the companion channel, when nobody is left, or clears the
    /// user's permission overwrite on it. Discord failures are logged and not retried;
    /// the state is updated regardless.
    ///
    /// # Arguments
    /// - `presence` - Voice state the user left from
    pub async fn user_left(&self, presence: &VoicePresence) {
        let Some(voice_channel_id) = presence.channel_id else {
            return;
        };

        let mut guard = self.store.lock().await;
        let meta = guard.get_or_create(voice_channel_id);

        let CompanionState::HasCompanion {
            text_channel_id, ..
        } = meta.state()
        else {
            return;
        };

        if meta.member_left() == 0 {
            if let Err(e) = self.api.delete_channel(text_channel_id).await {
                tracing::error!(
                    "Failed to delete companion channel {} for voice channel {}: {}",
                    text_channel_id,
                    voice_channel_id,
                    e
                );
            }
            meta.reset();

            tracing::info!(
                "Voice channel {} is empty, removed companion channel {}",
                voice_channel_id,
                text_channel_id
            );
        } else {
            if let Err(e) = self
                .api
                .set_member_permission(
                    text_channel_id,
                    presence.user_id,
                    Permissions::empty(),
                    Permissions::empty(),
                )
                .await
            {
                tracing::error!(
                    "Failed to revoke user {} access to companion channel {}: {}",
                    presence.user_id,
                    text_channel_id,
                    e
                );
            }

            tracing::debug!(
                "User {} left voice channel {}, {} member(s) counted",
                presence.user_id,
                voice_channel_id,
                meta.members_count
            );
        }
    }
}
