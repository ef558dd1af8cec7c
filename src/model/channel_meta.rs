//! Companion channel lifecycle metadata.
//!
//! Each voice channel the bot has seen gets one `ChannelMeta` entry tracking its
//! companion text channel, if any, and how many members are currently counted as
//! present. Entries are reset, never removed, once the voice channel empties.

use serenity::all::ChannelId;

/// Lifecycle metadata for a single voice channel.
///
/// A zero value (`Default`) means no companion channel exists and nobody is counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMeta {
    /// Companion text channel, present while at least one member is counted.
    pub text_channel_id: Option<ChannelId>,
    /// Members currently counted as present in the voice channel.
    pub members_count: u32,
}

/// Observable lifecycle state of a voice channel's companion text channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionState {
    NoCompanion,
    HasCompanion {
        text_channel_id: ChannelId,
        members_count: u32,
    },
}

impl ChannelMeta {
    /// Returns the lifecycle state derived from the stored fields.
    pub fn state(&self) -> CompanionState {
        match self.text_channel_id {
            Some(text_channel_id) => CompanionState::HasCompanion {
                text_channel_id,
                members_count: self.members_count,
            },
            None => CompanionState::NoCompanion,
        }
    }

    /// Records a newly created companion channel.
    pub fn attach(&mut self, text_channel_id: ChannelId) {
        self.text_channel_id = Some(text_channel_id);
    }

    /// Counts one more member as present.
    pub fn member_joined(&mut self) {
        self.members_count = self.members_count.saturating_add(1);
    }

    /// Counts one member as gone and returns the remaining count.
    ///
    /// Saturates at zero so the count never underflows.
    pub fn member_left(&mut self) -> u32 {
        self.members_count = self.members_count.saturating_sub(1);
        self.members_count
    }

    /// Returns the entry to the `NoCompanion` state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
