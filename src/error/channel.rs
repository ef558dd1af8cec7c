use serenity::all::ChannelId;
use thiserror::Error;

/// Unexpected channel shapes returned by the Discord API.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The channel exists but does not belong to a guild.
    ///
    /// Voice-state updates only reference guild voice channels, so this indicates the
    /// channel was replaced or the event was malformed.
    #[error("Channel {0} is not a guild channel")]
    NotGuildChannel(ChannelId),
}
