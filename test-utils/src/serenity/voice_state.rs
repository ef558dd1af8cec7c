//! Test factory for creating Serenity VoiceState objects.
//!
//! This module provides factory functions for creating mock Serenity `VoiceState`
//! structs for testing purposes. These factories create valid VoiceState objects by
//! deserializing JSON, simulating a `VOICE_STATE_UPDATE` gateway payload.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState for a user in a guild.
///
/// Creates a VoiceState object by deserializing JSON with the provided values. All
/// flags (mute, deafen, streaming, video) are false and no member data is attached.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `channel_id` - Voice channel ID, or `None` for a disconnected user
/// - `user_id` - Discord user ID (snowflake)
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::voice_state::create_test_voice_state;
///
/// // User connected to a voice channel
/// let state = create_test_voice_state(123456789, Some(555), 42);
///
/// // User who just disconnected
/// let state = create_test_voice_state(123456789, None, 42);
/// assert!(state.channel_id.is_none());
/// ```
pub fn create_test_voice_state(
    guild_id: u64,
    channel_id: Option<u64>,
    user_id: u64,
) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": "00000000000000000000000000000000",
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
