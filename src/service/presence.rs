//! Classification of voice-state updates into membership transitions.

use crate::model::presence::{VoicePresence, VoiceTransition};

/// Classifies a voice-state update into zero, one, or two transitions.
///
/// A leave is emitted when the previous state was connected to a channel other than
/// the new one. A join is emitted when the new state is connected and the channel
/// changed (or there was no previous state). A channel switch yields both, always
/// leave first. Updates that keep the same channel (mute, deafen, stream) yield none.
///
/// # Arguments
/// - `before` - Previous voice state, if Discord supplied one
/// - `after` - Current voice state
///
/// # Returns
/// - `Vec<VoiceTransition>` - Transitions in the order they must be applied
pub fn classify(before: Option<&VoicePresence>, after: &VoicePresence) -> Vec<VoiceTransition> {
    let mut transitions = Vec::with_capacity(2);
    let before_channel = before.and_then(|state| state.channel_id);

    if let Some(before) = before {
        if before.channel_id.is_some() && before.channel_id != after.channel_id {
            transitions.push(VoiceTransition::Left(*before));
        }
    }

    if after.channel_id.is_some() && (before.is_none() || before_channel != after.channel_id) {
        transitions.push(VoiceTransition::Joined(*after));
    }

    transitions
}
