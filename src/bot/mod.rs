//! Discord bot integration for companion text channels.
//!
//! This module connects the bot to Discord's gateway and routes voice-state updates to
//! the companion channel lifecycle. The gateway client owns the shared HTTP client used
//! for every channel operation, and the `ChannelMetaStore` is handed to the event handler
//! at construction so all events share one lifecycle state.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populates the guild cache, which is where Serenity keeps the voice states
//!   it hands back as the previous state of an update. Without it leaves go unnoticed.
//! - `GUILD_VOICE_STATES` - Receive voice-state updates when members join, leave, or
//!   move between voice channels
//!
//! Neither is privileged. The bot role additionally needs the Manage Channels and
//! Manage Roles permissions to create companion channels and edit their overwrites.

pub mod handler;
pub mod start;
