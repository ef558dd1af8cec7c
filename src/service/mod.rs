//! Business logic for companion text channels.
//!
//! - `companion` - Join/leave lifecycle of companion text channels
//! - `discord` - Discord channel-management operations behind the `ChannelApi` trait
//! - `presence` - Classification of voice-state updates into join/leave transitions

pub mod companion;
pub mod discord;
pub mod presence;
