//! Domain models for companion channel lifecycle tracking.
//!
//! - `channel_meta` - Per-voice-channel lifecycle metadata and its observable state
//! - `companion` - Parameters exchanged with Discord when managing companion channels
//! - `presence` - Voice presence snapshots and the transitions derived from them

pub mod channel_meta;
pub mod companion;
pub mod presence;
