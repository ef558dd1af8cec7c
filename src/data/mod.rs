//! In-memory state owned by the bot process.

pub mod channel_meta;
