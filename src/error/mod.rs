//! Error types for the companion bot.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors and the
//! serenity client error. Startup surfaces it through `main`'s return value, which makes
//! configuration errors fatal. Event handlers only ever log it, so a failure stays
//! isolated to the single voice-state update that caused it.

pub mod channel;
pub mod config;

use thiserror::Error;

use crate::error::{channel::ChannelError, config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the bot cannot connect without a valid token.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A channel returned by Discord did not have the expected shape.
    #[error(transparent)]
    ChannelErr(#[from] ChannelError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
