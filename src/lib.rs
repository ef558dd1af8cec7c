//! Voice channel companion bot.
//!
//! Watches voice-state updates and gives every occupied voice channel an ephemeral
//! text channel that only its current members (and the bot) can see. The companion
//! channel is created when the first member joins and deleted when the last one leaves.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Gateway client setup and event handlers
//! - **Service Layer** (`service/`) - Join/leave lifecycle, update classification, and
//!   the `ChannelApi` seam over Discord's HTTP API
//! - **Data Layer** (`data/`) - In-memory, lock-guarded lifecycle state per voice channel
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Logging and shutdown signal handling
//!
//! # Event Flow
//!
//! 1. **Gateway** delivers a voice-state update with the previous state from cache
//! 2. **Handler** converts both states into `VoicePresence` values
//! 3. **Service** classifies the update into a leave, a join, or both (leave first)
//! 4. **Service** applies each transition while holding the store lock, calling
//!    Discord to create, delete, or adjust the companion channel as needed

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
