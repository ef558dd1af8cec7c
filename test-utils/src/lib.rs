//! Companion Bot Test Utils
//!
//! Provides shared testing utilities for the companion bot. The bot keeps no persistent
//! state, so the utilities focus on building the Serenity gateway payloads the bot reacts
//! to without a live Discord connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_voice_state;
//!
//! #[test]
//! fn converts_voice_state() {
//!     // User 3 connected to voice channel 2 in guild 1
//!     let state = create_test_voice_state(1, Some(2), 3);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
