//! In-memory store for companion channel lifecycle metadata.
//!
//! All `ChannelMeta` entries live in a single map behind one async mutex. Lifecycle
//! handlers hold the lock for the entire transition, including the Discord API calls
//! made while it is held, so every transition across every voice channel is serialized.
//! Nothing is persisted; state lives for the lifetime of the process.

use serenity::all::ChannelId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::model::channel_meta::ChannelMeta;

/// Process-wide owner of every voice channel's `ChannelMeta`.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct ChannelMetaStore {
    metas: Arc<Mutex<HashMap<ChannelId, ChannelMeta>>>,
}

/// Exclusive access to the store for the duration of a lifecycle transition.
///
/// The lock is released when the guard is dropped.
pub struct ChannelMetaGuard<'a> {
    metas: MutexGuard<'a, HashMap<ChannelId, ChannelMeta>>,
}

impl ChannelMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the store lock.
    ///
    /// Waits until any in-flight transition has released the lock.
    ///
    /// # Returns
    /// - `ChannelMetaGuard` - Exclusive access to all entries until dropped
    pub async fn lock(&self) -> ChannelMetaGuard<'_> {
        ChannelMetaGuard {
            metas: self.metas.lock().await,
        }
    }

    /// Returns a copy of the entry for a voice channel without creating one.
    pub async fn snapshot(&self, voice_channel_id: ChannelId) -> Option<ChannelMeta> {
        self.metas.lock().await.get(&voice_channel_id).cloned()
    }

    /// Number of voice channels with an entry, including reset ones.
    pub async fn len(&self) -> usize {
        self.metas.lock().await.len()
    }
}

impl ChannelMetaGuard<'_> {
    /// Looks up the entry for a voice channel, inserting an empty one if absent.
    ///
    /// # Arguments
    /// - `voice_channel_id` - Voice channel the entry belongs to
    ///
    /// # Returns
    /// - `&mut ChannelMeta` - Entry borrowed for as long as the guard is held
    pub fn get_or_create(&mut self, voice_channel_id: ChannelId) -> &mut ChannelMeta {
        self.metas.entry(voice_channel_id).or_default()
    }
}
