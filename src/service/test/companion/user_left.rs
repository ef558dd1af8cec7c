use super::*;

/// Joins `user_ids` to the primary voice channel in order.
async fn join_all(service: &CompanionChannelService<'_>, user_ids: &[u64]) {
    for user_id in user_ids {
        service
            .user_joined(&presence(Some(VOICE_CHANNEL_ID), *user_id))
            .await
            .unwrap();
    }
}

/// Tests a leave from a voice channel without a companion.
///
/// Expected: no API calls and NoCompanion state
#[tokio::test]
async fn noop_without_companion() {
    let store = ChannelMetaStore::new();
    let api = api();
    let service = CompanionChannelService::new(&store, &api, PREFIX);

    service.user_left(&presence(Some(VOICE_CHANNEL_ID), 10)).await;

    assert!(api.calls().is_empty());
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::NoCompanion
    );
}

/// Tests a leave while other members remain.
///
/// Verifies that the departing user's overwrite is cleared and the companion stays.
///
/// Expected: HasCompanion with one member counted
#[tokio::test]
async fn revokes_access_when_members_remain() {
    let store = ChannelMetaStore::new();
    let api = api();
    let service = CompanionChannelService::new(&store, &api, PREFIX);
    join_all(&service, &[10, 11]).await;
    let companion = api.created_channels()[0];

    service.user_left(&presence(Some(VOICE_CHANNEL_ID), 10)).await;

    assert_eq!(api.calls().last(), Some(&revoke(companion, 10)));
    assert!(api.deleted_channels().is_empty());
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::HasCompanion {
            text_channel_id: companion,
            members_count: 1
        }
    );
}

/// Tests the last member leaving.
///
/// Verifies that the companion channel is deleted and the entry is reset, not removed.
///
/// Expected: NoCompanion with the store entry retained
#[tokio::test]
async fn deletes_companion_when_last_member_leaves() {
    let store = ChannelMetaStore::new();
    let api = api();
    let service = CompanionChannelService::new(&store, &api, PREFIX);
    join_all(&service, &[10]).await;
    let companion = api.created_channels()[0];

    service.user_left(&presence(Some(VOICE_CHANNEL_ID), 10)).await;

    assert_eq!(api.deleted_channels(), vec![companion]);
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::NoCompanion
    );
    assert_eq!(store.len().await, 1);
}

/// Tests the full two-member lifecycle.
///
/// join(A) creates, join(B) reuses, leave(A) keeps, leave(B) deletes.
///
/// Expected: one channel created and deleted, NoCompanion at the end
#[tokio::test]
async fn two_member_lifecycle() {
    let store = ChannelMetaStore::new();
    let api = api();
    let service = CompanionChannelService::new(&store, &api, PREFIX);

    join_all(&service, &[10]).await;
    let companion = api.created_channels()[0];
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::HasCompanion {
            text_channel_id: companion,
            members_count: 1
        }
    );

    join_all(&service, &[11]).await;
    assert_eq!(api.created_channels().len(), 1);
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::HasCompanion {
            text_channel_id: companion,
            members_count: 2
        }
    );

    service.user_left(&presence(Some(VOICE_CHANNEL_ID), 10)).await;
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::HasCompanion {
            text_channel_id: companion,
            members_count: 1
        }
    );

    service.user_left(&presence(Some(VOICE_CHANNEL_ID), 11)).await;
    assert_eq!(api.deleted_channels(), vec![companion]);
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::NoCompanion
    );
}

/// Tests a rejoin after the companion was deleted.
///
/// Expected: a fresh companion channel is created
#[tokio::test]
async fn rejoin_after_delete_creates_new_companion() {
    let store = ChannelMetaStore::new();
    let api = api();
    let service = CompanionChannelService::new(&store, &api, PREFIX);

    join_all(&service, &[10]).await;
    service.user_left(&presence(Some(VOICE_CHANNEL_ID), 10)).await;
    join_all(&service, &[10]).await;

    let created = api.created_channels();
    assert_eq!(created.len(), 2);
    assert_ne!(created[0], created[1]);
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::HasCompanion {
            text_channel_id: created[1],
            members_count: 1
        }
    );
}

/// Tests more leaves than joins.
///
/// Verifies that extra leaves after the companion is gone are no-ops and the count
/// never underflows.
///
/// Expected: single delete call and a zero count
#[tokio::test]
async fn extra_leaves_never_underflow() {
    let store = ChannelMetaStore::new();
    let api = api();
    let service = CompanionChannelService::new(&store, &api, PREFIX);
    join_all(&service, &[10]).await;

    for user_id in [10, 11, 12] {
        service
            .user_left(&presence(Some(VOICE_CHANNEL_ID), user_id))
            .await;
    }

    assert_eq!(api.deleted_channels().len(), 1);
    assert_eq!(
        store
            .snapshot(ChannelId::new(VOICE_CHANNEL_ID))
            .await
            .map(|meta| meta.members_count),
        Some(0)
    );
}

/// Tests the companion deletion failing.
///
/// Verifies that deletion is best-effort and the state is reset anyway.
///
/// Expected: NoCompanion after the failed delete
#[tokio::test]
async fn delete_failure_still_resets_state() {
    let store = ChannelMetaStore::new();
    let api = api().failing_delete();
    let service = CompanionChannelService::new(&store, &api, PREFIX);
    join_all(&service, &[10]).await;

    service.user_left(&presence(Some(VOICE_CHANNEL_ID), 10)).await;

    assert_eq!(api.deleted_channels().len(), 1);
    assert_eq!(
        state_of(&store, VOICE_CHANNEL_ID).await,
        CompanionState::NoCompanion
    );
}
