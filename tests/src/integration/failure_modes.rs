//! # Failure Modes
//!
//! What callers observe when things go wrong: the authority process dying,
//! a policy rejection, and version skew between client and authority.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use directory_authority::{
        AuthorityService, DirectoryStub, SharedRegistry, UidAllowlist, UserRegistry,
    };
    use directory_bus::{channel, AuthorityEndpoint, BusConfig};
    use directory_client::{DirectoryProxy, UserManagerClient};
    use directory_types::{DirectoryError, QueryFilter, UserDirectory, UserId, UserInfo};
    use directory_wire::{Fault, Opcode, ReplyFrame};

    const CALLER_UID: u32 = 1_000;

    fn small_registry() -> SharedRegistry {
        crate::init_tracing();
        let mut registry = UserRegistry::new();
        registry.insert(UserInfo::new(UserId(1), "owner")).unwrap();
        registry
            .insert(UserInfo::profile_of(UserId(2), UserId(1), "work"))
            .unwrap();
        registry.into_shared()
    }

    /// A call issued after the authority dies raises Unreachable promptly,
    /// it does not hang.
    #[tokio::test]
    async fn test_authority_death_is_unreachable_not_a_hang() {
        let (transport, endpoint) = channel(&BusConfig::default());
        let handle = AuthorityService::allow_all(small_registry()).spawn(endpoint);
        let proxy = DirectoryProxy::new(Arc::new(transport.clone()), CALLER_UID);

        // Healthy first, to prove the session was live.
        assert!(proxy.get_user_info(UserId(1)).await.unwrap().is_some());

        // Kill the authority and wait for the task to be gone.
        handle.abort();
        let _ = handle.await;

        let outcome = timeout(
            Duration::from_secs(2),
            proxy.list_users(QueryFilter::none()),
        )
        .await
        .expect("call must fail fast, not hang");

        let err = outcome.unwrap_err();
        assert!(err.is_transport(), "expected Unreachable, got {err:?}");
    }

    /// A denied caller can tell "not allowed" from "transport broke".
    #[tokio::test]
    async fn test_policy_denial_distinct_from_transport_failure() {
        let (transport, endpoint) = channel(&BusConfig::default());
        let service =
            AuthorityService::new(small_registry(), Arc::new(UidAllowlist::new([CALLER_UID])));
        let handle = service.spawn(endpoint);

        let stranger = DirectoryProxy::new(Arc::new(transport.clone()), 9_999);
        let err = stranger.get_user_info(UserId(1)).await.unwrap_err();
        assert!(matches!(err, DirectoryError::NotAuthorized(_)));
        assert!(!err.is_transport());

        let allowed = DirectoryProxy::new(Arc::new(transport.clone()), CALLER_UID);
        assert!(allowed.get_user_info(UserId(1)).await.is_ok());

        drop(stranger);
        drop(allowed);
        drop(transport);
        handle.await.unwrap();
    }

    /// Serve loop for an authority built before the wider listing variants
    /// existed: codes above `newest_known` answer with UnknownOperation,
    /// everything else dispatches normally.
    async fn legacy_authority(
        mut endpoint: AuthorityEndpoint,
        registry: SharedRegistry,
        newest_known: u32,
    ) {
        let stub = DirectoryStub::new(registry);
        while let Some(call) = endpoint.next_call().await {
            let reply = if call.frame.opcode <= newest_known
                || call.frame.opcode > Opcode::ListUsersFull.code()
            {
                stub.handle_transaction(&call.frame)
            } else {
                ReplyFrame::fault(
                    call.frame.correlation_id,
                    Fault::UnknownOperation {
                        code: call.frame.opcode,
                    },
                )
            };
            let _ = call.reply_tx.send(reply);
        }
    }

    /// The manager walks list_users_full → list_users_partial →
    /// list_users against authorities of decreasing age.
    #[tokio::test]
    async fn test_fallback_cascade_across_authority_versions() {
        for newest_known in [1u32, 2, 3] {
            let (transport, endpoint) = channel(&BusConfig::default());
            let handle = tokio::spawn(legacy_authority(
                endpoint,
                small_registry(),
                newest_known,
            ));

            let manager = UserManagerClient::new(DirectoryProxy::new(
                Arc::new(transport.clone()),
                CALLER_UID,
            ));

            let users = manager
                .get_users_filtered(false, true, false)
                .await
                .unwrap_or_else(|e| panic!("authority knowing codes <= {newest_known}: {e}"));
            let ids: Vec<u32> = users.iter().map(|u| u.id.raw()).collect();
            assert_eq!(ids, vec![1, 2]);

            drop(manager);
            drop(transport);
            handle.await.unwrap();
        }
    }

    /// A proxy from the future fails with a version fault, not garbage.
    #[tokio::test]
    async fn test_version_skew_on_envelope() {
        use directory_bus::Transport;
        use directory_wire::{codec, GetUserInfoRequest, TransactionFrame};

        let (transport, endpoint) = channel(&BusConfig::default());
        let handle = AuthorityService::allow_all(small_registry()).spawn(endpoint);

        let payload = codec::encode(&GetUserInfoRequest { id: UserId(1) }).unwrap();
        let mut frame = TransactionFrame::new(CALLER_UID, Opcode::GetUserInfo, payload);
        frame.version = 7;

        let reply = transport.call(frame).await.unwrap();
        assert!(matches!(
            reply.result,
            Err(Fault::UnsupportedVersion { received: 7, .. })
        ));

        drop(transport);
        handle.await.unwrap();
    }
}
