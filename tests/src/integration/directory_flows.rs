//! # Directory Query Flows
//!
//! End-to-end scenarios: a real authority service behind the in-memory
//! transport, queried through the client proxy. Exercises the reference
//! registry from the design discussion - users {1 primary, 2 enabled
//! profile of 1, 3 disabled profile of 1, 4 primary dying}.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::task::JoinHandle;
    use tokio::time::timeout;

    use directory_authority::{AuthorityService, SharedRegistry, UserRegistry};
    use directory_bus::{channel, BusConfig, ChannelTransport};
    use directory_client::{DirectoryProxy, UserManagerClient};
    use directory_types::{QueryFilter, UserDirectory, UserId, UserInfo};

    const CALLER_UID: u32 = 1_000;

    /// Reference registry used across the scenarios.
    fn reference_registry() -> SharedRegistry {
        crate::init_tracing();
        let mut registry = UserRegistry::new();
        registry.insert(UserInfo::new(UserId(1), "owner")).unwrap();
        registry
            .insert(UserInfo::profile_of(UserId(2), UserId(1), "work"))
            .unwrap();
        registry
            .insert(UserInfo {
                disabled: true,
                ..UserInfo::profile_of(UserId(3), UserId(1), "kids")
            })
            .unwrap();
        registry
            .insert(UserInfo {
                dying: true,
                ..UserInfo::new(UserId(4), "guest")
            })
            .unwrap();
        registry.into_shared()
    }

    /// Spawn an authority over the reference registry and hand back a
    /// connected proxy.
    fn start_authority() -> (DirectoryProxy, JoinHandle<()>, ChannelTransport) {
        let (transport, endpoint) = channel(&BusConfig::default());
        let handle = AuthorityService::allow_all(reference_registry()).spawn(endpoint);
        let proxy = DirectoryProxy::new(Arc::new(transport.clone()), CALLER_UID);
        (proxy, handle, transport)
    }

    fn ids(users: &[UserInfo]) -> Vec<u32> {
        users.iter().map(|u| u.id.raw()).collect()
    }

    #[tokio::test]
    async fn test_reference_scenario() {
        let (proxy, handle, transport) = start_authority();

        let users = proxy.list_users(QueryFilter::dying(true)).await.unwrap();
        assert_eq!(ids(&users), vec![1, 2, 3]);

        let profile_ids = proxy.get_profile_ids(UserId(2), true).await.unwrap();
        assert_eq!(profile_ids, vec![UserId(1), UserId(2)]);

        let profile_ids = proxy.get_profile_ids(UserId(2), false).await.unwrap();
        assert_eq!(profile_ids, vec![UserId(1), UserId(2), UserId(3)]);

        assert_eq!(proxy.get_user_info(UserId(5)).await.unwrap(), None);

        drop(proxy);
        drop(transport);
        handle.await.unwrap();
    }

    /// One-arg ≡ two-arg ≡ three-arg with `false` defaults, through the
    /// wire rather than just through the filter type.
    #[tokio::test]
    async fn test_listing_variants_agree() {
        let (proxy, handle, transport) = start_authority();

        for exclude_dying in [false, true] {
            let one = proxy.list_users_basic(exclude_dying).await.unwrap();
            let two = proxy.list_users_partial(false, exclude_dying).await.unwrap();
            let three = proxy
                .list_users_full(false, exclude_dying, false)
                .await
                .unwrap();
            assert_eq!(one, two);
            assert_eq!(two, three);
        }

        drop(proxy);
        drop(transport);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_profile_grouping_symmetric_over_wire() {
        let (proxy, handle, transport) = start_authority();

        let family = vec![UserId(1), UserId(2), UserId(3)];
        for member in &family {
            let group = proxy.get_profile_ids(*member, false).await.unwrap();
            assert_eq!(group, family, "asked from {member}");
        }

        // Identifier projection of get_profiles matches get_profile_ids,
        // in the same order.
        for member in &family {
            for enabled_only in [false, true] {
                let from_ids = proxy.get_profile_ids(*member, enabled_only).await.unwrap();
                let from_records: Vec<UserId> = proxy
                    .get_profiles(*member, enabled_only)
                    .await
                    .unwrap()
                    .iter()
                    .map(|u| u.id)
                    .collect();
                assert_eq!(from_ids, from_records);
            }
        }

        drop(proxy);
        drop(transport);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_manager_defaults_exclude_everything() {
        let (transport, endpoint) = channel(&BusConfig::default());
        let registry = reference_registry();
        registry
            .write()
            .insert(UserInfo {
                partial: true,
                ..UserInfo::new(UserId(10), "half-made")
            })
            .unwrap();
        registry
            .write()
            .insert(UserInfo {
                pre_created: true,
                ..UserInfo::new(UserId(11), "spare")
            })
            .unwrap();
        let handle = AuthorityService::allow_all(registry).spawn(endpoint);

        let manager =
            UserManagerClient::new(DirectoryProxy::new(Arc::new(transport.clone()), CALLER_UID));

        // get_users() drops partial, dying, and pre-created records.
        let users = manager.get_users().await.unwrap();
        assert_eq!(ids(&users), vec![1, 2, 3]);

        // An explicit all-false triple sees every record.
        let users = manager.get_users_filtered(false, false, false).await.unwrap();
        assert_eq!(ids(&users), vec![1, 2, 3, 4, 10, 11]);

        drop(manager);
        drop(transport);
        handle.await.unwrap();
    }

    /// Concurrent callers each get consistent, independent answers.
    #[tokio::test]
    async fn test_concurrent_callers() {
        let (proxy, handle, transport) = start_authority();

        let mut calls = Vec::new();
        for _ in 0..16 {
            let proxy = proxy.clone();
            calls.push(tokio::spawn(async move {
                proxy.list_users(QueryFilter::none()).await
            }));
        }

        for call in calls {
            let users = timeout(Duration::from_secs(5), call)
                .await
                .unwrap()
                .unwrap()
                .unwrap();
            assert_eq!(ids(&users), vec![1, 2, 3, 4]);
        }

        drop(proxy);
        drop(transport);
        handle.await.unwrap();
    }
}
