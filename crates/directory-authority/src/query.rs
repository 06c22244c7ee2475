//! # Directory Query Logic
//!
//! The filtering and profile-grouping rules, pure over one registry
//! snapshot. Both the stub and the in-process [`crate::LocalDirectory`]
//! call these, so the two sides of the boundary cannot drift apart.
//!
//! Ordering everywhere is registry insertion order, deterministic for
//! identical snapshots.

use crate::registry::UserRegistry;
use directory_types::{QueryFilter, UserId, UserInfo};

/// Users admitted by `filter`, in insertion order.
#[must_use]
pub fn list_users(registry: &UserRegistry, filter: QueryFilter) -> Vec<UserInfo> {
    registry
        .records()
        .iter()
        .filter(|user| filter.admits(user))
        .cloned()
        .collect()
}

/// Exact lookup; `None` is a normal outcome.
#[must_use]
pub fn get_user_info(registry: &UserRegistry, id: UserId) -> Option<UserInfo> {
    registry.get(id).cloned()
}

/// Full records of the profile group `id` belongs to.
///
/// The group is resolved through the group root: a profile resolves to its
/// parent first, so querying any member returns the whole family, always in
/// the same order. A user with no profiles yields a singleton; an unknown
/// `id` yields an empty sequence.
#[must_use]
pub fn profiles(registry: &UserRegistry, id: UserId, enabled_only: bool) -> Vec<UserInfo> {
    let Some(root) = group_root(registry, id) else {
        return Vec::new();
    };
    registry
        .records()
        .iter()
        .filter(|user| user.id == root || user.parent_id == Some(root))
        .filter(|user| !enabled_only || user.is_enabled())
        .cloned()
        .collect()
}

/// Identifier projection of [`profiles`], same grouping and order.
#[must_use]
pub fn profile_ids(registry: &UserRegistry, id: UserId, enabled_only: bool) -> Vec<UserId> {
    profiles(registry, id, enabled_only)
        .into_iter()
        .map(|user| user.id)
        .collect()
}

/// The primary user anchoring `id`'s profile group.
fn group_root(registry: &UserRegistry, id: UserId) -> Option<UserId> {
    let record = registry.get(id)?;
    Some(record.parent_id.unwrap_or(record.id))
}
