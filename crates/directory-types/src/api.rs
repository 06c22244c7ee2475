//! # Directory Capability Trait
//!
//! The one abstract capability set with two variant implementations: the
//! authority-side local directory and the client-side proxy. A caller holds
//! a `dyn UserDirectory` and cannot tell which one it has, except that the
//! proxy may fail with transport errors.

use crate::entities::{UserId, UserInfo};
use crate::errors::DirectoryError;
use crate::filter::QueryFilter;
use async_trait::async_trait;

/// Read-only query surface of the user directory.
///
/// All operations are pure over a point-in-time snapshot of the registry;
/// ordering of returned sequences follows registry insertion order and is
/// deterministic for identical snapshots.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// List users admitted by `filter`, in insertion order.
    async fn list_users(&self, filter: QueryFilter) -> Result<Vec<UserInfo>, DirectoryError>;

    /// Exact lookup; `None` is a normal outcome, not a failure.
    async fn get_user_info(&self, id: UserId) -> Result<Option<UserInfo>, DirectoryError>;

    /// Identifiers of the profile group `id` belongs to, including `id`'s
    /// own group root. Unknown ids yield an empty sequence.
    async fn get_profile_ids(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserId>, DirectoryError>;

    /// Full records of the profile group `id` belongs to, same grouping and
    /// order as [`Self::get_profile_ids`].
    async fn get_profiles(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError>;
}
