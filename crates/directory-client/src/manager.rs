//! # User Manager Client
//!
//! High-level wrapper over the proxy for callers that want the directory's
//! conventional defaults rather than raw wire operations.
//!
//! An older authority may predate the newer listing variants and answer
//! them with an unknown-operation fault; [`UserManagerClient`] then walks
//! down to the widest variant that build still registers, filling the
//! dropped filters with their `false` defaults. Only `UnknownOperation`
//! triggers the fallback - every other failure is raised as-is.

use crate::proxy::DirectoryProxy;
use directory_types::{DirectoryError, UserId, UserInfo};
use tracing::warn;

/// Size of the per-user uid block: uid / `PER_USER_RANGE` is the owning
/// user's identifier.
pub const PER_USER_RANGE: u32 = 100_000;

/// Convenience client over a [`DirectoryProxy`].
#[derive(Clone)]
pub struct UserManagerClient {
    proxy: DirectoryProxy,
}

impl UserManagerClient {
    /// Wrap a proxy.
    #[must_use]
    pub fn new(proxy: DirectoryProxy) -> Self {
        Self { proxy }
    }

    /// The underlying proxy, for raw operations.
    #[must_use]
    pub fn proxy(&self) -> &DirectoryProxy {
        &self.proxy
    }

    /// List users with the conventional defaults: partial, dying, and
    /// pre-created records all excluded.
    pub async fn get_users(&self) -> Result<Vec<UserInfo>, DirectoryError> {
        self.get_users_filtered(true, true, true).await
    }

    /// List users with an explicit filter triple, falling back to older
    /// listing variants when the authority does not register the newer
    /// ones.
    pub async fn get_users_filtered(
        &self,
        exclude_partial: bool,
        exclude_dying: bool,
        exclude_pre_created: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError> {
        match self
            .proxy
            .list_users_full(exclude_partial, exclude_dying, exclude_pre_created)
            .await
        {
            Err(DirectoryError::UnknownOperation { code }) => {
                warn!(code, "Authority predates list_users_full, falling back");
                match self
                    .proxy
                    .list_users_partial(exclude_partial, exclude_dying)
                    .await
                {
                    Err(DirectoryError::UnknownOperation { code }) => {
                        warn!(code, "Authority predates list_users_partial, falling back");
                        self.proxy.list_users_basic(exclude_dying).await
                    }
                    other => other,
                }
            }
            other => other,
        }
    }

    /// Exact lookup; `None` means no such user.
    pub async fn get_user_info(&self, id: UserId) -> Result<Option<UserInfo>, DirectoryError> {
        use directory_types::UserDirectory;
        self.proxy.get_user_info(id).await
    }

    /// Profile-group identifiers for `id`.
    pub async fn get_profile_ids(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserId>, DirectoryError> {
        use directory_types::UserDirectory;
        self.proxy.get_profile_ids(id, enabled_only).await
    }

    /// Profile-group records for `id`.
    pub async fn get_profiles(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError> {
        use directory_types::UserDirectory;
        self.proxy.get_profiles(id, enabled_only).await
    }

    /// User that owns an application uid.
    #[must_use]
    pub fn user_id_from_uid(uid: u32) -> UserId {
        UserId(uid / PER_USER_RANGE)
    }

    /// Whether two application uids belong to the same user.
    #[must_use]
    pub fn is_same_user(uid1: u32, uid2: u32) -> bool {
        Self::user_id_from_uid(uid1) == Self::user_id_from_uid(uid2)
    }
}
