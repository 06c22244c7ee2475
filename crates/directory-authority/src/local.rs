//! # Local Directory
//!
//! The same-process implementation of the `UserDirectory` capability: code
//! running inside the authority process queries the registry directly,
//! through the identical trait the remote proxy implements. No transport,
//! no encoding, same semantics - both implementations call the same query
//! functions.

use crate::query;
use crate::registry::SharedRegistry;
use async_trait::async_trait;
use directory_types::{DirectoryError, QueryFilter, UserDirectory, UserId, UserInfo};

/// In-process `UserDirectory` over the shared registry.
#[derive(Clone)]
pub struct LocalDirectory {
    registry: SharedRegistry,
}

impl LocalDirectory {
    /// Directory view over `registry`.
    #[must_use]
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl UserDirectory for LocalDirectory {
    async fn list_users(&self, filter: QueryFilter) -> Result<Vec<UserInfo>, DirectoryError> {
        Ok(query::list_users(&self.registry.read(), filter))
    }

    async fn get_user_info(&self, id: UserId) -> Result<Option<UserInfo>, DirectoryError> {
        Ok(query::get_user_info(&self.registry.read(), id))
    }

    async fn get_profile_ids(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserId>, DirectoryError> {
        Ok(query::profile_ids(&self.registry.read(), id, enabled_only))
    }

    async fn get_profiles(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError> {
        Ok(query::profiles(&self.registry.read(), id, enabled_only))
    }
}
