//! # User Registry
//!
//! The canonical, insertion-ordered collection of user records. Only the
//! authority process holds one; clients see immutable copies in replies.
//!
//! Mutation (creation, removal, provisioning) belongs to the out-of-scope
//! storage path; [`UserRegistry::insert`] is that path's in-process hook.
//! Queries take a read guard for the duration of one transaction, which is
//! the snapshot-consistency the query logic relies on.

use directory_types::{UserId, UserInfo};
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Registry handle shared between the stub, the local directory, and the
/// mutation path.
pub type SharedRegistry = Arc<RwLock<UserRegistry>>;

/// Errors from the registry's mutation hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// User identifiers are never reused; a second insert is a bug in the
    /// provisioning path.
    #[error("user {0} already exists")]
    DuplicateId(UserId),
}

/// Insertion-ordered user records with id lookup.
#[derive(Debug, Default)]
pub struct UserRegistry {
    records: Vec<UserInfo>,
}

impl UserRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a registry for sharing with the stub and serve loop.
    #[must_use]
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Register a new user record.
    ///
    /// Insertion order is the order queries return records in.
    pub fn insert(&mut self, user: UserInfo) -> Result<(), RegistryError> {
        if self.get(user.id).is_some() {
            return Err(RegistryError::DuplicateId(user.id));
        }
        info!(user_id = %user.id, profile = user.is_profile(), "User record registered");
        self.records.push(user);
        Ok(())
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[UserInfo] {
        &self.records
    }

    /// Exact lookup by identifier.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&UserInfo> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
