//! # Core Domain Entities
//!
//! The user record model shared by the authority registry and every client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer handle identifying one user record.
///
/// Unique within the device for the lifetime of the record, stable across
/// reboots, and never reused while any persisted reference may still exist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct UserId(pub u32);

impl UserId {
    /// Raw integer value of this identifier.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// One user or profile record as held by the authority registry.
///
/// The three lifecycle flags (`partial`, `pre_created`, `dying`) interact
/// with [`crate::QueryFilter`]; `disabled` is orthogonal and only consulted
/// by the `enabled_only` profile queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Stable identifier for this record.
    pub id: UserId,
    /// Display metadata, opaque to the directory core.
    pub name: String,
    /// Primary user this profile belongs to; `None` for a primary user.
    /// Relation only, never ownership.
    pub parent_id: Option<UserId>,
    /// Creation did not complete.
    pub partial: bool,
    /// Provisioned in advance of being bound to a human user.
    pub pre_created: bool,
    /// Marked for removal, still present to satisfy in-flight references.
    pub dying: bool,
    /// Disabled by management policy; hidden from `enabled_only` queries.
    pub disabled: bool,
}

impl UserInfo {
    /// Create a primary user with all lifecycle flags cleared.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
            partial: false,
            pre_created: false,
            dying: false,
            disabled: false,
        }
    }

    /// Create a profile record grouped under `parent`.
    #[must_use]
    pub fn profile_of(id: UserId, parent: UserId, name: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent),
            ..Self::new(id, name)
        }
    }

    /// True when this record is a profile of some primary user.
    #[must_use]
    pub fn is_profile(&self) -> bool {
        self.parent_id.is_some()
    }

    /// True when the record is not disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}
