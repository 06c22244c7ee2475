//! # Query Filter
//!
//! The inclusion rule shared by both sides of the boundary for the
//! overloaded `list_users` queries.
//!
//! A record is excluded iff any requested exclusion matches a flag that is
//! set on the record; exclusion is the logical OR of the three pairs. The
//! two- and one-argument query variants are the three-argument variant with
//! the omitted filters defaulted to `false`.

use crate::entities::UserInfo;
use serde::{Deserialize, Serialize};

/// Immutable boolean triple controlling which lifecycle-flagged records a
/// `list_users` query drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryFilter {
    /// Drop records whose creation did not complete.
    pub exclude_partial: bool,
    /// Drop records marked for removal.
    pub exclude_dying: bool,
    /// Drop records provisioned ahead of a human user.
    pub exclude_pre_created: bool,
}

impl QueryFilter {
    /// Full three-argument form.
    #[must_use]
    pub const fn new(exclude_partial: bool, exclude_dying: bool, exclude_pre_created: bool) -> Self {
        Self {
            exclude_partial,
            exclude_dying,
            exclude_pre_created,
        }
    }

    /// Filter that excludes nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    /// One-argument query form: omitted filters default to `false`.
    #[must_use]
    pub const fn dying(exclude_dying: bool) -> Self {
        Self::new(false, exclude_dying, false)
    }

    /// Two-argument query form: `exclude_pre_created` defaults to `false`.
    #[must_use]
    pub const fn partial_dying(exclude_partial: bool, exclude_dying: bool) -> Self {
        Self::new(exclude_partial, exclude_dying, false)
    }

    /// Check whether a record is included under this filter.
    #[must_use]
    pub fn admits(&self, user: &UserInfo) -> bool {
        let excluded = (self.exclude_partial && user.partial)
            || (self.exclude_dying && user.dying)
            || (self.exclude_pre_created && user.pre_created);
        !excluded
    }
}
