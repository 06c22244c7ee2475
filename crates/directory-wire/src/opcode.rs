//! # Operation Registry
//!
//! Fixed, versioned mapping from symbolic operation name to numeric code,
//! agreed on by both sides of the boundary.
//!
//! **CRITICAL**: codes are append-only. New operations take the next unused
//! code; existing codes are never reassigned or removed, only deprecated.
//! Renumbering breaks compatibility between differently-versioned
//! client/authority pairs.

use serde::{Deserialize, Serialize};

/// Stable numeric identifier for one remote operation.
///
/// The three `list_users` variants are distinct operations with distinct
/// codes: the wire disambiguates by code, not by signature shape. Each
/// shorter variant is defined as the full variant with the omitted filters
/// defaulted to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Opcode {
    /// `list_users(exclude_dying)` - one-argument listing.
    ListUsers = 1,
    /// `list_users_partial(exclude_partial, exclude_dying)`.
    ListUsersPartial = 2,
    /// `list_users_full(exclude_partial, exclude_dying, exclude_pre_created)`.
    ListUsersFull = 3,
    /// `get_user_info(id)` - exact lookup.
    GetUserInfo = 4,
    /// `get_profile_ids(id, enabled_only)`.
    GetProfileIds = 5,
    /// `get_profiles(id, enabled_only)`.
    GetProfiles = 6,
}

/// Every registered operation, in code order.
const OPERATIONS: &[Opcode] = &[
    Opcode::ListUsers,
    Opcode::ListUsersPartial,
    Opcode::ListUsersFull,
    Opcode::GetUserInfo,
    Opcode::GetProfileIds,
    Opcode::GetProfiles,
];

impl Opcode {
    /// Numeric wire code for this operation.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Resolve a wire code.
    ///
    /// Returns `None` for codes this build does not know (version skew);
    /// the dispatcher reports that as an `UnknownOperation` fault.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Opcode::ListUsers),
            2 => Some(Opcode::ListUsersPartial),
            3 => Some(Opcode::ListUsersFull),
            4 => Some(Opcode::GetUserInfo),
            5 => Some(Opcode::GetProfileIds),
            6 => Some(Opcode::GetProfiles),
            _ => None,
        }
    }

    /// Symbolic name of this operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::ListUsers => "list_users",
            Opcode::ListUsersPartial => "list_users_partial",
            Opcode::ListUsersFull => "list_users_full",
            Opcode::GetUserInfo => "get_user_info",
            Opcode::GetProfileIds => "get_profile_ids",
            Opcode::GetProfiles => "get_profiles",
        }
    }
}

/// Resolve a symbolic operation name to its opcode.
#[must_use]
pub fn code_for(name: &str) -> Option<Opcode> {
    OPERATIONS.iter().copied().find(|op| op.name() == name)
}

/// Resolve a wire code to its symbolic name.
#[must_use]
pub fn name_for(code: u32) -> Option<&'static str> {
    Opcode::from_code(code).map(Opcode::name)
}
