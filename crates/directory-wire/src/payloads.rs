//! # Operation Payloads
//!
//! One request struct per registered operation and the shared response
//! shapes. Struct field order is the declared argument order on the wire.
//!
//! The [`Operation`] trait ties each request to its opcode and response
//! type so the proxy can stay generic instead of repeating the
//! encode/send/decode dance per method.

use crate::opcode::Opcode;
use directory_types::{UserId, UserInfo};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A request payload bound to its operation code and response shape.
pub trait Operation: Serialize + DeserializeOwned + Send + Sync {
    /// The stable wire code this request is dispatched under.
    const OPCODE: Opcode;
    /// The payload shape of a successful reply.
    type Response: Serialize + DeserializeOwned + Send;
}

/// `list_users` (code 1): one-argument listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersRequest {
    /// Drop records marked for removal.
    pub exclude_dying: bool,
}

impl Operation for ListUsersRequest {
    const OPCODE: Opcode = Opcode::ListUsers;
    type Response = UserListResponse;
}

/// `list_users_partial` (code 2): two-argument listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersPartialRequest {
    /// Drop records whose creation did not complete.
    pub exclude_partial: bool,
    /// Drop records marked for removal.
    pub exclude_dying: bool,
}

impl Operation for ListUsersPartialRequest {
    const OPCODE: Opcode = Opcode::ListUsersPartial;
    type Response = UserListResponse;
}

/// `list_users_full` (code 3): the full filter triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersFullRequest {
    /// Drop records whose creation did not complete.
    pub exclude_partial: bool,
    /// Drop records marked for removal.
    pub exclude_dying: bool,
    /// Drop records provisioned ahead of a human user.
    pub exclude_pre_created: bool,
}

impl Operation for ListUsersFullRequest {
    const OPCODE: Opcode = Opcode::ListUsersFull;
    type Response = UserListResponse;
}

/// `get_user_info` (code 4): exact lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserInfoRequest {
    /// Identifier to look up.
    pub id: UserId,
}

impl Operation for GetUserInfoRequest {
    const OPCODE: Opcode = Opcode::GetUserInfo;
    type Response = UserInfoResponse;
}

/// `get_profile_ids` (code 5): profile-group identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProfileIdsRequest {
    /// Any member of the profile group.
    pub id: UserId,
    /// Additionally drop disabled records.
    pub enabled_only: bool,
}

impl Operation for GetProfileIdsRequest {
    const OPCODE: Opcode = Opcode::GetProfileIds;
    type Response = ProfileIdsResponse;
}

/// `get_profiles` (code 6): profile-group full records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProfilesRequest {
    /// Any member of the profile group.
    pub id: UserId,
    /// Additionally drop disabled records.
    pub enabled_only: bool,
}

impl Operation for GetProfilesRequest {
    const OPCODE: Opcode = Opcode::GetProfiles;
    type Response = UserListResponse;
}

/// Ordered sequence of full records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    /// Records in registry insertion order.
    pub users: Vec<UserInfo>,
}

/// Result of an exact lookup; `None` means not found, a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    /// The record, if any.
    pub user: Option<UserInfo>,
}

/// Ordered sequence of identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileIdsResponse {
    /// Identifiers in registry insertion order.
    pub ids: Vec<UserId>,
}
