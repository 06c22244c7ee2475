//! # Directory Wire - Protocol Contract for the User Directory Service
//!
//! This crate is the single source of truth for everything both processes
//! must agree on byte-for-byte:
//!
//! - **Operation registry**: symbolic operation name ↔ stable numeric code
//! - **Envelopes**: [`TransactionFrame`] / [`ReplyFrame`] and the encoded
//!   [`Fault`] taxonomy
//! - **Payloads**: one request struct per operation, typed via the
//!   [`Operation`] trait
//! - **Codec**: bincode wrappers treated as the given binary primitive
//!
//! ## Operation Code Allocation
//!
//! | Code | Operation            |
//! |------|----------------------|
//! | 1    | `list_users`         |
//! | 2    | `list_users_partial` |
//! | 3    | `list_users_full`    |
//! | 4    | `get_user_info`      |
//! | 5    | `get_profile_ids`    |
//! | 6    | `get_profiles`       |
//!
//! Codes are append-only and never renumbered; a retired operation keeps
//! its code and is only ever deprecated.

pub mod codec;
pub mod frames;
pub mod opcode;
pub mod payloads;

// Re-export main types
pub use codec::{decode, encode, CodecError};
pub use frames::{Fault, ReplyFrame, TransactionFrame, PROTOCOL_VERSION};
pub use opcode::{code_for, name_for, Opcode};
pub use payloads::{
    GetProfileIdsRequest, GetProfilesRequest, GetUserInfoRequest, ListUsersFullRequest,
    ListUsersPartialRequest, ListUsersRequest, Operation, ProfileIdsResponse, UserInfoResponse,
    UserListResponse,
};
