//! # Directory Types - Shared Entities for the User Directory Service
//!
//! Contains the types both sides of the process boundary agree on:
//!
//! - **Entities**: `UserId`, `UserInfo` and its lifecycle flags
//! - **Filter**: the `QueryFilter` inclusion rule applied by `list_users`
//! - **Capability trait**: `UserDirectory`, implemented once locally in the
//!   authority process and once remotely by the client proxy
//! - **Errors**: the `DirectoryError` taxonomy callers receive
//!
//! Nothing in this crate touches the wire or the transport; those live in
//! `directory-wire` and `directory-bus`.

pub mod api;
pub mod entities;
pub mod errors;
pub mod filter;

// Re-export main types
pub use api::UserDirectory;
pub use entities::{UserId, UserInfo};
pub use errors::DirectoryError;
pub use filter::QueryFilter;
