//! # Directory Client - Remote Access to the User Directory
//!
//! - [`DirectoryProxy`]: implements the `UserDirectory` capability by
//!   marshalling each call into a transaction, sending it over a
//!   [`directory_bus::Transport`], and decoding the reply. To a caller it
//!   looks like a local directory, except it can fail with
//!   `DirectoryError::Unreachable`.
//! - [`UserManagerClient`]: convenience wrapper adding defaulted listing,
//!   fallback across listing variants when talking to an older authority,
//!   and uid-to-user arithmetic.

pub mod manager;
pub mod proxy;

// Re-export main types
pub use manager::{UserManagerClient, PER_USER_RANGE};
pub use proxy::DirectoryProxy;
