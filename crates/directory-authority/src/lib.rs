//! # Directory Authority - The Canonical User Registry and Its Dispatcher
//!
//! This crate is the authority-process side of the directory service:
//!
//! - **Registry**: insertion-ordered user records behind a read/write lock
//! - **Query logic**: the pure filtering and profile-grouping rules
//! - **Policy**: the access-policy seam consulted before dispatch
//! - **Stub**: decodes one transaction, runs the query, encodes the reply
//! - **Service**: the serve loop binding a transport endpoint to the stub
//! - **Local directory**: the same-process `UserDirectory` implementation
//!
//! ## Dispatch flow
//!
//! ```text
//! AuthorityEndpoint ──▶ AuthorityService ──▶ AccessPolicy
//!                              │                  │ denial → Fault
//!                              ▼                  ▼
//!                        DirectoryStub ──▶ query logic ──▶ ReplyFrame
//! ```
//!
//! Each transaction is handled to completion (decode → query → encode)
//! under one registry read guard; concurrent queries share the snapshot and
//! never mutate it.

pub mod local;
pub mod policy;
pub mod query;
pub mod registry;
pub mod service;
pub mod stub;

// Re-export main types
pub use local::LocalDirectory;
pub use policy::{AccessPolicy, AllowAll, PolicyDenial, UidAllowlist};
pub use registry::{RegistryError, SharedRegistry, UserRegistry};
pub use service::AuthorityService;
pub use stub::{DirectoryStub, StubStats};
