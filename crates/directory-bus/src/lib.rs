//! # Directory Bus - Transport for Directory Transactions
//!
//! Carries one [`directory_wire::TransactionFrame`] to the authority and
//! one [`directory_wire::ReplyFrame`] back, synchronously from the caller's
//! point of view.
//!
//! The [`Transport`] trait is the seam the client proxy talks through; the
//! [`channel`] constructor provides the in-memory implementation used for
//! single-node operation and tests. A cross-process deployment would
//! implement [`Transport`] over its own pipe without touching the proxy or
//! the stub.
//!
//! ## Failure model
//!
//! - Authority endpoint dropped (process death) → [`TransportError::Closed`]
//! - No reply within the configured window → [`TransportError::Timeout`]
//!
//! Neither is retried here; retry policy belongs to the caller.

pub mod channel;
pub mod transport;

// Re-export main types
pub use channel::{channel, AuthorityEndpoint, BusConfig, ChannelTransport, InboundCall};
pub use transport::{Transport, TransportError};

/// Default window a caller waits for a reply before abandoning the call.
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 5_000;

/// Maximum in-flight transactions buffered toward the authority.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;
