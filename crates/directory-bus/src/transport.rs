//! # Transport Trait
//!
//! The interface a client proxy sends transactions through.

use async_trait::async_trait;
use directory_wire::{ReplyFrame, TransactionFrame};
use std::time::Duration;
use thiserror::Error;

/// Transport-level failures.
///
/// These never cross the wire; the proxy folds both variants into the
/// caller-facing unreachable outcome and keeps the distinction for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The authority endpoint is gone (process died or never started).
    #[error("authority endpoint closed")]
    Closed,

    /// No reply arrived within the per-call window. The authority may still
    /// process the transaction and discard the reply.
    #[error("call timed out after {0:?}")]
    Timeout(Duration),
}

/// Delivers one transaction and waits for its reply.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `frame` to the authority and wait for the paired reply.
    async fn call(&self, frame: TransactionFrame) -> Result<ReplyFrame, TransportError>;
}
