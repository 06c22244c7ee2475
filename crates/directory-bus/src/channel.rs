//! # In-Memory Channel Transport
//!
//! Single-node implementation of [`Transport`]: an mpsc channel carries
//! each transaction together with a oneshot reply slot to the authority
//! endpoint. Dropping the endpoint makes every subsequent call fail with
//! [`TransportError::Closed`], which is how authority death presents to
//! callers.

use crate::transport::{Transport, TransportError};
use crate::{DEFAULT_CALL_TIMEOUT_MS, DEFAULT_CHANNEL_CAPACITY};
use async_trait::async_trait;
use directory_wire::{ReplyFrame, TransactionFrame};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Transport tuning knobs.
#[derive(Debug, Clone)]
pub struct BusConfig {
    /// How long a caller waits for a reply before abandoning the call.
    pub call_timeout: Duration,
    /// In-flight transactions buffered toward the authority.
    pub channel_capacity: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_millis(DEFAULT_CALL_TIMEOUT_MS),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// One transaction delivered to the authority, with its reply slot.
#[derive(Debug)]
pub struct InboundCall {
    /// The transaction as sent by the caller.
    pub frame: TransactionFrame,
    /// Slot the authority answers into. Sending fails if the caller has
    /// already abandoned the wait; the reply is then discarded.
    pub reply_tx: oneshot::Sender<ReplyFrame>,
}

/// Client half of the in-memory transport. Cheap to clone; every clone
/// talks to the same authority endpoint.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    tx: mpsc::Sender<InboundCall>,
    call_timeout: Duration,
}

/// Authority half of the in-memory transport.
#[derive(Debug)]
pub struct AuthorityEndpoint {
    rx: mpsc::Receiver<InboundCall>,
}

impl AuthorityEndpoint {
    /// Next inbound transaction, or `None` once every client handle is
    /// dropped.
    pub async fn next_call(&mut self) -> Option<InboundCall> {
        self.rx.recv().await
    }
}

/// Create a connected transport pair.
#[must_use]
pub fn channel(config: &BusConfig) -> (ChannelTransport, AuthorityEndpoint) {
    let (tx, rx) = mpsc::channel(config.channel_capacity);
    (
        ChannelTransport {
            tx,
            call_timeout: config.call_timeout,
        },
        AuthorityEndpoint { rx },
    )
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn call(&self, frame: TransactionFrame) -> Result<ReplyFrame, TransportError> {
        let correlation_id = frame.correlation_id;
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send(InboundCall { frame, reply_tx })
            .await
            .map_err(|_| {
                warn!(correlation_id = %correlation_id, "Authority endpoint closed, send failed");
                TransportError::Closed
            })?;

        match tokio::time::timeout(self.call_timeout, reply_rx).await {
            Ok(Ok(reply)) => {
                debug!(correlation_id = %correlation_id, "Reply received");
                Ok(reply)
            }
            // Reply slot dropped without an answer: authority died mid-call.
            Ok(Err(_)) => {
                warn!(correlation_id = %correlation_id, "Authority died mid-call");
                Err(TransportError::Closed)
            }
            Err(_) => {
                warn!(
                    correlation_id = %correlation_id,
                    timeout_ms = self.call_timeout.as_millis() as u64,
                    "Call timed out, abandoning wait"
                );
                Err(TransportError::Timeout(self.call_timeout))
            }
        }
    }
}
