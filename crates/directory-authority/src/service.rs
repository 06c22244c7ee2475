//! # Authority Service
//!
//! The serve loop of the authority process: pull transactions off a
//! transport endpoint, consult the access policy, dispatch through the
//! stub, and answer. The loop exits when every client handle is gone.

use crate::policy::{AccessPolicy, AllowAll};
use crate::registry::SharedRegistry;
use crate::stub::DirectoryStub;
use directory_bus::AuthorityEndpoint;
use directory_wire::{Fault, Opcode, ReplyFrame};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Binds a registry, a policy, and a stub into one serving authority.
pub struct AuthorityService {
    stub: Arc<DirectoryStub>,
    policy: Arc<dyn AccessPolicy>,
}

impl AuthorityService {
    /// Service over `registry` with an explicit access policy.
    #[must_use]
    pub fn new(registry: SharedRegistry, policy: Arc<dyn AccessPolicy>) -> Self {
        Self {
            stub: Arc::new(DirectoryStub::new(registry)),
            policy,
        }
    }

    /// Service that admits every caller.
    #[must_use]
    pub fn allow_all(registry: SharedRegistry) -> Self {
        Self::new(registry, Arc::new(AllowAll))
    }

    /// The stub this service dispatches through, for inspection.
    #[must_use]
    pub fn stub(&self) -> &Arc<DirectoryStub> {
        &self.stub
    }

    /// Serve transactions until the endpoint closes.
    pub async fn serve(self, mut endpoint: AuthorityEndpoint) {
        info!("Authority service started");

        while let Some(call) = endpoint.next_call().await {
            let frame = &call.frame;

            // Policy runs before the stub sees the transaction; an unknown
            // opcode skips straight to the stub so the caller gets the
            // UnknownOperation fault rather than a policy answer about an
            // operation that does not exist.
            let reply = match Opcode::from_code(frame.opcode) {
                Some(op) => match self.policy.authorize(frame.caller_uid, op) {
                    Ok(()) => self.stub.handle_transaction(frame),
                    Err(denial) => {
                        debug!(
                            correlation_id = %frame.correlation_id,
                            caller_uid = frame.caller_uid,
                            op = op.name(),
                            "Caller rejected by access policy"
                        );
                        ReplyFrame::fault(
                            frame.correlation_id,
                            Fault::NotAuthorized {
                                reason: denial.reason,
                            },
                        )
                    }
                },
                None => self.stub.handle_transaction(frame),
            };

            // A failed send means the caller abandoned the wait; the reply
            // is discarded, which is all the authority can do about it.
            if call.reply_tx.send(reply).is_err() {
                debug!(
                    correlation_id = %call.frame.correlation_id,
                    "Caller abandoned the call, reply discarded"
                );
            }
        }

        info!("Authority endpoint closed, service stopping");
    }

    /// Spawn [`Self::serve`] onto the runtime.
    #[must_use]
    pub fn spawn(self, endpoint: AuthorityEndpoint) -> JoinHandle<()> {
        tokio::spawn(self.serve(endpoint))
    }
}
