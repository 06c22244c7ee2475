//! # Stub - Server-Side Dispatcher
//!
//! Receives one transaction, resolves the operation code, decodes the
//! arguments, runs the query logic against the live registry, and encodes
//! the reply. Each transaction walks the phase progression
//! `Idle → Decoding → Dispatching → Idle`; a failure anywhere produces a
//! fault reply for that transaction only. Nothing is retried here -
//! at-most-once from the dispatcher's perspective.

use crate::query;
use crate::registry::SharedRegistry;
use directory_wire::{
    codec, Fault, GetProfileIdsRequest, GetProfilesRequest, GetUserInfoRequest,
    ListUsersFullRequest, ListUsersPartialRequest, ListUsersRequest, Opcode, ProfileIdsResponse,
    ReplyFrame, TransactionFrame, UserInfoResponse, UserListResponse, PROTOCOL_VERSION,
};
use directory_types::QueryFilter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Dispatch phase of one in-flight transaction, for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchPhase {
    Decoding,
    Dispatching,
}

impl DispatchPhase {
    const fn name(self) -> &'static str {
        match self {
            DispatchPhase::Decoding => "decoding",
            DispatchPhase::Dispatching => "dispatching",
        }
    }
}

/// Running counters over everything this stub has handled.
#[derive(Debug, Default)]
pub struct StubStats {
    /// Transactions handled, successful or not.
    pub transactions: AtomicU64,
    /// Transactions answered with a fault.
    pub faults: AtomicU64,
}

/// Server-side dispatcher over the shared registry.
pub struct DirectoryStub {
    registry: SharedRegistry,
    stats: StubStats,
}

impl DirectoryStub {
    /// Stub serving the given registry.
    #[must_use]
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            stats: StubStats::default(),
        }
    }

    /// Counters for this stub.
    #[must_use]
    pub fn stats(&self) -> &StubStats {
        &self.stats
    }

    /// Handle one transaction to completion and produce its reply.
    ///
    /// Runs synchronously: decode, query under one registry read guard,
    /// encode. Concurrent calls share the snapshot read-only.
    #[must_use]
    pub fn handle_transaction(&self, frame: &TransactionFrame) -> ReplyFrame {
        self.stats.transactions.fetch_add(1, Ordering::Relaxed);

        let result = self.dispatch(frame);
        if let Err(fault) = &result {
            self.stats.faults.fetch_add(1, Ordering::Relaxed);
            warn!(
                correlation_id = %frame.correlation_id,
                opcode = frame.opcode,
                fault = %fault,
                "Transaction faulted"
            );
        }

        ReplyFrame {
            correlation_id: frame.correlation_id,
            result,
        }
    }

    fn dispatch(&self, frame: &TransactionFrame) -> Result<Vec<u8>, Fault> {
        trace_phase(frame, DispatchPhase::Decoding);

        if frame.version != PROTOCOL_VERSION {
            return Err(Fault::UnsupportedVersion {
                received: frame.version,
                supported: PROTOCOL_VERSION,
            });
        }

        let op = Opcode::from_code(frame.opcode).ok_or(Fault::UnknownOperation {
            code: frame.opcode,
        })?;

        match op {
            Opcode::ListUsers => {
                let req: ListUsersRequest = decode_args(op, &frame.payload)?;
                self.run(frame, op, |reg| UserListResponse {
                    users: query::list_users(reg, QueryFilter::dying(req.exclude_dying)),
                })
            }
            Opcode::ListUsersPartial => {
                let req: ListUsersPartialRequest = decode_args(op, &frame.payload)?;
                self.run(frame, op, |reg| UserListResponse {
                    users: query::list_users(
                        reg,
                        QueryFilter::partial_dying(req.exclude_partial, req.exclude_dying),
                    ),
                })
            }
            Opcode::ListUsersFull => {
                let req: ListUsersFullRequest = decode_args(op, &frame.payload)?;
                self.run(frame, op, |reg| UserListResponse {
                    users: query::list_users(
                        reg,
                        QueryFilter::new(
                            req.exclude_partial,
                            req.exclude_dying,
                            req.exclude_pre_created,
                        ),
                    ),
                })
            }
            Opcode::GetUserInfo => {
                let req: GetUserInfoRequest = decode_args(op, &frame.payload)?;
                self.run(frame, op, |reg| UserInfoResponse {
                    user: query::get_user_info(reg, req.id),
                })
            }
            Opcode::GetProfileIds => {
                let req: GetProfileIdsRequest = decode_args(op, &frame.payload)?;
                self.run(frame, op, |reg| ProfileIdsResponse {
                    ids: query::profile_ids(reg, req.id, req.enabled_only),
                })
            }
            Opcode::GetProfiles => {
                let req: GetProfilesRequest = decode_args(op, &frame.payload)?;
                self.run(frame, op, |reg| UserListResponse {
                    users: query::profiles(reg, req.id, req.enabled_only),
                })
            }
        }
    }

    /// Run one query under a single read guard and encode its response.
    fn run<R, F>(&self, frame: &TransactionFrame, op: Opcode, query: F) -> Result<Vec<u8>, Fault>
    where
        R: Serialize,
        F: FnOnce(&crate::registry::UserRegistry) -> R,
    {
        trace_phase(frame, DispatchPhase::Dispatching);
        debug!(
            correlation_id = %frame.correlation_id,
            op = op.name(),
            caller_uid = frame.caller_uid,
            "Dispatching query"
        );

        let response = {
            let registry = self.registry.read();
            query(&registry)
        };

        codec::encode(&response).map_err(|e| Fault::Internal {
            detail: format!("reply encode failed: {e}"),
        })
    }
}

fn decode_args<T: DeserializeOwned>(op: Opcode, payload: &[u8]) -> Result<T, Fault> {
    codec::decode(payload).map_err(|e| Fault::MalformedArgument {
        detail: format!("{} arguments: {e}", op.name()),
    })
}

fn trace_phase(frame: &TransactionFrame, phase: DispatchPhase) {
    debug!(
        correlation_id = %frame.correlation_id,
        opcode = frame.opcode,
        phase = phase.name(),
        "Dispatch phase"
    );
}
