//! # Access Policy Seam
//!
//! The permission/policy subsystem is an external collaborator; this module
//! only defines the boundary the serve loop consults before a transaction
//! reaches the stub. A denial surfaces to the caller as an encoded
//! `NotAuthorized` fault, indistinguishable in transport terms from any
//! other reply.

use directory_wire::Opcode;
use thiserror::Error;

/// A policy rejection with the reason callers will see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct PolicyDenial {
    /// Human-readable denial reason.
    pub reason: String,
}

impl PolicyDenial {
    /// Denial with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Decides whether a caller may invoke an operation.
pub trait AccessPolicy: Send + Sync {
    /// Authorize `caller_uid` for `op` before dispatch.
    fn authorize(&self, caller_uid: u32, op: Opcode) -> Result<(), PolicyDenial>;
}

/// Policy that admits every caller. The single-node default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn authorize(&self, _caller_uid: u32, _op: Opcode) -> Result<(), PolicyDenial> {
        Ok(())
    }
}

/// Policy that admits only an explicit set of caller uids.
#[derive(Debug, Clone, Default)]
pub struct UidAllowlist {
    allowed: Vec<u32>,
}

impl UidAllowlist {
    /// Allowlist over the given uids.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = u32>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl AccessPolicy for UidAllowlist {
    fn authorize(&self, caller_uid: u32, op: Opcode) -> Result<(), PolicyDenial> {
        if self.allowed.contains(&caller_uid) {
            Ok(())
        } else {
            Err(PolicyDenial::new(format!(
                "caller {caller_uid} not permitted to invoke {}",
                op.name()
            )))
        }
    }
}
