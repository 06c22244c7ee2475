//! # Transaction Envelopes
//!
//! One encoded request/response unit crossing the process boundary.
//!
//! - **Versioning**: every frame carries a protocol `version`, checked by
//!   the dispatcher before anything else.
//! - **Correlation**: replies echo the request's `correlation_id`; the
//!   proxy rejects a reply whose id does not match.
//! - **Envelope authority**: the caller's identity lives in `caller_uid` on
//!   the envelope only, never in payloads.

use crate::opcode::Opcode;
use directory_types::DirectoryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Current protocol version for directory transactions.
pub const PROTOCOL_VERSION: u16 = 1;

/// An encoded request in flight from a client to the authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionFrame {
    /// Protocol version; checked before decoding anything else.
    pub version: u16,
    /// Identity of the calling process, the sole input to the access
    /// policy. Payloads never duplicate this.
    pub caller_uid: u32,
    /// Unique id pairing this request with its reply.
    pub correlation_id: Uuid,
    /// Operation code resolved via the operation registry.
    pub opcode: u32,
    /// Encoded arguments, shaped per the operation's request struct.
    pub payload: Vec<u8>,
}

impl TransactionFrame {
    /// Build a frame for one call with a fresh correlation id.
    #[must_use]
    pub fn new(caller_uid: u32, opcode: Opcode, payload: Vec<u8>) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            caller_uid,
            correlation_id: Uuid::new_v4(),
            opcode: opcode.code(),
            payload,
        }
    }
}

/// The authority's answer to one transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyFrame {
    /// Correlation id copied from the request.
    pub correlation_id: Uuid,
    /// Encoded result payload, or the structured failure the dispatch
    /// path produced.
    pub result: Result<Vec<u8>, Fault>,
}

impl ReplyFrame {
    /// Successful reply carrying an encoded response payload.
    #[must_use]
    pub fn ok(correlation_id: Uuid, payload: Vec<u8>) -> Self {
        Self {
            correlation_id,
            result: Ok(payload),
        }
    }

    /// Failed reply carrying a structured fault.
    #[must_use]
    pub fn fault(correlation_id: Uuid, fault: Fault) -> Self {
        Self {
            correlation_id,
            result: Err(fault),
        }
    }
}

/// Structured failure encoded into a reply.
///
/// Transport failures never appear here: they cannot cross a broken
/// transport, so the client constructs those locally. Fatal to the single
/// transaction only, never to the authority process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Fault {
    /// Frame version not supported by this authority.
    #[error("unsupported version: received {received}, supported {supported}")]
    UnsupportedVersion { received: u16, supported: u16 },

    /// Operation code not present in this authority's registry.
    #[error("unknown operation code {code}")]
    UnknownOperation { code: u32 },

    /// Argument payload did not decode to the operation's declared shape.
    #[error("malformed argument: {detail}")]
    MalformedArgument { detail: String },

    /// The access policy rejected the caller before dispatch.
    #[error("not authorized: {reason}")]
    NotAuthorized { reason: String },

    /// The authority failed to encode its own reply.
    #[error("internal fault: {detail}")]
    Internal { detail: String },
}

impl From<Fault> for DirectoryError {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::UnsupportedVersion {
                received,
                supported,
            } => DirectoryError::UnsupportedVersion {
                received,
                supported,
            },
            Fault::UnknownOperation { code } => DirectoryError::UnknownOperation { code },
            Fault::MalformedArgument { detail } => DirectoryError::MalformedArgument(detail),
            Fault::NotAuthorized { reason } => DirectoryError::NotAuthorized(reason),
            Fault::Internal { detail } => DirectoryError::BadReply(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_frame_carries_current_version() {
        let frame = TransactionFrame::new(1000, Opcode::GetUserInfo, vec![1, 2, 3]);
        assert_eq!(frame.version, PROTOCOL_VERSION);
        assert_eq!(frame.opcode, 4);
        assert_eq!(frame.caller_uid, 1000);
    }

    #[test]
    fn test_fresh_correlation_per_frame() {
        let a = TransactionFrame::new(0, Opcode::ListUsers, vec![]);
        let b = TransactionFrame::new(0, Opcode::ListUsers, vec![]);
        assert_ne!(a.correlation_id, b.correlation_id);
    }

    #[test]
    fn test_envelope_roundtrip() {
        let frame = TransactionFrame::new(42, Opcode::GetProfiles, vec![9, 9]);
        let bytes = codec::encode(&frame).unwrap();
        let back: TransactionFrame = codec::decode(&bytes).unwrap();
        assert_eq!(back.correlation_id, frame.correlation_id);
        assert_eq!(back.opcode, frame.opcode);
        assert_eq!(back.payload, frame.payload);

        let reply = ReplyFrame::fault(
            frame.correlation_id,
            Fault::UnknownOperation { code: 99 },
        );
        let bytes = codec::encode(&reply).unwrap();
        let back: ReplyFrame = codec::decode(&bytes).unwrap();
        assert_eq!(back.result, Err(Fault::UnknownOperation { code: 99 }));
    }

    #[test]
    fn test_fault_maps_to_directory_error() {
        let err: DirectoryError = Fault::NotAuthorized {
            reason: "caller 7 denied".into(),
        }
        .into();
        assert_eq!(err, DirectoryError::NotAuthorized("caller 7 denied".into()));
        assert!(!err.is_transport());
    }
}
