//! # Error Types
//!
//! The failure taxonomy callers of the directory service receive.
//!
//! `NotFound` is deliberately absent: a missing user is a normal outcome
//! (`Option::None` from `get_user_info`, an empty sequence from the profile
//! queries), never conflated with a remote failure.

use thiserror::Error;

/// Remote-failure outcome raised to directory callers.
///
/// `Unreachable` is only ever constructed on the client side from a
/// transport failure; every other variant decodes from a fault the
/// authority encoded into the reply. Callers can therefore always tell
/// "not allowed" from "transport broke" by variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The authority process cannot be reached or died mid-call.
    #[error("authority unreachable: {0}")]
    Unreachable(String),

    /// Operation code absent from the authority's registry (version skew).
    #[error("unknown operation code {code}")]
    UnknownOperation { code: u32 },

    /// Argument decode failed on the authority side (shape mismatch).
    #[error("malformed argument: {0}")]
    MalformedArgument(String),

    /// The policy collaborator rejected the call before dispatch.
    #[error("not authorized: {0}")]
    NotAuthorized(String),

    /// Envelope protocol version not supported by the authority.
    #[error("unsupported protocol version: received {received}, supported {supported}")]
    UnsupportedVersion { received: u16, supported: u16 },

    /// The authority answered, but the reply could not be interpreted
    /// (reply decode mismatch, correlation mismatch, or an internal
    /// authority fault).
    #[error("bad reply from authority: {0}")]
    BadReply(String),
}

impl DirectoryError {
    /// True when the failure came from the transport rather than the
    /// authority's dispatch path.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}
