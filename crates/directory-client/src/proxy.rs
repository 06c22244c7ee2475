//! # Proxy - Client-Side Invoker
//!
//! The remote implementation of the `UserDirectory` capability. Each call
//! encodes its arguments, sends one transaction, waits for the paired
//! reply, and decodes it. Nothing is cached across calls; every invocation
//! reflects the registry at the authority's processing time.

use async_trait::async_trait;
use directory_bus::Transport;
use directory_types::{DirectoryError, QueryFilter, UserDirectory, UserId, UserInfo};
use directory_wire::{
    codec, GetProfileIdsRequest, GetProfilesRequest, GetUserInfoRequest, ListUsersFullRequest,
    ListUsersPartialRequest, ListUsersRequest, Operation, TransactionFrame,
};
use std::sync::Arc;
use tracing::debug;

/// Client-side invoker over a transport.
#[derive(Clone)]
pub struct DirectoryProxy {
    transport: Arc<dyn Transport>,
    caller_uid: u32,
}

impl DirectoryProxy {
    /// Proxy sending transactions as `caller_uid` over `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, caller_uid: u32) -> Self {
        Self {
            transport,
            caller_uid,
        }
    }

    /// Identity this proxy stamps on every transaction envelope.
    #[must_use]
    pub fn caller_uid(&self) -> u32 {
        self.caller_uid
    }

    /// Encode, send, await, and decode one operation.
    async fn invoke<O: Operation>(&self, request: &O) -> Result<O::Response, DirectoryError> {
        let payload = codec::encode(request)
            .map_err(|e| DirectoryError::MalformedArgument(e.to_string()))?;
        let frame = TransactionFrame::new(self.caller_uid, O::OPCODE, payload);
        let correlation_id = frame.correlation_id;

        debug!(
            correlation_id = %correlation_id,
            op = O::OPCODE.name(),
            "Sending transaction"
        );

        let reply = self
            .transport
            .call(frame)
            .await
            .map_err(|e| DirectoryError::Unreachable(e.to_string()))?;

        if reply.correlation_id != correlation_id {
            return Err(DirectoryError::BadReply(format!(
                "correlation mismatch: sent {correlation_id}, got {}",
                reply.correlation_id
            )));
        }

        match reply.result {
            Ok(bytes) => {
                codec::decode(&bytes).map_err(|e| DirectoryError::BadReply(e.to_string()))
            }
            Err(fault) => Err(fault.into()),
        }
    }

    /// One-argument listing (wire code 1); omitted filters default to off.
    pub async fn list_users_basic(
        &self,
        exclude_dying: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError> {
        let response = self.invoke(&ListUsersRequest { exclude_dying }).await?;
        Ok(response.users)
    }

    /// Two-argument listing (wire code 2).
    pub async fn list_users_partial(
        &self,
        exclude_partial: bool,
        exclude_dying: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError> {
        let response = self
            .invoke(&ListUsersPartialRequest {
                exclude_partial,
                exclude_dying,
            })
            .await?;
        Ok(response.users)
    }

    /// Three-argument listing (wire code 3).
    pub async fn list_users_full(
        &self,
        exclude_partial: bool,
        exclude_dying: bool,
        exclude_pre_created: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError> {
        let response = self
            .invoke(&ListUsersFullRequest {
                exclude_partial,
                exclude_dying,
                exclude_pre_created,
            })
            .await?;
        Ok(response.users)
    }
}

#[async_trait]
impl UserDirectory for DirectoryProxy {
    async fn list_users(&self, filter: QueryFilter) -> Result<Vec<UserInfo>, DirectoryError> {
        self.list_users_full(
            filter.exclude_partial,
            filter.exclude_dying,
            filter.exclude_pre_created,
        )
        .await
    }

    async fn get_user_info(&self, id: UserId) -> Result<Option<UserInfo>, DirectoryError> {
        let response = self.invoke(&GetUserInfoRequest { id }).await?;
        Ok(response.user)
    }

    async fn get_profile_ids(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserId>, DirectoryError> {
        let response = self.invoke(&GetProfileIdsRequest { id, enabled_only }).await?;
        Ok(response.ids)
    }

    async fn get_profiles(
        &self,
        id: UserId,
        enabled_only: bool,
    ) -> Result<Vec<UserInfo>, DirectoryError> {
        let response = self.invoke(&GetProfilesRequest { id, enabled_only }).await?;
        Ok(response.users)
    }
}
