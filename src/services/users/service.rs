//! Users service implementation.

use super::{
    GetPresenceRequest, GetPresenceResponse, GetUserRequest, GetUserResponse, ListUsersRequest,
    ListUsersResponse,
};
use crate::client::ApiConnection;
use crate::errors::SlackResult;
use crate::types::UserSummary;
use std::sync::Arc;
use tracing::instrument;

/// Service for the `users.*` category
#[derive(Clone)]
pub struct UsersService {
    connection: Arc<ApiConnection>,
}

impl UsersService {
    /// Create a new users service
    pub fn new(connection: Arc<ApiConnection>) -> Self {
        Self { connection }
    }

    /// List workspace members
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: ListUsersRequest) -> SlackResult<ListUsersResponse> {
        let response = self
            .connection
            .post("users.list", request.to_params())
            .await?;
        response.decode()
    }

    /// List workspace members as flattened summaries, with presence
    pub async fn summaries(&self) -> SlackResult<Vec<UserSummary>> {
        let response = self
            .list(ListUsersRequest::new().include_presence(true))
            .await?;
        Ok(response.summaries())
    }

    /// Get information about one user
    #[instrument(skip(self, request), fields(user = %request.user))]
    pub async fn info(&self, request: GetUserRequest) -> SlackResult<GetUserResponse> {
        let response = self
            .connection
            .get("users.info", request.to_params())
            .await?;
        response.decode()
    }

    /// Get a user's presence
    #[instrument(skip(self, request), fields(user = %request.user))]
    pub async fn get_presence(
        &self,
        request: GetPresenceRequest,
    ) -> SlackResult<GetPresenceResponse> {
        let response = self
            .connection
            .get("users.getPresence", request.to_params())
            .await?;
        response.decode()
    }
}
