//! Request types for the users service.

use crate::params::RequestParams;
use crate::types::UserId;

/// Request to list users
#[derive(Debug, Clone, Default)]
pub struct ListUsersRequest {
    /// Include presence data for each member
    pub include_presence: Option<bool>,
    /// Maximum number of members to return
    pub limit: Option<i64>,
}

impl ListUsersRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Request presence data
    pub fn include_presence(mut self, include: bool) -> Self {
        self.include_presence = Some(include);
        self
    }

    /// Limit the page size
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .opt_param(
                "presence",
                self.include_presence
                    .map(|p| if p { "1" } else { "0" }.to_string()),
            )
            .opt_param("limit", self.limit.map(|l| l.to_string()))
    }
}

/// Request for information about one user
#[derive(Debug, Clone)]
pub struct GetUserRequest {
    /// The user to look up
    pub user: UserId,
}

impl GetUserRequest {
    /// Create a new request
    pub fn new(user: impl Into<UserId>) -> Self {
        Self { user: user.into() }
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        RequestParams::new().param("user", self.user.as_str())
    }
}

/// Request for a user's presence
#[derive(Debug, Clone)]
pub struct GetPresenceRequest {
    /// The user to query
    pub user: UserId,
}

impl GetPresenceRequest {
    /// Create a new request
    pub fn new(user: impl Into<UserId>) -> Self {
        Self { user: user.into() }
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        RequestParams::new().param("user", self.user.as_str())
    }
}
