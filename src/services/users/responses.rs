//! Response types for the users service.

use crate::types::{User, UserSummary};
use serde::Deserialize;

/// Response from `users.list`
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    /// Workspace members
    #[serde(default)]
    pub members: Vec<User>,
}

impl ListUsersResponse {
    /// Flatten every member into a summary record
    pub fn summaries(&self) -> Vec<UserSummary> {
        self.members.iter().map(User::summary).collect()
    }
}

/// Response from `users.info`
#[derive(Debug, Clone, Deserialize)]
pub struct GetUserResponse {
    /// User info
    pub user: User,
}

/// Response from `users.getPresence`
#[derive(Debug, Clone, Deserialize)]
pub struct GetPresenceResponse {
    /// Presence (`active` or `away`)
    pub presence: String,
    /// Whether the user is online
    #[serde(default)]
    pub online: Option<bool>,
}
