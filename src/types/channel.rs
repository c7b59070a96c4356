//! Channel-related types for the Slack API.

use super::{ChannelId, UserId};
use serde::{Deserialize, Serialize};

/// Slack channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID
    pub id: ChannelId,
    /// Channel name (without #)
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this is a channel
    #[serde(default)]
    pub is_channel: bool,
    /// Whether this is archived
    #[serde(default)]
    pub is_archived: bool,
    /// Whether the current user is a member
    #[serde(default)]
    pub is_member: bool,
    /// Creator user ID
    #[serde(default)]
    pub creator: Option<UserId>,
    /// Creation timestamp (Unix)
    #[serde(default)]
    pub created: Option<i64>,
    /// Number of members
    #[serde(default)]
    pub num_members: Option<i64>,
    /// Channel topic
    #[serde(default)]
    pub topic: Option<ChannelTopic>,
    /// Channel purpose
    #[serde(default)]
    pub purpose: Option<ChannelTopic>,
}

impl Channel {
    /// Get the display name for this channel
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id.0)
    }

    /// Flatten into the summary record
    pub fn summary(&self) -> ChannelSummary {
        ChannelSummary {
            id: self.id.clone(),
            name: self.name.clone().unwrap_or_default(),
            num_members: self.num_members.unwrap_or(0),
        }
    }
}

/// Channel topic or purpose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelTopic {
    /// Topic value
    #[serde(default)]
    pub value: String,
    /// Who set the topic
    #[serde(default)]
    pub creator: Option<UserId>,
    /// When the topic was set (Unix timestamp)
    #[serde(default)]
    pub last_set: i64,
}

/// Flattened channel projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    /// Channel ID
    pub id: ChannelId,
    /// Channel name, empty when absent
    pub name: String,
    /// Member count, zero when absent
    pub num_members: i64,
}

impl std::fmt::Display for ChannelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({} members)", self.name, self.num_members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_deserialize() {
        let json = r#"{
            "id": "C1234567890",
            "name": "general",
            "is_channel": true,
            "is_member": true,
            "created": 1234567890,
            "num_members": 42
        }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.id.as_str(), "C1234567890");
        assert_eq!(channel.name.as_deref(), Some("general"));
        assert!(channel.is_channel);
        assert!(channel.is_member);
    }

    #[test]
    fn test_summary_defaults() {
        let json = r#"{"id": "C42"}"#;
        let channel: Channel = serde_json::from_str(json).unwrap();
        let summary = channel.summary();

        assert_eq!(summary.name, "");
        assert_eq!(summary.num_members, 0);
        assert_eq!(channel.display_name(), "C42");
    }
}
