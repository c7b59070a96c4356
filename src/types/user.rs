//! User-related types for the Slack API.

use super::UserId;
use serde::{Deserialize, Deserializer, Serialize};

fn default_true() -> bool {
    true
}

/// Decode `is_bot` leniently: anything that is not an explicit boolean
/// counts as a bot.
fn bool_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}

/// Slack user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Username
    #[serde(default)]
    pub name: Option<String>,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Whether deleted/deactivated
    #[serde(default)]
    pub deleted: bool,
    /// Presence (`active`/`away`), empty when the listing was requested
    /// without presence
    #[serde(default)]
    pub presence: String,
    /// Whether this user is a bot
    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub is_bot: bool,
    /// Whether admin
    #[serde(default)]
    pub is_admin: bool,
    /// User profile
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl User {
    /// Get the user's email if available
    pub fn email(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.email.as_deref())
    }

    /// Flatten into the summary record
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone().unwrap_or_default(),
            email: self.email().unwrap_or_default().to_string(),
            presence: self.presence.clone(),
            is_bot: self.is_bot,
        }
    }
}

/// User profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Status text
    #[serde(default)]
    pub status_text: Option<String>,
    /// Status emoji
    #[serde(default)]
    pub status_emoji: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
}

/// Flattened user projection
///
/// Constructed fresh from each `users.list` response; absent fields fall
/// back to empty strings, absent or malformed `is_bot` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// User ID
    pub id: UserId,
    /// Username
    pub name: String,
    /// Email address, empty when not visible
    pub email: String,
    /// Presence, empty when not requested
    pub presence: String,
    /// Whether this user is a bot
    pub is_bot: bool,
}

impl std::fmt::Display for UserSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_applied() {
        let json = r#"{"id": "U123", "name": "jdoe"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.presence, "");
        assert!(user.is_bot);
        assert!(!user.deleted);
    }

    #[test]
    fn test_is_bot_non_boolean_defaults_true() {
        let json = r#"{"id": "U123", "is_bot": "maybe"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_bot);

        let json = r#"{"id": "U123", "is_bot": false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.is_bot);
    }

    #[test]
    fn test_summary_flattens_profile_email() {
        let json = r#"{
            "id": "U123",
            "name": "jdoe",
            "is_bot": false,
            "presence": "active",
            "profile": {"email": "jdoe@example.com"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        let summary = user.summary();

        assert_eq!(summary.name, "jdoe");
        assert_eq!(summary.email, "jdoe@example.com");
        assert_eq!(summary.presence, "active");
        assert!(!summary.is_bot);
    }
}
