//! Test fixtures for Slack API responses.
//!
//! Realistic response bodies for unit tests and mock transports.

use serde_json::json;

/// A `users.list` body with a human, a bot, and a member that omits
/// optional fields
pub fn users_list_body() -> String {
    json!({
        "ok": true,
        "members": [
            {
                "id": "U1234567890",
                "name": "jdoe",
                "real_name": "John Doe",
                "deleted": false,
                "is_bot": false,
                "presence": "active",
                "profile": {
                    "email": "jdoe@example.com",
                    "display_name": "Johnny"
                }
            },
            {
                "id": "U0987654321",
                "name": "supportbot",
                "is_bot": true,
                "presence": "away",
                "profile": {}
            },
            {
                "id": "U1111111111",
                "name": "minimal"
            }
        ]
    })
    .to_string()
}

/// A `users.info` body
pub fn user_info_body() -> String {
    json!({
        "ok": true,
        "user": {
            "id": "U1234567890",
            "name": "jdoe",
            "is_bot": false,
            "profile": {"email": "jdoe@example.com"}
        }
    })
    .to_string()
}

/// A `users.getPresence` body
pub fn presence_body() -> String {
    json!({"ok": true, "presence": "active", "online": true}).to_string()
}

/// A `channels.list` body
pub fn channels_list_body() -> String {
    json!({
        "ok": true,
        "channels": [
            {
                "id": "C1234567890",
                "name": "general",
                "is_channel": true,
                "is_member": true,
                "created": 1234567890,
                "creator": "U1234567890",
                "num_members": 42,
                "topic": {"value": "General discussion", "creator": "U1234567890", "last_set": 1234567890}
            },
            {
                "id": "C0987654321",
                "name": "testbot",
                "is_channel": true,
                "num_members": 3
            }
        ]
    })
    .to_string()
}

/// A `channels.info` body
pub fn channel_info_body() -> String {
    json!({
        "ok": true,
        "channel": {
            "id": "C1234567890",
            "name": "general",
            "is_channel": true,
            "num_members": 42
        }
    })
    .to_string()
}

/// A `chat.postMessage` body
pub fn post_message_body() -> String {
    json!({
        "ok": true,
        "channel": "C1234567890",
        "ts": "1503435956.000247",
        "message": {
            "type": "message",
            "text": "Hello there!",
            "username": "Support Bot",
            "bot_id": "B19LU7CSY",
            "ts": "1503435956.000247"
        }
    })
    .to_string()
}

/// An `api.test` body echoing one argument
pub fn api_test_body() -> String {
    json!({"ok": true, "args": {"foo": "bar"}}).to_string()
}

/// The plain-text body webhook endpoints answer with
pub fn webhook_ok_body() -> String {
    "ok".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::users::ListUsersResponse;

    #[test]
    fn test_fixtures_parse() {
        let _: serde_json::Value = serde_json::from_str(&users_list_body()).unwrap();
        let _: serde_json::Value = serde_json::from_str(&channels_list_body()).unwrap();
        let _: serde_json::Value = serde_json::from_str(&post_message_body()).unwrap();
    }

    #[test]
    fn test_users_fixture_decodes() {
        let response: ListUsersResponse =
            serde_json::from_str(&users_list_body()).unwrap();
        assert_eq!(response.members.len(), 3);
    }
}
