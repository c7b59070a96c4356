//! Incoming webhook delivery.
//!
//! Webhooks use a pre-shared URL instead of token + method: the message is
//! JSON-encoded, wrapped under a single `payload=` form field, and posted.
//! The endpoint answers with plain text (`ok`), which the response
//! interpretation accepts as success with no structured result.

use crate::config::Icon;
use crate::errors::{RequestError, SlackError, SlackResult};
use crate::params::RequestParams;
use crate::transport::{ApiResponse, HttpTransport, ReqwestTransport};
use crate::types::Attachment;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Message payload for an incoming webhook
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookPayload {
    /// Message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Channel override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Username override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Icon emoji override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    /// Icon URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Attachments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl WebhookPayload {
    /// Create a payload with text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Override the channel
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Override the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Override the icon
    pub fn icon(mut self, icon: Icon) -> Self {
        match icon {
            Icon::Emoji(emoji) => self.icon_emoji = Some(emoji),
            Icon::Url(url) => self.icon_url = Some(url),
        }
        self
    }

    /// Add an attachment
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Client for one incoming webhook URL
///
/// Independent of `SlackClient`: webhooks carry no token.
pub struct WebhookClient {
    url: String,
    transport: Arc<dyn HttpTransport>,
}

impl WebhookClient {
    /// Create a webhook client with a default transport
    pub fn new(url: impl Into<String>) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(Duration::from_secs(
            crate::DEFAULT_TIMEOUT_SECS,
        ))?);
        Ok(Self::with_transport(url, transport))
    }

    /// Create a webhook client with a custom transport
    pub fn with_transport(url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    /// The webhook URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Deliver a payload
    #[instrument(skip(self, payload))]
    pub async fn send(&self, payload: &WebhookPayload) -> SlackResult<ApiResponse> {
        let json = serde_json::to_string(payload).map_err(|e| {
            SlackError::Request(RequestError::InvalidArguments {
                message: format!("payload not serializable: {}", e),
            })
        })?;

        let params = RequestParams::new().param("payload", json);
        self.transport.post_form(&self.url, params).await
    }

    /// Deliver a plain text message
    pub async fn send_text(&self, text: impl Into<String>) -> SlackResult<()> {
        self.send(&WebhookPayload::new(text)).await.map(|_| ())
    }
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("url", &self.url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_set_fields_only() {
        let payload = WebhookPayload::new("Hello!")
            .username("peach")
            .icon(Icon::Emoji(":princess:".to_string()));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["text"], "Hello!");
        assert_eq!(json["username"], "peach");
        assert_eq!(json["icon_emoji"], ":princess:");
        assert!(json.get("channel").is_none());
        assert!(json.get("icon_url").is_none());
        assert!(json.get("attachments").is_none());
    }

    #[test]
    fn test_payload_with_attachments() {
        let payload = WebhookPayload::new("")
            .attachment(Attachment::new().text("Bomb is launched!").color("danger"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["attachments"][0]["color"], "danger");
    }
}
