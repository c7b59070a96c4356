//! Chat service implementation.

use super::{PostMessageRequest, PostMessageResponse};
use crate::client::ApiConnection;
use crate::config::ChatDefaults;
use crate::errors::{RequestError, SlackError, SlackResult};
use crate::params::RequestParams;
use crate::types::Attachment;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::instrument;

/// Service for the `chat.*` category
///
/// Carries the configured defaults (channel, username, icon) and a staging
/// slot for attachments. Staged attachments ride on the next post only:
/// building the parameters for a send consumes them.
#[derive(Clone)]
pub struct ChatService {
    connection: Arc<ApiConnection>,
    defaults: ChatDefaults,
    pending_attachments: Arc<Mutex<Option<Vec<Attachment>>>>,
}

impl ChatService {
    /// Create a new chat service
    pub fn new(connection: Arc<ApiConnection>, defaults: ChatDefaults) -> Self {
        Self {
            connection,
            defaults,
            pending_attachments: Arc::new(Mutex::new(None)),
        }
    }

    /// The configured defaults
    pub fn defaults(&self) -> &ChatDefaults {
        &self.defaults
    }

    /// Stage attachments for the next post
    ///
    /// Consumed by exactly one send; a second post goes out without them.
    pub fn set_attachments(&self, attachments: Vec<Attachment>) {
        *self.pending_attachments.lock() = Some(attachments);
    }

    /// Whether attachments are currently staged
    pub fn has_pending_attachments(&self) -> bool {
        self.pending_attachments.lock().is_some()
    }

    /// Post a message with only text, using the configured defaults
    #[instrument(skip(self, text))]
    pub async fn post(&self, text: impl Into<String>) -> SlackResult<PostMessageResponse> {
        self.post_message(PostMessageRequest::new(text)).await
    }

    /// Post a message with full control over the parameters
    #[instrument(skip(self, request))]
    pub async fn post_message(
        &self,
        request: PostMessageRequest,
    ) -> SlackResult<PostMessageResponse> {
        let params = self.build_params(request)?;
        let response = self.connection.post("chat.postMessage", params).await?;
        response.decode()
    }

    /// Assemble the parameter set for one post
    ///
    /// Fails with `RequestError::MissingChannel` before any attachment is
    /// consumed or network call attempted when no channel is available.
    pub(crate) fn build_params(&self, request: PostMessageRequest) -> SlackResult<RequestParams> {
        let channel = request
            .channel
            .filter(|c| !c.is_empty())
            .or_else(|| self.defaults.channel.clone().filter(|c| !c.is_empty()))
            .ok_or(SlackError::Request(RequestError::MissingChannel))?;

        let username = request.username.or_else(|| self.defaults.username.clone());
        let icon = request.icon.or_else(|| self.defaults.icon.clone());
        let attachments = request
            .attachments
            .or_else(|| self.pending_attachments.lock().take());

        let mut params = RequestParams::new()
            .param("channel", channel)
            .param("text", request.text.unwrap_or_default())
            .opt_param("username", username);

        if let Some(icon) = icon {
            params.push(icon.param_key(), icon.value());
        }

        params = params
            .opt_param("thread_ts", request.thread_ts.map(|ts| ts.0))
            .opt_param("parse", request.parse)
            .opt_param("mrkdwn", request.mrkdwn.map(|b| b.to_string()))
            .opt_param("unfurl_links", request.unfurl_links.map(|b| b.to_string()));

        if let Some(attachments) = attachments {
            let encoded = serde_json::to_string(&attachments).map_err(|e| {
                SlackError::Request(RequestError::InvalidArguments {
                    message: format!("attachments not serializable: {}", e),
                })
            })?;
            params.push("attachments", encoded);
        }

        Ok(params)
    }
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("defaults", &self.defaults)
            .field("pending_attachments", &self.has_pending_attachments())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Icon, SlackConfigBuilder};
    use crate::mocks::MockHttpTransport;
    use pretty_assertions::assert_eq;

    fn chat_with_defaults() -> ChatService {
        let config = SlackConfigBuilder::new()
            .token("xoxb-test")
            .unwrap()
            .default_channel("#general")
            .default_username("Support Bot")
            .default_icon(Icon::Emoji(":hamster:".to_string()))
            .build()
            .unwrap();

        let transport = Arc::new(MockHttpTransport::new());
        let connection = Arc::new(ApiConnection::new(transport, &config));
        ChatService::new(connection, config.chat.clone())
    }

    #[test]
    fn test_text_only_post_uses_exactly_the_defaults() {
        let chat = chat_with_defaults();
        let params = chat
            .build_params(PostMessageRequest::new("Hello there!"))
            .unwrap();

        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("channel", "#general"),
                ("text", "Hello there!"),
                ("username", "Support Bot"),
                ("icon_emoji", ":hamster:"),
            ]
        );
    }

    #[test]
    fn test_request_fields_override_defaults() {
        let chat = chat_with_defaults();
        let request = PostMessageRequest::in_channel("#testbot", "hi")
            .username("peach")
            .icon(Icon::Emoji(":princess:".to_string()));

        let params = chat.build_params(request).unwrap();
        assert_eq!(params.get("channel"), Some("#testbot"));
        assert_eq!(params.get("username"), Some("peach"));
        assert_eq!(params.get("icon_emoji"), Some(":princess:"));
    }

    #[test]
    fn test_missing_channel_is_a_local_error() {
        let config = SlackConfigBuilder::new()
            .token("xoxb-test")
            .unwrap()
            .build()
            .unwrap();
        let transport = Arc::new(MockHttpTransport::new());
        let connection = Arc::new(ApiConnection::new(transport, &config));
        let chat = ChatService::new(connection, config.chat.clone());

        let err = chat
            .build_params(PostMessageRequest::new("no channel"))
            .unwrap_err();
        assert!(matches!(
            err,
            SlackError::Request(RequestError::MissingChannel)
        ));
    }

    #[test]
    fn test_empty_channel_falls_back_to_default() {
        let chat = chat_with_defaults();
        let params = chat
            .build_params(PostMessageRequest::new("hi").channel(""))
            .unwrap();
        assert_eq!(params.get("channel"), Some("#general"));
    }

    #[test]
    fn test_staged_attachments_are_one_shot() {
        let chat = chat_with_defaults();
        chat.set_attachments(vec![Attachment::new().text("first")]);

        let params = chat
            .build_params(PostMessageRequest::new("with attachments"))
            .unwrap();
        assert!(params.contains_key("attachments"));

        let params = chat
            .build_params(PostMessageRequest::new("without attachments"))
            .unwrap();
        assert!(!params.contains_key("attachments"));
    }

    #[test]
    fn test_missing_channel_does_not_consume_attachments() {
        let config = SlackConfigBuilder::new()
            .token("xoxb-test")
            .unwrap()
            .build()
            .unwrap();
        let transport = Arc::new(MockHttpTransport::new());
        let connection = Arc::new(ApiConnection::new(transport, &config));
        let chat = ChatService::new(connection, config.chat.clone());

        chat.set_attachments(vec![Attachment::new().text("staged")]);
        assert!(chat
            .build_params(PostMessageRequest::new("no channel"))
            .is_err());
        assert!(chat.has_pending_attachments());
    }

    #[test]
    fn test_request_attachments_override_staged() {
        let chat = chat_with_defaults();
        chat.set_attachments(vec![Attachment::new().text("staged")]);

        let request = PostMessageRequest::new("explicit")
            .attachments(vec![Attachment::new().text("explicit")]);
        let params = chat.build_params(request).unwrap();

        assert!(params.get("attachments").unwrap().contains("explicit"));
        // Staged attachments stay for the next defaulted send.
        assert!(chat.has_pending_attachments());
    }
}
