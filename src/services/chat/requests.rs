//! Request types for the chat service.

use crate::config::Icon;
use crate::types::{Attachment, Timestamp};

/// Request to post a message
///
/// Only the fields set here emit parameters; everything left `None` falls
/// back to the chat defaults (channel, username, icon) or is omitted.
#[derive(Debug, Clone, Default)]
pub struct PostMessageRequest {
    /// Channel to post to; falls back to the configured default
    pub channel: Option<String>,
    /// Message text
    pub text: Option<String>,
    /// Bot username override
    pub username: Option<String>,
    /// Bot icon override
    pub icon: Option<Icon>,
    /// Thread timestamp to reply to
    pub thread_ts: Option<Timestamp>,
    /// Parse mode (`full` or `none`)
    pub parse: Option<String>,
    /// Enable markdown formatting
    pub mrkdwn: Option<bool>,
    /// Enable link unfurling
    pub unfurl_links: Option<bool>,
    /// Attachments for this message; overrides any staged attachments
    pub attachments: Option<Vec<Attachment>>,
}

impl PostMessageRequest {
    /// Create a request with only text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a request with a channel and text
    pub fn in_channel(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: Some(channel.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the channel
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set the text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the icon
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Reply in a thread
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    /// Set the parse mode
    pub fn parse(mut self, mode: impl Into<String>) -> Self {
        self.parse = Some(mode.into());
        self
    }

    /// Enable/disable mrkdwn formatting
    pub fn mrkdwn(mut self, enabled: bool) -> Self {
        self.mrkdwn = Some(enabled);
        self
    }

    /// Enable/disable link unfurling
    pub fn unfurl_links(mut self, unfurl: bool) -> Self {
        self.unfurl_links = Some(unfurl);
        self
    }

    /// Set the attachments
    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }
}
