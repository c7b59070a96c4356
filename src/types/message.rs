//! Message-related types for the Slack API.

use super::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Slack message as echoed back by `chat.postMessage`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message type
    #[serde(rename = "type", default)]
    pub message_type: Option<String>,
    /// Message subtype
    #[serde(default)]
    pub subtype: Option<String>,
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
    /// User who sent the message
    #[serde(default)]
    pub user: Option<UserId>,
    /// Username (for bot messages)
    #[serde(default)]
    pub username: Option<String>,
    /// Bot ID if sent by a bot
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Message timestamp (unique ID)
    #[serde(default)]
    pub ts: Option<Timestamp>,
    /// Attachments
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Get the effective text content
    pub fn content(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Rich-formatting attachment block
///
/// Serialized as a JSON array under the `attachments` parameter. On the
/// chat service, staged attachments are sent once and cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary for clients that cannot render the attachment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Bar color (hex or `good`/`warning`/`danger`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Text shown above the attachment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    /// Author line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title hyperlink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    /// Main text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Thumbnail URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    /// Footer line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Short fields rendered in a table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
}

impl Attachment {
    /// Create an empty attachment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback text
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Set the color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the pretext
    pub fn pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = Some(pretext.into());
        self
    }

    /// Set the title, optionally linked
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title link
    pub fn title_link(mut self, link: impl Into<String>) -> Self {
        self.title_link = Some(link.into());
        self
    }

    /// Set the main text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the image URL
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Add a field
    pub fn field(mut self, field: AttachmentField) -> Self {
        self.fields.push(field);
        self
    }
}

/// One field in an attachment table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentField {
    /// Field title
    pub title: String,
    /// Field value
    pub value: String,
    /// Whether the field is short enough to render side by side
    #[serde(default)]
    pub short: bool,
}

impl AttachmentField {
    /// Create a new field
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_builder_serializes_set_fields_only() {
        let attachment = Attachment::new()
            .fallback("New ticket - #2017")
            .color("#7CD197")
            .title("Ticket #2017")
            .text("Help me!");

        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["color"], "#7CD197");
        assert_eq!(json["title"], "Ticket #2017");
        assert!(json.get("pretext").is_none());
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_attachment_round_trip() {
        let attachment = Attachment::new()
            .text("Bomb is launched!")
            .color("danger")
            .field(AttachmentField::new("Severity", "high", true));

        let json = serde_json::to_string(&attachment).unwrap();
        let back: Attachment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.text.as_deref(), Some("Bomb is launched!"));
        assert_eq!(back.fields.len(), 1);
    }

    #[test]
    fn test_message_content_default() {
        let message: Message = serde_json::from_str(r#"{"ts": "123.456"}"#).unwrap();
        assert_eq!(message.content(), "");
    }
}
