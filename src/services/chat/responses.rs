//! Response types for the chat service.

use crate::types::{ChannelId, Message, Timestamp};
use serde::Deserialize;

/// Response from `chat.postMessage`
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Channel the message landed in
    #[serde(default)]
    pub channel: Option<ChannelId>,
    /// Timestamp of the posted message
    #[serde(default)]
    pub ts: Option<Timestamp>,
    /// The posted message as the API echoes it
    #[serde(default)]
    pub message: Option<Message>,
}
