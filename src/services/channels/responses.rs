//! Response types for the channels service.

use crate::types::{Channel, ChannelSummary};
use serde::Deserialize;

/// Response from `channels.list`
#[derive(Debug, Clone, Deserialize)]
pub struct ListChannelsResponse {
    /// Channels visible to the token
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl ListChannelsResponse {
    /// Flatten every channel into a summary record
    pub fn summaries(&self) -> Vec<ChannelSummary> {
        self.channels.iter().map(Channel::summary).collect()
    }
}

/// Response from `channels.info`
#[derive(Debug, Clone, Deserialize)]
pub struct GetChannelResponse {
    /// Channel info
    pub channel: Channel,
}
