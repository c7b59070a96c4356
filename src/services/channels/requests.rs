//! Request types for the channels service.

use crate::params::RequestParams;
use crate::types::ChannelId;

/// Request to list channels
#[derive(Debug, Clone, Default)]
pub struct ListChannelsRequest {
    /// Leave archived channels out of the listing
    pub exclude_archived: Option<bool>,
}

impl ListChannelsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude archived channels
    pub fn exclude_archived(mut self, exclude: bool) -> Self {
        self.exclude_archived = Some(exclude);
        self
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        RequestParams::new().opt_param(
            "exclude_archived",
            self.exclude_archived
                .map(|e| if e { "1" } else { "0" }.to_string()),
        )
    }
}

/// Request for information about one channel
#[derive(Debug, Clone)]
pub struct GetChannelRequest {
    /// The channel to look up
    pub channel: ChannelId,
}

impl GetChannelRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        RequestParams::new().param("channel", self.channel.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params() {
        let params = ListChannelsRequest::new().exclude_archived(true).to_params();
        assert_eq!(params.get("exclude_archived"), Some("1"));
    }

    #[test]
    fn test_info_params() {
        let params = GetChannelRequest::new("C123").to_params();
        assert_eq!(params.get("channel"), Some("C123"));
    }
}
