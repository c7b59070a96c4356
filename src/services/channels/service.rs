//! Channels service implementation.

use super::{
    GetChannelRequest, GetChannelResponse, ListChannelsRequest, ListChannelsResponse,
};
use crate::client::ApiConnection;
use crate::errors::SlackResult;
use crate::types::ChannelSummary;
use std::sync::Arc;
use tracing::instrument;

/// Service for the `channels.*` category
#[derive(Clone)]
pub struct ChannelsService {
    connection: Arc<ApiConnection>,
}

impl ChannelsService {
    /// Create a new channels service
    pub fn new(connection: Arc<ApiConnection>) -> Self {
        Self { connection }
    }

    /// List channels
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: ListChannelsRequest) -> SlackResult<ListChannelsResponse> {
        let response = self
            .connection
            .post("channels.list", request.to_params())
            .await?;
        response.decode()
    }

    /// List channels as flattened summaries
    pub async fn summaries(&self) -> SlackResult<Vec<ChannelSummary>> {
        let response = self.list(ListChannelsRequest::new()).await?;
        Ok(response.summaries())
    }

    /// Get information about one channel
    #[instrument(skip(self, request), fields(channel = %request.channel))]
    pub async fn info(&self, request: GetChannelRequest) -> SlackResult<GetChannelResponse> {
        let response = self
            .connection
            .get("channels.info", request.to_params())
            .await?;
        response.decode()
    }
}
