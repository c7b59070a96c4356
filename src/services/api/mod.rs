//! The `api.*` endpoints.

use crate::client::ApiConnection;
use crate::errors::SlackResult;
use crate::params::RequestParams;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

/// Request for `api.test`
///
/// The endpoint echoes every argument back; an `error` argument makes it
/// answer with that error code.
#[derive(Debug, Clone, Default)]
pub struct ApiTestRequest {
    /// Error code to provoke
    pub error: Option<String>,
    /// Arbitrary arguments to echo
    pub args: Vec<(String, String)>,
}

impl ApiTestRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the endpoint to answer with this error code
    pub fn error(mut self, code: impl Into<String>) -> Self {
        self.error = Some(code.into());
        self
    }

    /// Add an argument to echo
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        let mut params: RequestParams = self.args.iter().cloned().collect();
        if let Some(error) = &self.error {
            params.push("error", error.clone());
        }
        params
    }
}

/// Response from `api.test`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTestResponse {
    /// Echoed error code, if one was requested
    #[serde(default)]
    pub error: Option<String>,
    /// Echoed arguments
    #[serde(default)]
    pub args: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Service for the `api.*` category
#[derive(Clone)]
pub struct ApiService {
    connection: Arc<ApiConnection>,
}

impl ApiService {
    /// Create a new api service
    pub fn new(connection: Arc<ApiConnection>) -> Self {
        Self { connection }
    }

    /// Call `api.test`
    #[instrument(skip(self, request))]
    pub async fn test(&self, request: ApiTestRequest) -> SlackResult<ApiTestResponse> {
        let response = self.connection.get("api.test", request.to_params()).await?;
        response.decode()
    }

    /// Check connectivity with an empty `api.test` call
    pub async fn ping(&self) -> SlackResult<()> {
        self.test(ApiTestRequest::new()).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_params_include_args_and_error() {
        let params = ApiTestRequest::new()
            .arg("foo", "bar")
            .error("some_error")
            .to_params();

        assert_eq!(params.get("foo"), Some("bar"));
        assert_eq!(params.get("error"), Some("some_error"));
    }

    #[test]
    fn test_empty_request_has_no_params() {
        assert!(ApiTestRequest::new().to_params().is_empty());
    }
}
