//! HTTP transport layer for the Slack client.
//!
//! Performs one GET or POST per logical operation and interprets the
//! response body. At most one request is in flight per transport: a
//! `tokio::sync::Mutex` gate is held for the duration of each call, so
//! concurrent callers queue.

use crate::errors::{NetworkError, ResponseError, SlackError, SlackResult};
use crate::observability::logging::{redact_form, redact_url};
use crate::params::RequestParams;
use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Interpreted API response
///
/// Constructed only for successful calls: an `ok: false` body becomes an
/// error before an `ApiResponse` exists. A body that is not JSON (webhook
/// endpoints answer with plain text) is success with no structured data.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    body: String,
    json: Option<serde_json::Value>,
}

impl ApiResponse {
    /// The raw response body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The parsed JSON document, if the body was JSON
    pub fn json(&self) -> Option<&serde_json::Value> {
        self.json.as_ref()
    }

    /// Whether the body carried a JSON document
    pub fn is_structured(&self) -> bool {
        self.json.is_some()
    }

    /// Decode the JSON document into a typed response
    pub fn decode<T: DeserializeOwned>(&self) -> SlackResult<T> {
        let json = self
            .json
            .as_ref()
            .ok_or(SlackError::Response(ResponseError::NotJson))?;
        serde_json::from_value(json.clone())
            .map_err(|e| SlackError::Response(ResponseError::from(e)))
    }
}

/// Interpret a response body
///
/// Rules:
/// - not JSON: success with no structured data
/// - `ok` missing or not a boolean: success
/// - `ok: false`: error, code taken from the `error` field
///   (`unknown_error` when absent)
pub fn interpret_response(body: String) -> SlackResult<ApiResponse> {
    let json: serde_json::Value = match serde_json::from_str(&body) {
        Ok(json) => json,
        Err(_) => {
            debug!(body = %body, "Response body is not JSON, treating as success");
            return Ok(ApiResponse { body, json: None });
        }
    };

    if let Some(false) = json.get("ok").and_then(|v| v.as_bool()) {
        let code = json
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown_error");
        warn!(code, "Slack API call failed");
        return Err(SlackError::from_api_error(code, None));
    }

    Ok(ApiResponse {
        body,
        json: Some(json),
    })
}

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a form-encoded body and interpret the response
    async fn post_form(&self, url: &str, params: RequestParams) -> SlackResult<ApiResponse>;

    /// GET with a query string and interpret the response
    async fn get(&self, url: &str, query: RequestParams) -> SlackResult<ApiResponse>;
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    // Serializes calls: at most one in-flight request per transport.
    gate: tokio::sync::Mutex<()>,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            gate: tokio::sync::Mutex::new(()),
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            gate: tokio::sync::Mutex::new(()),
            default_timeout,
        }
    }

    async fn read_body(response: reqwest::Response) -> SlackResult<String> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Request returned a non-success status");
        }

        response
            .text()
            .await
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, params), fields(url = %url))]
    async fn post_form(&self, url: &str, params: RequestParams) -> SlackResult<ApiResponse> {
        let _serial = self.gate.lock().await;

        let body = params.encode();
        debug!(body = %redact_form(&body), "Sending POST");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .timeout(self.default_timeout)
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        let body = Self::read_body(response).await?;
        debug!(body = %body, "Received response");
        interpret_response(body)
    }

    #[instrument(skip(self, query), fields(url = %url))]
    async fn get(&self, url: &str, query: RequestParams) -> SlackResult<ApiResponse> {
        let _serial = self.gate.lock().await;

        let url = if query.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, query.encode())
        };
        debug!(url = %redact_url(&url), "Sending GET");

        let response = self
            .client
            .get(&url)
            .timeout(self.default_timeout)
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        let body = Self::read_body(response).await?;
        debug!(body = %body, "Received response");
        interpret_response(body)
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
