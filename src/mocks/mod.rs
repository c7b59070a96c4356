//! Mock implementations for testing.
//!
//! Provides a queue-backed transport that records every request. Bodies
//! pass through the same `interpret_response` as the real transport, so
//! mock-driven tests exercise the `ok`/non-JSON rules.

use crate::errors::{NetworkError, ResponseError, SlackError, SlackResult};
use crate::params::RequestParams;
use crate::transport::{interpret_response, ApiResponse, HttpTransport};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// One scripted reply
#[derive(Debug, Clone)]
enum MockReply {
    /// A response body, interpreted like a real one
    Body(String),
    /// A simulated transport failure
    NetworkError(String),
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// HTTP method
    pub method: String,
    /// Parameters as handed to the transport
    pub params: RequestParams,
}

impl RecordedRequest {
    /// The encoded form body this request would send
    pub fn encoded_body(&self) -> String {
        self.params.encode()
    }
}

/// Mock HTTP transport
pub struct MockHttpTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_body: Option<String>,
}

impl MockHttpTransport {
    /// Create a new mock transport with no scripted replies
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            default_body: None,
        }
    }

    /// Queue a response body
    pub fn add_body(self, body: impl Into<String>) -> Self {
        self.replies.lock().push_back(MockReply::Body(body.into()));
        self
    }

    /// Queue a bare `{"ok": true}` response
    pub fn add_ok(self) -> Self {
        self.add_body(r#"{"ok":true}"#)
    }

    /// Queue a Slack API error response
    pub fn add_api_error(self, code: &str) -> Self {
        self.add_body(format!(r#"{{"ok":false,"error":"{}"}}"#, code))
    }

    /// Queue a simulated transport failure
    pub fn add_network_error(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .push_back(MockReply::NetworkError(message.into()));
        self
    }

    /// Answer with this body whenever the queue is empty
    pub fn with_default_body(mut self, body: impl Into<String>) -> Self {
        self.default_body = Some(body.into());
        self
    }

    /// Get all recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Remaining scripted replies
    pub fn remaining_replies(&self) -> usize {
        self.replies.lock().len()
    }

    fn record(&self, url: &str, method: &str, params: &RequestParams) {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            method: method.to_string(),
            params: params.clone(),
        });
    }

    fn next_reply(&self) -> SlackResult<MockReply> {
        self.replies
            .lock()
            .pop_front()
            .or_else(|| self.default_body.clone().map(MockReply::Body))
            .ok_or_else(|| {
                SlackError::Response(ResponseError::UnexpectedResponse {
                    message: "No mock reply configured".to_string(),
                })
            })
    }

    fn respond(&self, reply: MockReply) -> SlackResult<ApiResponse> {
        match reply {
            MockReply::Body(body) => interpret_response(body),
            MockReply::NetworkError(message) => Err(SlackError::Network(
                NetworkError::ConnectionFailed { message },
            )),
        }
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn post_form(&self, url: &str, params: RequestParams) -> SlackResult<ApiResponse> {
        self.record(url, "POST", &params);
        let reply = self.next_reply()?;
        self.respond(reply)
    }

    async fn get(&self, url: &str, query: RequestParams) -> SlackResult<ApiResponse> {
        self.record(url, "GET", &query);
        let reply = self.next_reply()?;
        self.respond(reply)
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_replies", &self.replies.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NotFoundError;

    #[tokio::test]
    async fn test_mock_records_requests() {
        let transport = MockHttpTransport::new().with_default_body(r#"{"ok":true}"#);

        let params = RequestParams::new().param("user", "U123");
        transport
            .get("https://slack.com/api/users.info", params)
            .await
            .unwrap();

        let requests = transport.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].params.get("user"), Some("U123"));
    }

    #[tokio::test]
    async fn test_mock_api_error_goes_through_interpretation() {
        let transport = MockHttpTransport::new().add_api_error("channel_not_found");

        let result = transport
            .post_form("https://slack.com/api/chat.postMessage", RequestParams::new())
            .await;
        assert!(matches!(
            result,
            Err(SlackError::NotFound(NotFoundError::Channel))
        ));
    }

    #[tokio::test]
    async fn test_mock_network_error() {
        let transport = MockHttpTransport::new().add_network_error("connection refused");

        let result = transport
            .post_form("https://slack.com/api/api.test", RequestParams::new())
            .await;
        assert!(matches!(result, Err(SlackError::Network(_))));
    }

    #[tokio::test]
    async fn test_mock_empty_queue_is_an_error() {
        let transport = MockHttpTransport::new();
        let result = transport
            .post_form("https://slack.com/api/api.test", RequestParams::new())
            .await;
        assert!(result.is_err());
    }
}
