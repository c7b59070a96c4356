//! Error types for the Slack client.
//!
//! Two failure categories reach callers: transport failures (network, TLS,
//! DNS, timeout) and application-level failures (the API answered with a
//! false `ok` flag and an error code). Both surface as `SlackError` values;
//! callers decide whether an error is fatal.

use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for the Slack client
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Request validation error (raised locally, before any network call)
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Named target (channel or user) was not found
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Generic API error
    #[error("API error: {code} - {message}")]
    Api {
        /// Slack error code
        code: String,
        /// Error message
        message: String,
    },
}

impl SlackError {
    /// Create an error from a Slack API error response
    ///
    /// Well-known codes map to semantic variants; everything else lands in
    /// the generic `Api` variant with the code preserved verbatim.
    pub fn from_api_error(code: &str, message: Option<&str>) -> Self {
        let msg = message.unwrap_or(code).to_string();

        match code {
            "invalid_auth" => Self::Authentication(AuthenticationError::InvalidAuth),
            "not_authed" => Self::Authentication(AuthenticationError::NotAuthed),
            "account_inactive" => Self::Authentication(AuthenticationError::AccountInactive),
            "token_revoked" => Self::Authentication(AuthenticationError::TokenRevoked),
            "channel_not_found" => Self::NotFound(NotFoundError::Channel),
            "user_not_found" => Self::NotFound(NotFoundError::User),
            _ => Self::Api {
                code: code.to_string(),
                message: msg,
            },
        }
    }

    /// Get the API error code if this error came from an API response
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            Self::Authentication(AuthenticationError::InvalidAuth) => Some("invalid_auth"),
            Self::Authentication(AuthenticationError::NotAuthed) => Some("not_authed"),
            Self::Authentication(AuthenticationError::AccountInactive) => Some("account_inactive"),
            Self::Authentication(AuthenticationError::TokenRevoked) => Some("token_revoked"),
            Self::NotFound(NotFoundError::Channel) => Some("channel_not_found"),
            Self::NotFound(NotFoundError::User) => Some("user_not_found"),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("API token is missing")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Request validation errors
#[derive(Error, Debug)]
pub enum RequestError {
    /// No channel supplied and no default configured
    #[error("No channel given and no default channel configured")]
    MissingChannel,

    /// Invalid arguments
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        /// Error message
        message: String,
    },
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// Invalid authentication credentials
    #[error("Invalid authentication credentials")]
    InvalidAuth,

    /// No authentication token was provided with the call
    #[error("Not authenticated")]
    NotAuthed,

    /// Account is inactive
    #[error("Account is inactive")]
    AccountInactive,

    /// Token has been revoked
    #[error("Token has been revoked")]
    TokenRevoked,
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// The response body carried no JSON document
    #[error("Response body is not JSON")]
    NotJson,

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

/// Not-found errors for named targets
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// Channel not found
    #[error("Channel not found")]
    Channel,

    /// User not found
    #[error("User not found")]
    User,
}
