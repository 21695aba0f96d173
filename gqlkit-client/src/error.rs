//! GraphQL client error types.

use thiserror::Error;

/// Result type for GraphQL client operations.
pub type Result<T> = std::result::Result<T, GraphQLError>;

/// GraphQL client errors.
#[derive(Debug, Error)]
pub enum GraphQLError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// GraphQL errors returned by the server.
    #[error("GraphQL errors: {0:?}")]
    GraphQL(Vec<crate::GraphQLResponseError>),

    /// The server answered with a non-success HTTP status and a body that
    /// is not a GraphQL error envelope. A non-success response carrying
    /// `errors` is reported as [`GraphQLError::GraphQL`] instead.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as received.
        body: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GraphQLError {
    /// Check if this is a network error.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }

    /// Check if this is a GraphQL error (server-side).
    pub fn is_graphql_error(&self) -> bool {
        matches!(self, Self::GraphQL(_))
    }

    /// Get GraphQL errors if this is a GraphQL error.
    pub fn graphql_errors(&self) -> Option<&[crate::GraphQLResponseError]> {
        match self {
            Self::GraphQL(errors) => Some(errors),
            _ => None,
        }
    }

    /// Body of a failed HTTP response, if there was one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
