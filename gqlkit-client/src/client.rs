//! GraphQL client implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use gqlkit_query::{Formatting, QueryBuilder};
use reqwest::Client;
use tracing::{debug, warn};

use crate::request::GraphQLRequest;
use crate::{GraphQLClientConfig, GraphQLError, GraphQLResponse, QueryRequest, QueryResult, Result};

/// GraphQL client.
#[derive(Clone)]
pub struct GraphQLClient {
    http_client: Client,
    config: Arc<GraphQLClientConfig>,
}

impl GraphQLClient {
    /// Create a new GraphQL client with the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let config = GraphQLClientConfig::new(endpoint);
        Self::with_config(config)
    }

    /// Create a new GraphQL client with custom configuration.
    pub fn with_config(config: GraphQLClientConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(GraphQLError::Config("endpoint must not be empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &GraphQLClientConfig {
        &self.config
    }

    /// Prepare a request for a query string.
    pub fn query(&self, query: impl Into<String>) -> QueryRequest<'_> {
        QueryRequest::new(self, query)
    }

    /// Prepare a request for a built document, sent in compact form.
    pub fn document(&self, document: &QueryBuilder) -> QueryRequest<'_> {
        QueryRequest::new(self, document.build(Formatting::Compact))
    }

    /// Execute a single request.
    pub(crate) async fn execute_request(
        &self,
        request: GraphQLRequest,
        extra_headers: Vec<(String, String)>,
        timeout: Option<Duration>,
    ) -> Result<QueryResult> {
        debug!(endpoint = %self.config.endpoint, query = %request.query, "Executing GraphQL request");

        let mut http_request = self.http_client.post(&self.config.endpoint);

        // Add default headers
        for (name, value) in &self.config.default_headers {
            http_request = http_request.header(name.as_str(), value.as_str());
        }

        // Add extra headers
        for (name, value) in extra_headers {
            http_request = http_request.header(name.as_str(), value.as_str());
        }

        http_request = http_request.header("Content-Type", "application/json");

        if let Some(timeout) = timeout {
            http_request = http_request.timeout(timeout);
        }

        let response = http_request.json(&request).send().await?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "GraphQL request failed");
            // Servers commonly pair 4xx/5xx with a GraphQL error envelope.
            if let Ok(response) = serde_json::from_str::<GraphQLResponse>(&body)
                && let Some(errors) = response.errors
                && !errors.is_empty()
            {
                return Err(GraphQLError::GraphQL(errors));
            }
            return Err(GraphQLError::Status {
                status: status.as_u16(),
                body,
            });
        }

        QueryResult::from_raw(body, headers)
    }
}
