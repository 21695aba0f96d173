//! GraphQL client configuration.

use std::time::Duration;

/// GraphQL client configuration.
#[derive(Debug, Clone)]
pub struct GraphQLClientConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Default headers for all requests.
    pub default_headers: Vec<(String, String)>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for GraphQLClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4000/graphql".to_string(),
            timeout: Duration::from_secs(30),
            default_headers: Vec::new(),
            user_agent: format!("gqlkit-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GraphQLClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> GraphQLClientConfigBuilder {
        GraphQLClientConfigBuilder::default()
    }

    /// Create configuration for a specific endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// Builder for GraphQL client configuration.
#[derive(Debug, Default)]
pub struct GraphQLClientConfigBuilder {
    config: GraphQLClientConfig,
}

impl GraphQLClientConfigBuilder {
    /// Set the GraphQL endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .default_headers
            .push((name.into(), value.into()));
        self
    }

    /// Set bearer authentication. An empty token adds no header.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.config
                .default_headers
                .push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        self
    }

    /// Edit the default header list in place.
    pub fn configure_headers<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut Vec<(String, String)>),
    {
        configure(&mut self.config.default_headers);
        self
    }

    /// Set user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GraphQLClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphQLClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.default_headers.is_empty());
        assert!(config.user_agent.starts_with("gqlkit-client/"));
    }

    #[test]
    fn test_bearer_auth() {
        let config = GraphQLClientConfig::builder().bearer_auth("secret").build();
        assert_eq!(
            config.default_headers,
            vec![("Authorization".to_string(), "Bearer secret".to_string())]
        );
    }

    #[test]
    fn test_empty_bearer_token_is_ignored() {
        let config = GraphQLClientConfig::builder().bearer_auth("").build();
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_configure_headers() {
        let config = GraphQLClientConfig::builder()
            .header("X-Trace", "1")
            .header("X-Tenant", "acme")
            .configure_headers(|headers| headers.retain(|(name, _)| name != "X-Trace"))
            .build();

        assert_eq!(
            config.default_headers,
            vec![("X-Tenant".to_string(), "acme".to_string())]
        );
    }
}
