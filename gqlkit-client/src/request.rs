//! GraphQL request builders.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::{GraphQLClient, GraphQLError, QueryResult, Result};

/// GraphQL request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    /// The GraphQL query or mutation.
    pub query: String,
    /// Operation name (for documents with multiple operations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Variables for the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphQLRequest {
    /// Create a new request.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    /// Set the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Set variables.
    pub fn variables<T: Serialize>(mut self, variables: T) -> Result<Self> {
        self.variables = Some(serde_json::to_value(variables)?);
        Ok(self)
    }

    /// Set a single variable, turning the variables into an object if needed.
    pub fn variable(mut self, name: impl Into<String>, value: impl Serialize) -> Result<Self> {
        self.insert_variable(name, value)?;
        Ok(self)
    }

    /// In-place form of [`GraphQLRequest::variable`].
    pub fn insert_variable(&mut self, name: impl Into<String>, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let vars = self
            .variables
            .get_or_insert_with(|| Value::Object(Map::new()));
        if !vars.is_object() {
            *vars = Value::Object(Map::new());
        }
        if let Value::Object(map) = vars {
            map.insert(name.into(), value);
        }
        Ok(())
    }
}

/// A request being prepared against a [`GraphQLClient`].
///
/// Serialization failures of variables are kept and reported by `send`.
pub struct QueryRequest<'a> {
    client: &'a GraphQLClient,
    request: GraphQLRequest,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    error: Option<GraphQLError>,
}

impl<'a> QueryRequest<'a> {
    /// Create a new query request.
    pub(crate) fn new(client: &'a GraphQLClient, query: impl Into<String>) -> Self {
        Self {
            client,
            request: GraphQLRequest::new(query),
            timeout: None,
            headers: Vec::new(),
            error: None,
        }
    }

    /// Set the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.request.operation_name = Some(name.into());
        self
    }

    /// Set variables.
    pub fn variables<T: Serialize>(mut self, variables: T) -> Self {
        match serde_json::to_value(variables) {
            Ok(value) => self.request.variables = Some(value),
            Err(e) => self.error = Some(GraphQLError::Json(e)),
        }
        self
    }

    /// Set a single variable.
    pub fn variable(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        if let Err(e) = self.request.insert_variable(name, value) {
            self.error = Some(e);
        }
        self
    }

    /// Set a custom timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header for this request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// The payload that will be sent.
    pub fn request(&self) -> &GraphQLRequest {
        &self.request
    }

    /// Execute the request and return the parsed envelope.
    pub async fn send_raw(self) -> Result<QueryResult> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.client
            .execute_request(self.request, self.headers, self.timeout)
            .await
    }

    /// Execute the request and deserialize the `data` member.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send_raw().await?;
        response.into_result().and_then(|data| {
            serde_json::from_value(data).map_err(|e| GraphQLError::Parse(e.to_string()))
        })
    }
}
