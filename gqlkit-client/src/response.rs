//! GraphQL response types.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GraphQL response from the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQLResponse<T = Value> {
    /// The data returned by the query/mutation.
    #[serde(default)]
    pub data: Option<T>,
    /// Errors returned by the server.
    #[serde(default)]
    pub errors: Option<Vec<GraphQLResponseError>>,
    /// Extensions (for tracing, caching info, etc.).
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl<T> GraphQLResponse<T> {
    /// Check if the response has errors.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Get the data, returning an error if there are GraphQL errors.
    pub fn into_result(self) -> crate::Result<T> {
        if let Some(errors) = self.errors
            && !errors.is_empty() {
                return Err(crate::GraphQLError::GraphQL(errors));
            }
        self.data.ok_or_else(|| {
            crate::GraphQLError::Parse("Response contained no data".to_string())
        })
    }

    /// Get the errors.
    pub fn errors(&self) -> &[GraphQLResponseError] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// A GraphQL error from the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphQLResponseError {
    /// Error message.
    pub message: String,
    /// Locations in the query where the error occurred.
    #[serde(default)]
    pub locations: Option<Vec<ErrorLocation>>,
    /// Path to the field that caused the error.
    #[serde(default)]
    pub path: Option<Vec<PathSegment>>,
    /// Additional error extensions.
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl std::fmt::Display for GraphQLResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(locations) = &self.locations
            && !locations.is_empty() {
                write!(f, " at ")?;
                for (i, loc) in locations.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}:{}", loc.line, loc.column)?;
                }
            }
        Ok(())
    }
}

/// Location in the GraphQL query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorLocation {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

/// Path segment in a GraphQL error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Field name.
    Field(String),
    /// Array index.
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{}", name),
            Self::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Format a path as a string.
pub fn format_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// A completed request: the raw body, the response headers and the parsed
/// `{ "data": ..., "errors": [...] }` envelope.
#[derive(Debug, Clone)]
pub struct QueryResult {
    raw: String,
    headers: HashMap<String, String>,
    response: GraphQLResponse<Value>,
}

impl QueryResult {
    /// Parse a response body. Header names are stored lowercased.
    pub fn from_raw(raw: impl Into<String>, headers: HashMap<String, String>) -> crate::Result<Self> {
        let raw = raw.into();
        let response = serde_json::from_str(&raw)?;
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();

        Ok(Self {
            raw,
            headers,
            response,
        })
    }

    /// The body exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Look up a response header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `data` member, if present and not null.
    pub fn data(&self) -> Option<&Value> {
        self.response.data.as_ref().filter(|data| !data.is_null())
    }

    /// Deserialize the `data` member. `Ok(None)` when there is no data.
    pub fn data_as<T: DeserializeOwned>(&self) -> crate::Result<Option<T>> {
        match self.data() {
            Some(data) => Ok(Some(T::deserialize(data)?)),
            None => Ok(None),
        }
    }

    pub fn errors(&self) -> &[GraphQLResponseError] {
        self.response.errors()
    }

    pub fn has_errors(&self) -> bool {
        self.response.has_errors()
    }

    pub fn response(&self) -> &GraphQLResponse<Value> {
        &self.response
    }

    /// Get the data, returning an error if there are GraphQL errors.
    pub fn into_result(self) -> crate::Result<Value> {
        self.response.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Viewer {
        login: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct ViewerData {
        viewer: Viewer,
    }

    #[test]
    fn test_data_as() {
        let raw = json!({ "data": { "viewer": { "login": "octocat" } } }).to_string();
        let result = QueryResult::from_raw(raw.clone(), HashMap::new()).unwrap();

        assert!(!result.has_errors());
        assert!(result.errors().is_empty());
        assert_eq!(result.raw(), raw);
        assert_eq!(
            result.data_as::<ViewerData>().unwrap(),
            Some(ViewerData {
                viewer: Viewer {
                    login: "octocat".to_string()
                }
            })
        );
    }

    #[test]
    fn test_errors_without_data() {
        let raw = r#"{
            "data": null,
            "errors": [
                { "message": "Bad field", "locations": [{ "line": 1, "column": 9 }], "path": ["viewer", 0] }
            ]
        }"#;
        let result = QueryResult::from_raw(raw, HashMap::new()).unwrap();

        assert!(result.has_errors());
        assert!(result.data().is_none());
        assert_eq!(result.data_as::<ViewerData>().unwrap(), None);

        let error = &result.errors()[0];
        assert_eq!(error.to_string(), "Bad field at 1:9");
        assert_eq!(format_path(error.path.as_deref().unwrap()), "viewer.[0]");

        let err = result.into_result().unwrap_err();
        assert!(err.is_graphql_error());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let headers = HashMap::from([("Content-Type".to_string(), "application/json".to_string())]);
        let result = QueryResult::from_raw("{}", headers).unwrap();

        assert_eq!(result.header("content-type"), Some("application/json"));
        assert_eq!(result.header("CONTENT-TYPE"), Some("application/json"));
        assert!(result.data().is_none());
    }

    #[test]
    fn test_invalid_json() {
        let err = QueryResult::from_raw("<html>", HashMap::new()).unwrap_err();
        assert!(matches!(err, crate::GraphQLError::Json(_)));
    }

    #[test]
    fn test_into_result_without_data() {
        let response: GraphQLResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_result(),
            Err(crate::GraphQLError::Parse(_))
        ));
    }
}
