//! # gqlkit Client
//!
//! HTTP transport for GraphQL documents built with `gqlkit-query`.
//!
//! ## Features
//!
//! - **Documents or strings**: send a [`QueryBuilder`] or any query text
//! - **Variables**: serialized next to the query under the `variables` key
//! - **Envelope parsing**: raw body, headers, `data` and `errors`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gqlkit_client::{GraphQLClient, GraphQLClientConfig};
//! use gqlkit_query::QueryBuilder;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Viewer {
//!     login: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct ViewerResponse {
//!     viewer: Viewer,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GraphQLClientConfig::builder()
//!         .endpoint("https://api.github.com/graphql")
//!         .bearer_auth(std::env::var("GITHUB_TOKEN")?)
//!         .build();
//!     let client = GraphQLClient::with_config(config)?;
//!
//!     let mut query = QueryBuilder::new("query");
//!     query.query("viewer").select(|s| {
//!         s.field("login");
//!     });
//!
//!     let response: ViewerResponse = client.document(&query).send().await?;
//!     println!("Logged in as {}", response.viewer.login);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::GraphQLClient;
pub use config::{GraphQLClientConfig, GraphQLClientConfigBuilder};
pub use error::{GraphQLError, Result};
pub use request::{GraphQLRequest, QueryRequest};
pub use response::{
    format_path, ErrorLocation, GraphQLResponse, GraphQLResponseError, PathSegment, QueryResult,
};

pub use gqlkit_query::QueryBuilder;

// Re-export common types
pub use serde_json::Value as JsonValue;
