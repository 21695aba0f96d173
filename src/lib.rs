// gqlkit - fluent GraphQL query documents for Rust
//
// This library builds GraphQL query documents as a tree of nested sub-queries
// and renders them compact or indented. The optional client sends them over
// HTTP.

// Re-export the query engine
pub use gqlkit_query::*;

// Re-export optional crates
#[cfg(feature = "client")]
pub use gqlkit_client;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ArgumentsBuilder, FieldBuilder, Formatting, NodeBuilder, NodeId, QueryBuilder,
        SelectBuilder, VariableBuilder, VariableType,
    };

    #[cfg(feature = "client")]
    pub use gqlkit_client::{
        GraphQLClient, GraphQLClientConfig, GraphQLError, GraphQLResponseError, QueryResult,
    };
}
