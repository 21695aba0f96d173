//! # gqlkit Query
//!
//! Fluent construction of GraphQL query documents.
//!
//! ## Features
//!
//! - **Nested sub-queries**: descend from any node, siblings or deeper
//! - **Variables and arguments**: typed `$name:Type!` declarations and raw
//!   `name:value` arguments
//! - **Field selections**: arbitrarily nested field blocks
//! - **Two layouts**: compact single-line output for the wire, or indented
//!   output for humans
//!
//! ## Quick Start
//!
//! ```rust
//! use gqlkit_query::{Formatting, QueryBuilder};
//!
//! let mut query = QueryBuilder::new("query").arguments(|args| {
//!     args.var("Org").string().required();
//!     args.var("Items").int().required();
//! });
//!
//! query
//!     .query("organization")
//!     .arguments(|args| {
//!         args.param("login", "$Org");
//!     })
//!     .query("repositories")
//!     .arguments(|args| {
//!         args.param("first", "$Items");
//!     })
//!     .select(|select| {
//!         select.field("totalCount");
//!         select.field("nodes").select(|nodes| {
//!             nodes.fields(["name", "url"]);
//!         });
//!     });
//!
//! assert_eq!(
//!     query.build(Formatting::Compact),
//!     "query($Org:String!, $Items:Int!) { organization(login:$Org) { \
//!      repositories(first:$Items) { totalCount nodes { name url } } } }"
//! );
//! ```
//!
//! The builder performs no validation: names and argument values are
//! written exactly as given.

mod arguments;
mod builder;
mod format;
mod select;
mod variable;

pub use arguments::ArgumentsBuilder;
pub use builder::{NodeBuilder, NodeId, QueryBuilder, QueryNode};
pub use format::{Formatting, INDENT_WIDTH, LINE_ENDING};
pub use select::{FieldBuilder, SelectBuilder};
pub use variable::{VariableBuilder, VariableType};
