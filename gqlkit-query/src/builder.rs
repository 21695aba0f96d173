//! Query document tree.
//!
//! Every node of a document lives in one arena owned by [`QueryBuilder`].
//! Nodes refer to each other by [`NodeId`]; the link to the root is a plain
//! index, so any handle into the tree can render the whole document.

use std::fmt;

use tracing::trace;

use crate::arguments::ArgumentsBuilder;
use crate::format::Formatting;
use crate::select::SelectBuilder;

const ROOT: NodeId = NodeId(0);

/// Stable index of a node inside its [`QueryBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One queried object: a name, its arguments, its selected fields and its
/// nested sub-queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNode {
    name: String,
    root: Option<NodeId>,
    nesting: usize,
    arguments: ArgumentsBuilder,
    select: SelectBuilder,
    children: Vec<NodeId>,
}

impl QueryNode {
    fn new(name: impl Into<String>, root: Option<NodeId>, nesting: usize) -> Self {
        Self {
            name: name.into(),
            root,
            nesting,
            arguments: ArgumentsBuilder::default(),
            select: SelectBuilder::default(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance from the root; drives indentation.
    pub fn nesting(&self) -> usize {
        self.nesting
    }

    pub fn is_root(&self) -> bool {
        self.root.is_none()
    }

    /// Root of the tree, `None` when this node is the root.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn arguments(&self) -> &ArgumentsBuilder {
        &self.arguments
    }

    pub fn selection(&self) -> &SelectBuilder {
        &self.select
    }
}

/// Builds a GraphQL query document.
///
/// The builder owns the root node and every node descended from it. Nodes
/// are only ever appended; building never mutates the tree and always
/// reflects its current state.
///
/// ```
/// use gqlkit_query::{Formatting, QueryBuilder};
///
/// let mut query = QueryBuilder::new("query").arguments(|args| {
///     args.var("X").int().required();
/// });
///
/// let last = query
///     .query("foo")
///     .arguments(|args| {
///         args.param("id", "$X");
///     })
///     .select(|select| {
///         select.field("bar");
///     });
///
/// assert_eq!(
///     last.build(Formatting::Compact),
///     "query($X:Int!) { foo(id:$X) { bar } }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    nodes: Vec<QueryNode>,
}

impl QueryBuilder {
    /// Start a document whose top-level block is named `name`, e.g.
    /// `"query"` or `"mutation"`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![QueryNode::new(name, None, 0)],
        }
    }

    /// Start a document with an unnamed top-level block.
    pub fn anonymous() -> Self {
        Self::new(String::new())
    }

    /// Configure the root's variables and arguments.
    pub fn arguments<F>(mut self, arguments: F) -> Self
    where
        F: FnOnce(&mut ArgumentsBuilder),
    {
        arguments(&mut self.nodes[ROOT.0].arguments);
        self
    }

    /// Configure the root's own field selection.
    pub fn select<F>(mut self, select: F) -> Self
    where
        F: FnOnce(&mut SelectBuilder),
    {
        select(&mut self.nodes[ROOT.0].select);
        self
    }

    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    /// Handle on the root node.
    pub fn root(&mut self) -> NodeBuilder<'_> {
        NodeBuilder {
            builder: self,
            id: ROOT,
        }
    }

    /// Handle on an existing node, `None` if `id` is not part of this tree.
    pub fn node(&mut self, id: NodeId) -> Option<NodeBuilder<'_>> {
        if id.0 < self.nodes.len() {
            Some(NodeBuilder { builder: self, id })
        } else {
            None
        }
    }

    /// Add a sub-query under the root and return a handle on it.
    pub fn query(&mut self, name: impl Into<String>) -> NodeBuilder<'_> {
        self.root().query(name)
    }

    pub fn get(&self, id: NodeId) -> Option<&QueryNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Render the whole document.
    pub fn build(&self, formatting: Formatting) -> String {
        self.build_from(ROOT, formatting)
    }

    /// Render starting from `id`. A non-root node defers to its root, so
    /// the result is always the full document. Unknown ids render from the
    /// root as well.
    pub fn build_from(&self, id: NodeId, formatting: Formatting) -> String {
        let Some(node) = self.nodes.get(id.0) else {
            return self.build_from(ROOT, formatting);
        };

        match node.root {
            Some(root) => self.build_from(root, formatting),
            None => {
                trace!(nodes = self.nodes.len(), ?formatting, "Building query document");
                self.render(id, formatting)
            }
        }
    }

    fn descend(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let (root, nesting) = {
            let parent_node = &self.nodes[parent.0];
            (parent_node.root.unwrap_or(parent), parent_node.nesting + 1)
        };

        let id = NodeId(self.nodes.len());
        self.nodes.push(QueryNode::new(name, Some(root), nesting));
        self.nodes[parent.0].children.push(id);
        id
    }

    // Walks the tree with an explicit stack; depth is bounded only by memory.
    fn render(&self, id: NodeId, formatting: Formatting) -> String {
        let new_line = formatting.separator();
        let mut out = String::new();
        let mut stack = vec![Frame::Open(id)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Open(id) => {
                    let node = &self.nodes[id.0];
                    out.push_str(&formatting.indent(node.nesting));
                    out.push_str(&node.name);
                    if !node.arguments.is_empty() {
                        out.push('(');
                        out.push_str(&node.arguments.build());
                        out.push(')');
                    }
                    out.push_str(" {");
                    out.push_str(new_line);

                    node.select.write_to(&mut out, node.nesting + 1, formatting);

                    // Fields and sub-queries share the block body.
                    if !node.select.is_empty() && !node.children.is_empty() {
                        out.push_str(new_line);
                    }

                    stack.push(Frame::Close(node.nesting));
                    for (i, child) in node.children.iter().enumerate().rev() {
                        stack.push(Frame::Open(*child));
                        if i > 0 {
                            stack.push(Frame::Separator);
                        }
                    }
                }
                Frame::Separator => out.push_str(new_line),
                Frame::Close(nesting) => {
                    out.push_str(new_line);
                    out.push_str(&formatting.indent(nesting));
                    out.push('}');
                }
            }
        }

        out
    }
}

enum Frame {
    Open(NodeId),
    Separator,
    Close(usize),
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build(Formatting::Compact))
    }
}

/// Mutable handle on one node of a [`QueryBuilder`].
///
/// `query` consumes the handle and returns one for the new child, so chained
/// calls walk deeper. To add siblings, keep the parent's [`NodeId`] and
/// reopen it with [`QueryBuilder::node`], or use [`NodeBuilder::branch`].
pub struct NodeBuilder<'a> {
    builder: &'a mut QueryBuilder,
    id: NodeId,
}

impl<'a> NodeBuilder<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &QueryNode {
        &self.builder.nodes[self.id.0]
    }

    pub fn nesting(&self) -> usize {
        self.node().nesting
    }

    /// Configure this node's variables and arguments.
    pub fn arguments<F>(self, arguments: F) -> Self
    where
        F: FnOnce(&mut ArgumentsBuilder),
    {
        let Self { builder, id } = self;
        arguments(&mut builder.nodes[id.0].arguments);
        Self { builder, id }
    }

    /// Configure this node's own field selection.
    pub fn select<F>(self, select: F) -> Self
    where
        F: FnOnce(&mut SelectBuilder),
    {
        let Self { builder, id } = self;
        select(&mut builder.nodes[id.0].select);
        Self { builder, id }
    }

    /// Append a sub-query to this node and return a handle on it.
    pub fn query(self, name: impl Into<String>) -> NodeBuilder<'a> {
        let Self { builder, id } = self;
        let child = builder.descend(id, name);
        NodeBuilder { builder, id: child }
    }

    /// Append a sub-query, let `configure` set it up, and keep the handle on
    /// this node so further calls add siblings.
    pub fn branch<F>(self, name: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(NodeBuilder<'_>),
    {
        let Self { builder, id } = self;
        let child = builder.descend(id, name);
        configure(NodeBuilder {
            builder: &mut *builder,
            id: child,
        });
        Self { builder, id }
    }

    /// Jump back to the root of the tree.
    pub fn root(self) -> NodeBuilder<'a> {
        let Self { builder, id } = self;
        let root = builder.nodes[id.0].root.unwrap_or(id);
        NodeBuilder { builder, id: root }
    }

    /// Render the whole document this node belongs to.
    pub fn build(&self, formatting: Formatting) -> String {
        self.builder.build_from(self.id, formatting)
    }
}

impl fmt::Debug for NodeBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeBuilder")
            .field("id", &self.id)
            .field("node", self.node())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LINE_ENDING;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_node() {
        let query = QueryBuilder::new("query");
        let root = query.get(query.root_id()).unwrap();

        assert!(root.is_root());
        assert_eq!(root.nesting(), 0);
        assert_eq!(root.name(), "query");
        assert_eq!(query.node_count(), 1);
    }

    #[test]
    fn test_empty_root_renders_empty_block() {
        assert_eq!(QueryBuilder::new("query").build(Formatting::Compact), "query {  }");
        assert_eq!(QueryBuilder::anonymous().build(Formatting::Compact), " {  }");
    }

    #[test]
    fn test_required_variable_and_bound_argument() {
        let mut query = QueryBuilder::new("query").arguments(|args| {
            args.var("X").int().required();
        });
        query
            .query("foo")
            .arguments(|args| {
                args.param("id", "$X");
            })
            .select(|select| {
                select.field("bar");
            });

        assert_eq!(
            query.build(Formatting::Compact),
            "query($X:Int!) { foo(id:$X) { bar } }"
        );
    }

    #[test]
    fn test_unnamed_root_with_empty_child() {
        let mut query = QueryBuilder::anonymous();
        query.query("ping");

        assert_eq!(query.build(Formatting::Compact), " { ping {  } }");
    }

    #[test]
    fn test_variables_then_arguments_on_root() {
        let query = QueryBuilder::new("items").arguments(|args| {
            args.var("A");
            args.var("B").int().required();
            args.param("limit", "10");
        });

        assert_eq!(
            query.build(Formatting::Compact),
            "items($A:String, $B:Int!, limit:10) {  }"
        );
    }

    #[test]
    fn test_descend_sets_depth_and_root() {
        let mut query = QueryBuilder::new("query");
        let deep = query.query("a").query("b").query("c");

        assert_eq!(deep.nesting(), 3);
        assert_eq!(deep.node().root(), Some(NodeId(0)));
        assert_eq!(deep.node().name(), "c");
    }

    #[test]
    fn test_siblings_share_depth() {
        let mut query = QueryBuilder::new("query");
        let parent = query.query("viewer").id();

        let first = query.node(parent).unwrap().query("repositories").id();
        let second = query.node(parent).unwrap().query("gists").id();

        assert_eq!(query.get(parent).unwrap().children(), &[first, second]);
        assert_eq!(query.get(first).unwrap().nesting(), 2);
        assert_eq!(query.get(second).unwrap().nesting(), 2);
        assert_eq!(
            query.build(Formatting::Compact),
            "query { viewer { repositories {  } gists {  } } }"
        );
    }

    #[test]
    fn test_branch_adds_siblings() {
        let mut query = QueryBuilder::new("query");
        query
            .query("viewer")
            .branch("repositories", |repos| {
                repos.select(|s| {
                    s.field("totalCount");
                });
            })
            .branch("gists", |gists| {
                gists
                    .arguments(|args| {
                        args.param("first", "5");
                    })
                    .select(|s| {
                        s.field("name");
                    });
            });

        assert_eq!(
            query.build(Formatting::Compact),
            "query { viewer { repositories { totalCount } gists(first:5) { name } } }"
        );
    }

    #[test]
    fn test_build_from_descendant_matches_root() {
        let mut query = QueryBuilder::new("query");
        let (leaf_text, leaf_id) = {
            let leaf = query
                .query("a")
                .select(|s| {
                    s.field("x");
                })
                .query("b");
            (leaf.build(Formatting::Indented), leaf.id())
        };

        assert_eq!(leaf_text, query.build(Formatting::Indented));
        assert_eq!(
            query.build_from(leaf_id, Formatting::Compact),
            query.build(Formatting::Compact)
        );
    }

    #[test]
    fn test_unknown_node_id() {
        let mut query = QueryBuilder::new("query");
        assert!(query.node(NodeId(7)).is_none());
        assert_eq!(
            query.build_from(NodeId(7), Formatting::Compact),
            query.build(Formatting::Compact)
        );
    }

    #[test]
    fn test_build_reflects_later_additions() {
        let mut query = QueryBuilder::new("query");
        query.query("a");
        let before = query.build(Formatting::Compact);
        assert_eq!(before, query.build(Formatting::Compact));

        query.query("b");
        assert_eq!(query.build(Formatting::Compact), "query { a {  } b {  } }");
        assert_ne!(before, query.build(Formatting::Compact));
    }

    #[test]
    fn test_fields_and_children_are_separated() {
        let mut query = QueryBuilder::new("query");
        query
            .query("user")
            .select(|s| {
                s.field("name");
            })
            .query("followers");

        assert_eq!(
            query.build(Formatting::Compact),
            "query { user { name followers {  } } }"
        );
    }

    #[test]
    fn test_indented_layout() {
        let mut query = QueryBuilder::new("query").select(|s| {
            s.field("version");
        });
        query.query("user").select(|s| {
            s.field("name");
        });

        let expected = [
            "query {",
            "    version",
            "    user {",
            "        name",
            "    }",
            "}",
        ]
        .join(LINE_ENDING);
        assert_eq!(query.build(Formatting::Indented), expected);
    }

    #[test]
    fn test_root_handle_from_deep_node() {
        let mut query = QueryBuilder::new("query");
        query.query("a").query("b").root().query("c");

        assert_eq!(
            query.build(Formatting::Compact),
            "query { a { b {  } } c {  } }"
        );
    }

    #[test]
    fn test_deep_chain_renders() {
        let depth = 10_000;
        let mut query = QueryBuilder::new("query");
        let mut id = query.root_id();
        for i in 0..depth {
            id = query.node(id).unwrap().query(format!("n{}", i)).id();
        }

        assert_eq!(query.get(id).unwrap().nesting(), depth);
        let out = query.build(Formatting::Compact);
        assert!(out.starts_with("query { n0 { n1 { n2 {"));
        assert!(out.contains(&format!("n{} {{  }}", depth - 1)));
        assert_eq!(out.matches('{').count(), depth + 1);
        assert_eq!(out.matches('}').count(), depth + 1);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_display_is_compact() {
        let mut query = QueryBuilder::new("query");
        query.query("ping");
        assert_eq!(query.to_string(), query.build(Formatting::Compact));
    }
}
