// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the graph data structure. A graph is always made of
//! directed edges. An undirected graph is simply a graph configured to be
//! *symmetric*: each time an edge is added, the reverse edge gets added too.

use std::fmt;

use derive_builder::Builder;
use fxhash::FxHashMap;

use crate::{Edge, Error, Node, NodeId, Path, Result};

/// This is how you configure a graph.
///
/// # Example
/// ```
/// # use exhaustive::*;
/// let config = GraphConfigBuilder::default()
///     .symmetric(true)
///     .build()
///     .unwrap();
/// assert!(Digraph::new(config).is_symmetric());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct GraphConfig {
    /// This flag must be true if you want each edge to be walkable both ways
    /// (undirected graph). It is false by default (directed graph).
    #[builder(default = "false")]
    pub symmetric: bool,
}

/// A graph which maps each node onto the (ordered) sequence of its children.
/// Adding the same edge twice makes the destination appear twice among the
/// children of the source.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    config: GraphConfig,
    /// All the nodes of the graph, in insertion order
    nodes: Vec<Node>,
    /// The position of each node in `nodes`
    ids: FxHashMap<Node, NodeId>,
    /// The children of each node, in insertion order
    children: Vec<Vec<NodeId>>,
}

impl Digraph {
    pub fn new(config: GraphConfig) -> Self {
        Digraph { config, ..Default::default() }
    }
    /// Creates an empty graph whose edges are one-way only
    pub fn directed() -> Self {
        Self::new(GraphConfig { symmetric: false })
    }
    /// Creates an empty graph where every edge is walkable both ways
    pub fn undirected() -> Self {
        Self::new(GraphConfig { symmetric: true })
    }
    pub fn config(&self) -> GraphConfig {
        self.config
    }
    pub fn is_symmetric(&self) -> bool {
        self.config.symmetric
    }

    /// Adds a node to the graph. It fails with `Error::DuplicateNode` when the
    /// graph already comprises a node with the same name.
    pub fn add_node(&mut self, node: Node) -> Result<NodeId> {
        if self.ids.contains_key(&node) {
            return Err(Error::DuplicateNode(node.name().to_string()));
        }
        let id = NodeId(self.nodes.len());
        self.ids.insert(node.clone(), id);
        self.nodes.push(node);
        self.children.push(vec![]);
        Ok(id)
    }

    /// Adds an edge to the graph. It fails with `Error::MissingNode` unless
    /// both ends of the edge are already part of the graph. When the graph
    /// is symmetric, the reverse edge is added as well.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.add_directed_edge(&edge)?;
        if self.is_symmetric() {
            self.add_directed_edge(&edge.reversed())?;
        }
        Ok(())
    }
    fn add_directed_edge(&mut self, edge: &Edge) -> Result<()> {
        let src  = self.id_of(&edge.src)?;
        let dest = self.id_of(&edge.dest)?;
        self.children[src.id()].push(dest);
        Ok(())
    }

    /// Returns the children of the given node in the order the edges were
    /// added. It fails with `Error::MissingNode` if the node is absent.
    pub fn children_of(&self, node: &Node) -> Result<Vec<&Node>> {
        let id = self.id_of(node)?;
        Ok(self.children_ids(id).iter().map(|c| self.node(*c)).collect())
    }

    /// Returns the first node bearing the given name, or fails with
    /// `Error::NameNotFound`.
    pub fn node_by_name(&self, name: &str) -> Result<&Node> {
        self.nodes.iter()
            .find(|n| n.name() == name)
            .ok_or_else(|| Error::NameNotFound(name.to_string()))
    }

    pub fn has_node(&self, node: &Node) -> bool {
        self.ids.contains_key(node)
    }
    /// The identifier of the given node, `Error::MissingNode` if it is absent
    pub fn id_of(&self, node: &Node) -> Result<NodeId> {
        self.ids.get(node)
            .copied()
            .ok_or_else(|| Error::MissingNode(node.name().to_string()))
    }
    /// The node having the given identifier.
    ///
    /// # Panics
    /// If the identifier was not issued by this graph.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.id()]
    }
    /// The identifiers of the children of the given node
    pub(crate) fn children_ids(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.id()]
    }
    /// Turns a sequence of identifiers into a path
    pub(crate) fn path_of(&self, ids: &[NodeId]) -> Path {
        Path(ids.iter().map(|id| self.node(*id).clone()).collect())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn nb_nodes(&self) -> usize {
        self.nodes.len()
    }
    /// The number of directed edges (an undirected edge counts twice)
    pub fn nb_edges(&self) -> usize {
        self.children.iter().map(Vec::len).sum()
    }
}

/// One `src->dest` line per edge, the sources being sorted by name.
impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sources: Vec<NodeId> = (0..self.nodes.len()).map(NodeId).collect();
        sources.sort_unstable_by(|a, b| self.node(*a).cmp(self.node(*b)));

        for src in sources {
            for dest in self.children_ids(src) {
                writeln!(f, "{}->{}", self.node(src), self.node(*dest))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_digraph {
    use crate::*;

    fn node(name: &str) -> Node {
        Node::new(name)
    }
    fn edge(src: &str, dest: &str) -> Edge {
        Edge::new(node(src), node(dest))
    }
    fn names<'a>(nodes: Vec<&'a Node>) -> Vec<&'a str> {
        nodes.into_iter().map(Node::name).collect()
    }

    #[test]
    fn issued_ids_lead_back_to_their_node() {
        let mut g = Digraph::directed();
        let a = g.add_node(node("a")).unwrap();
        let b = g.add_node(node("b")).unwrap();
        g.add_edge(edge("a", "b")).unwrap();
        assert_eq!(a, g.id_of(&node("a")).unwrap());
        assert_eq!(&node("b"), g.node(b));
        assert_eq!(&[b], g.children_ids(a));
        assert_eq!("a->b", g.path_of(&[a, b]).to_string());
    }
    #[test]
    fn nodes_are_added_with_no_children() {
        let mut g = Digraph::directed();
        let id = g.add_node(node("a")).unwrap();
        assert_eq!(NodeId(0), id);
        assert!(g.has_node(&node("a")));
        assert!(g.children_of(&node("a")).unwrap().is_empty());
        assert_eq!(1, g.nb_nodes());
        assert_eq!(0, g.nb_edges());
    }
    #[test]
    fn adding_a_node_twice_fails() {
        let mut g = Digraph::directed();
        g.add_node(node("a")).unwrap();
        assert!(matches!(g.add_node(node("a")), Err(Error::DuplicateNode(n)) if n == "a"));
        assert_eq!(1, g.nb_nodes());
    }
    #[test]
    fn an_edge_needs_both_ends_in_the_graph() {
        let mut g = Digraph::directed();
        g.add_node(node("a")).unwrap();
        assert!(matches!(g.add_edge(edge("a", "b")), Err(Error::MissingNode(n)) if n == "b"));
        assert!(matches!(g.add_edge(edge("b", "a")), Err(Error::MissingNode(n)) if n == "b"));
        assert_eq!(0, g.nb_edges());
    }
    #[test]
    fn children_keep_the_insertion_order_and_duplicates() {
        let mut g = Digraph::directed();
        for n in ["a", "b", "c"] {
            g.add_node(node(n)).unwrap();
        }
        g.add_edge(edge("a", "c")).unwrap();
        g.add_edge(edge("a", "b")).unwrap();
        g.add_edge(edge("a", "c")).unwrap();
        assert_eq!(vec!["c", "b", "c"], names(g.children_of(&node("a")).unwrap()));
        assert!(g.children_of(&node("c")).unwrap().is_empty());
    }
    #[test]
    fn children_of_an_unknown_node_fails() {
        let g = Digraph::directed();
        assert!(matches!(g.children_of(&node("x")), Err(Error::MissingNode(_))));
    }
    #[test]
    fn symmetric_graphs_add_the_reverse_edge() {
        let mut g = Digraph::undirected();
        g.add_node(node("a")).unwrap();
        g.add_node(node("b")).unwrap();
        g.add_edge(edge("a", "b")).unwrap();
        assert_eq!(vec!["b"], names(g.children_of(&node("a")).unwrap()));
        assert_eq!(vec!["a"], names(g.children_of(&node("b")).unwrap()));
        assert_eq!(2, g.nb_edges());
    }
    #[test]
    fn nodes_are_found_by_name() {
        let mut g = Digraph::directed();
        g.add_node(node("Boston")).unwrap();
        assert_eq!(&node("Boston"), g.node_by_name("Boston").unwrap());
        assert!(matches!(g.node_by_name("Paris"), Err(Error::NameNotFound(n)) if n == "Paris"));
    }
    #[test]
    fn the_builder_defaults_to_a_directed_graph() {
        let config = GraphConfigBuilder::default().build().unwrap();
        assert_eq!(GraphConfig { symmetric: false }, config);
    }
    #[test]
    fn display_lists_edges_sorted_by_source() {
        let mut g = Digraph::directed();
        for n in ["b", "a"] {
            g.add_node(node(n)).unwrap();
        }
        g.add_edge(edge("b", "a")).unwrap();
        g.add_edge(edge("a", "b")).unwrap();
        assert_eq!("a->b\nb->a\n", g.to_string());
    }
}
