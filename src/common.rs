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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::fmt;

use serde::Serialize;

use crate::{Error, Result};

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item that may be put in the knapsack. Each item brings some `value`
/// and consumes some amount of the resource being allocated (its `cost`, e.g.
/// the calories of some food).
///
/// Items are identified by their position in the sequence given to the
/// optimizer, not by their name: two items may perfectly share a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name : String,
    value: f64,
    cost : f64,
}
impl Item {
    /// Creates a new item. The value must be finite and non negative while the
    /// cost must be finite and strictly positive.
    ///
    /// # Examples:
    /// ```
    /// # use exhaustive::Item;
    /// let wine = Item::new("wine", 89.0, 123.0).unwrap();
    /// assert_eq!("wine: <89, 123>", wine.to_string());
    /// assert!(Item::new("void", 1.0, -1.0).is_err());
    /// assert!(Item::new("free", 1.0, 0.0).is_err());
    /// ```
    pub fn new<S: Into<String>>(name: S, value: f64, cost: f64) -> Result<Self> {
        let name = name.into();
        let valid_value = value.is_finite() && value >= 0.0;
        let valid_cost  = cost.is_finite() && cost > 0.0;
        if valid_value && valid_cost {
            Ok(Item { name, value, cost })
        } else {
            Err(Error::InvalidItem(format!("{name}: <{value}, {cost}>")))
        }
    }
    /// Creates an item whose attributes are known to be valid
    pub(crate) fn new_unchecked(name: String, value: f64, cost: f64) -> Self {
        Item { name, value, cost }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn cost(&self) -> f64 {
        self.cost
    }
    /// The value brought per unit of cost
    pub fn density(&self) -> f64 {
        self.value / self.cost
    }
}
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: <{}, {}>", self.name, self.value, self.cost)
    }
}

// ----------------------------------------------------------------------------
// --- SEARCH RESULT ----------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a knapsack optimization: the best total value that could be
/// achieved along with the items that were taken to achieve it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchResult {
    /// The total value of the taken items
    pub value: f64,
    /// The items that were put in the knapsack
    pub taken: Vec<Item>,
}
impl SearchResult {
    /// The total amount of resource consumed by the taken items
    pub fn total_cost(&self) -> f64 {
        self.taken.iter().map(Item::cost).sum()
    }
}

// ----------------------------------------------------------------------------
// --- NODE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A node of a graph. Nodes are uniquely identified by their name: equality,
/// hashing and ordering are all defined on the name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Node {
    name: String,
}
impl Node {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Node { name: name.into() }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The identifier of a node: it indicates the position of the referenced node
/// in the 'nodes' vector of the graph that owns it. Only a graph issues
/// identifiers (see `Digraph::add_node` and `Digraph::id_of`).
///
/// ```compile_fail
/// let forged = exhaustive::NodeId(42);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) usize);
impl NodeId {
    #[inline]
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- EDGE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A directed edge going from `src` to `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub src : Node,
    pub dest: Node,
}
impl Edge {
    pub fn new(src: Node, dest: Node) -> Self {
        Edge { src, dest }
    }
    /// The same edge, walked the other way round
    pub fn reversed(&self) -> Self {
        Edge { src: self.dest.clone(), dest: self.src.clone() }
    }
}
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.src, self.dest)
    }
}

// ----------------------------------------------------------------------------
// --- PATH -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A sequence of nodes where each node is a child of its predecessor. The
/// searches only ever produce acyclic paths: no node appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(pub Vec<Node>);
impl Path {
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }
    /// The length of the path expressed as a number of edges
    ///
    /// # Examples:
    /// ```
    /// # use exhaustive::{Node, Path};
    /// let p = Path(vec![Node::new("a"), Node::new("b"), Node::new("c")]);
    /// assert_eq!(2, p.edge_count());
    /// assert_eq!("a->b->c", p.to_string());
    /// ```
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod test_graph_types {
    use crate::{Edge, Node, NodeId, Path};

    #[test]
    fn nodes_are_compared_by_name() {
        assert_eq!(Node::new("Boston"), Node::new("Boston"));
        assert!(Node::new("Boston") < Node::new("Chicago"));
    }
    #[test]
    fn edge_display() {
        let e = Edge::new(Node::new("Boston"), Node::new("Providence"));
        assert_eq!("Boston->Providence", e.to_string());
        assert_eq!("Providence->Boston", e.reversed().to_string());
    }
    #[test]
    fn single_node_path_has_no_edge() {
        let p = Path(vec![Node::new("Boston")]);
        assert_eq!(0, p.edge_count());
        assert_eq!("Boston", p.to_string());
        assert_eq!(0, Path(vec![]).edge_count());
    }
    #[test]
    fn test_node_id() {
        assert_eq!(0, NodeId(0).id());
        assert_eq!(3, NodeId(3).id());
    }
}
