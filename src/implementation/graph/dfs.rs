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

//! This module provides the depth-first path search.

use bit_set::BitSet;
use tracing::trace;

use crate::{Digraph, Node, NodeId, Path, PathSearch, Result};

/// Depth-first search. The children of a node are explored in the order of
/// their edges, and a node never appears twice on the same path.
///
/// While exploring, the search remembers the shortest complete path found so
/// far. A child is only explored when the current partial path is strictly
/// shorter than that best path: extending a path which is already as long
/// as the best one cannot produce a shorter path.
#[derive(Debug, Default, Copy, Clone)]
pub struct DepthFirst;

impl PathSearch for DepthFirst {
    fn search(&self, graph: &Digraph, start: &Node, end: &Node) -> Result<Option<Path>> {
        let start = graph.id_of(start)?;
        let end   = graph.id_of(end)?;

        let mut walk = Walk {
            graph,
            end,
            path: vec![],
            on_path: BitSet::with_capacity(graph.nb_nodes()),
        };
        Ok(walk.explore(start, None).map(|ids| graph.path_of(&ids)))
    }
}

/// The state of one depth-first search: the partial path being extended.
struct Walk<'a> {
    graph: &'a Digraph,
    end: NodeId,
    path: Vec<NodeId>,
    on_path: BitSet,
}
impl Walk<'_> {
    /// Extends the current partial path with `node` and explores from there.
    /// It returns the shortest complete path known after the exploration:
    /// either a new one or the `shortest` which was known beforehand.
    fn explore(&mut self, node: NodeId, shortest: Option<Vec<NodeId>>) -> Option<Vec<NodeId>> {
        self.path.push(node);
        self.on_path.insert(node.id());
        trace!(path = %self.graph.path_of(&self.path), "current DFS path");

        let outcome = if node == self.end {
            Some(self.path.clone())
        } else {
            let graph = self.graph;
            let mut shortest = shortest;
            for child in graph.children_ids(node) {
                if self.on_path.contains(child.id()) {
                    trace!(node = %graph.node(*child), "already visited");
                    continue;
                }
                let promising = shortest.as_ref()
                    .map_or(true, |best| self.path.len() < best.len());
                if promising {
                    shortest = self.explore(*child, shortest);
                }
            }
            shortest
        };

        self.path.pop();
        self.on_path.remove(node.id());
        outcome
    }
}

/// Returns a path from `start` to `end`, if any, found with a depth-first
/// search.
pub fn find_path(graph: &Digraph, start: &Node, end: &Node) -> Result<Option<Path>> {
    DepthFirst.search(graph, start, end)
}
