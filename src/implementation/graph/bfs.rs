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

//! This module provides the breadth-first path search.

use std::collections::VecDeque;

use tracing::trace;

use crate::{Digraph, Node, Path, PathSearch, Result};

/// Breadth-first search. Partial paths are explored in FIFO order, hence by
/// non decreasing length: the first complete path to be dequeued is a
/// shortest one (in number of edges).
#[derive(Debug, Default, Copy, Clone)]
pub struct BreadthFirst;

impl PathSearch for BreadthFirst {
    fn search(&self, graph: &Digraph, start: &Node, end: &Node) -> Result<Option<Path>> {
        let start = graph.id_of(start)?;
        let end   = graph.id_of(end)?;

        let mut queue = VecDeque::new();
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            trace!(path = %graph.path_of(&path), queued = queue.len(), "current BFS path");

            let last = path[path.len() - 1];
            if last == end {
                return Ok(Some(graph.path_of(&path)));
            }
            for child in graph.children_ids(last) {
                if !path.contains(child) {
                    let mut next = path.clone();
                    next.push(*child);
                    queue.push_back(next);
                }
            }
        }
        Ok(None)
    }
}

/// Returns a shortest path (fewest edges) from `start` to `end`, if any.
///
/// # Example
/// ```
/// # use exhaustive::*;
/// let graph = city_graph(GraphConfig::default()).unwrap();
/// let boston  = graph.node_by_name("Boston").unwrap();
/// let phoenix = graph.node_by_name("Phoenix").unwrap();
///
/// let path = shortest_path(&graph, boston, phoenix).unwrap().unwrap();
/// assert_eq!("Boston->New York->Chicago->Phoenix", path.to_string());
/// assert_eq!(None, shortest_path(&graph, phoenix, boston).unwrap());
/// ```
pub fn shortest_path(graph: &Digraph, start: &Node, end: &Node) -> Result<Option<Path>> {
    BreadthFirst.search(graph, start, end)
}
