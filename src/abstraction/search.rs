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

//! This module defines the `PathSearch` abstraction, which is implemented by
//! the traversal strategies able to find a path between two nodes of a graph.

use crate::{Digraph, Node, Path, Result};

/// A strategy to find a path from `start` to `end` in some graph.
pub trait PathSearch {
    /// Looks for a path going from `start` to `end`.
    ///
    /// Not finding any path is a normal outcome (`Ok(None)`). However, asking
    /// for a path between nodes that are not part of the graph is an error
    /// (`Error::MissingNode`).
    fn search(&self, graph: &Digraph, start: &Node, end: &Node) -> Result<Option<Path>>;
}
