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

//! This module reads the problem instances from plain text files. Two formats
//! are supported:
//!
//! * menus, where each non comment line describes one item as
//!   `name value cost` (e.g. `wine 89 123`),
//! * graphs, made of `node NAME` and `edge SRC DEST` declarations.
//!
//! In both formats, blank lines and lines starting with `#` are ignored and
//! names holding spaces must be double quoted (e.g. `node "New York"`).

use std::{fs::File, io::{BufRead, BufReader}, path::Path};

use regex::{Captures, Regex};

use crate::{Digraph, Edge, Error, GraphConfig, Item, Node, Result};

const NAME: &str = r#"("[^"]*"|[^\s"]+)"#;

/// Reads a menu from the given file.
pub fn read_menu<P: AsRef<Path>>(fname: P) -> Result<Vec<Item>> {
    let f = File::open(fname)?;
    parse_menu(BufReader::new(f))
}

/// Parses a menu out of the lines of some reader.
///
/// # Example
/// ```
/// # use exhaustive::io_utils::parse_menu;
/// let text = "# name value cost\nwine 89 123\n\"hot dog\" 90 190\n";
/// let menu = parse_menu(text.as_bytes()).unwrap();
/// assert_eq!(2, menu.len());
/// assert_eq!("hot dog", menu[1].name());
/// ```
pub fn parse_menu<R: BufRead>(reader: R) -> Result<Vec<Item>> {
    let comment = Regex::new(r"^#.*$")?;
    let item    = Regex::new(&format!(r"^{NAME}\s+(?P<value>\S+)\s+(?P<cost>\S+)$"))?;

    let mut menu = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let lnum = i + 1;

        if line.is_empty() || comment.is_match(line) {
            continue;
        }

        let caps = item.captures(line).ok_or_else(|| ill_formed(lnum, line))?;
        let value = number(&caps, "value", lnum)?;
        let cost  = number(&caps, "cost", lnum)?;
        let item  = Item::new(unquote(&caps[1]), value, cost)
            .map_err(|e| Error::Format { line: lnum, reason: e.to_string() })?;
        menu.push(item);
    }
    Ok(menu)
}

/// Reads a graph from the given file. Whether its edges are symmetric or
/// not is decided by the `config`, not by the file.
pub fn read_graph<P: AsRef<Path>>(fname: P, config: GraphConfig) -> Result<Digraph> {
    let f = File::open(fname)?;
    parse_graph(BufReader::new(f), config)
}

/// Parses a graph out of the lines of some reader. Nodes must be declared
/// before the edges that reference them.
///
/// # Example
/// ```
/// # use exhaustive::{io_utils::parse_graph, GraphConfig};
/// let text = "node a\nnode \"b c\"\nedge a \"b c\"\n";
/// let g = parse_graph(text.as_bytes(), GraphConfig::default()).unwrap();
/// assert_eq!(2, g.nb_nodes());
/// assert_eq!(1, g.nb_edges());
/// ```
pub fn parse_graph<R: BufRead>(reader: R, config: GraphConfig) -> Result<Digraph> {
    let comment   = Regex::new(r"^#.*$")?;
    let node_decl = Regex::new(&format!(r"^node\s+{NAME}$"))?;
    let edge_decl = Regex::new(&format!(r"^edge\s+{NAME}\s+{NAME}$"))?;

    let mut graph = Digraph::new(config);
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let lnum = i + 1;

        if line.is_empty() || comment.is_match(line) {
            continue;
        }

        let outcome = if let Some(caps) = node_decl.captures(line) {
            graph.add_node(Node::new(unquote(&caps[1]))).map(|_| ())
        } else if let Some(caps) = edge_decl.captures(line) {
            let src  = Node::new(unquote(&caps[1]));
            let dest = Node::new(unquote(&caps[2]));
            graph.add_edge(Edge::new(src, dest))
        } else {
            return Err(ill_formed(lnum, line));
        };
        outcome.map_err(|e| Error::Format { line: lnum, reason: e.to_string() })?;
    }
    Ok(graph)
}

fn number(caps: &Captures, group: &str, line: usize) -> Result<f64> {
    let text = &caps[group];
    text.parse::<f64>()
        .map_err(|_| Error::Format { line, reason: format!("{text} is not a number") })
}
fn unquote(name: &str) -> String {
    name.trim_matches('"').to_string()
}
fn ill_formed(line: usize, text: &str) -> Error {
    Error::Format { line, reason: format!("unexpected \"{text}\"") }
}
