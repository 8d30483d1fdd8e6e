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

//! This module provides the builders of the datasets the demos run on: the
//! menus of the knapsack problem and the graph of the path searches.

use rand::Rng;

use crate::{Digraph, Edge, Error, GraphConfig, Item, Node, Result};

/// Builds a menu out of the given names, values and costs. Values and costs
/// must come in equal numbers; superfluous names are ignored.
///
/// # Example
/// ```
/// # use exhaustive::*;
/// let menu = build_menu(&["wine", "beer", "cake"], &[89.0, 90.0], &[123.0, 154.0]).unwrap();
/// assert_eq!(2, menu.len());
/// assert_eq!("beer: <90, 154>", menu[1].to_string());
/// ```
pub fn build_menu<S: AsRef<str>>(names: &[S], values: &[f64], costs: &[f64]) -> Result<Vec<Item>> {
    if values.len() != costs.len() || names.len() < values.len() {
        return Err(Error::InvalidItem(format!(
            "{} names, {} values and {} costs", names.len(), values.len(), costs.len())));
    }
    names.iter().zip(values).zip(costs)
        .map(|((name, value), cost)| Item::new(name.as_ref(), *value, *cost))
        .collect()
}

/// Builds a random menu of `n` items named "1" to "n". Values and costs are
/// integers drawn uniformly from `1..=max_value` and `1..=max_cost`.
pub fn build_large_menu<R: Rng>(n: usize, max_value: u32, max_cost: u32, rng: &mut R) -> Vec<Item> {
    (1..=n)
        .map(|i| {
            let value = rng.random_range(1..=max_value.max(1));
            let cost  = rng.random_range(1..=max_cost.max(1));
            Item::new_unchecked(i.to_string(), value as f64, cost as f64)
        })
        .collect()
}

/// The cities of the path search demo
pub const CITIES: [&str; 7] = [
    "Boston", "Providence", "New York", "Chicago", "Denver", "Phoenix", "Los Angeles",
];

/// The flights between the cities of the path search demo
pub const FLIGHTS: [(&str, &str); 10] = [
    ("Boston",      "Providence"),
    ("Boston",      "New York"),
    ("Providence",  "Boston"),
    ("Providence",  "New York"),
    ("New York",    "Chicago"),
    ("Chicago",     "Denver"),
    ("Chicago",     "Phoenix"),
    ("Denver",      "Phoenix"),
    ("Denver",      "New York"),
    ("Los Angeles", "Boston"),
];

/// Builds the graph of the flights between seven US cities.
pub fn city_graph(config: GraphConfig) -> Result<Digraph> {
    let mut graph = Digraph::new(config);
    for city in CITIES {
        graph.add_node(Node::new(city))?;
    }
    for (src, dest) in FLIGHTS {
        let edge = Edge::new(graph.node_by_name(src)?.clone(), graph.node_by_name(dest)?.clone());
        graph.add_edge(edge)?;
    }
    Ok(graph)
}
