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

//! # Exhaustive
//! Exhaustive is a small library of textbook exhaustive search algorithms. It
//! solves the 0/1 knapsack problem exactly (memoized "decision tree" search)
//! or approximately (greedy selection), computes Fibonacci numbers with and
//! without memoization and finds paths in directed or undirected graphs with
//! a breadth first or a depth first search. It also comes with the Monte Carlo
//! simulations (dice, birthdays) that usually accompany these algorithms.
//!
//! ## Quick Example
//! The following picks the best meal one can have without exceeding a given
//! number of calories. The exact optimizer always does at least as well as
//! any of the greedy orderings.
//!
//! ```
//! # use exhaustive::*;
//! let names  = ["wine", "beer", "pizza", "burger", "fries", "cola", "apple", "donut"];
//! let values = [89.0, 90.0, 95.0, 100.0, 90.0, 79.0, 50.0, 10.0];
//! let costs  = [123.0, 154.0, 258.0, 354.0, 365.0, 150.0, 95.0, 195.0];
//! let menu   = build_menu(&names, &values, &costs).unwrap();
//!
//! let best = optimize(&menu, 750.0).unwrap();
//! assert_eq!(353.0, best.value);
//! assert!(best.total_cost() <= 750.0);
//!
//! for ordering in GreedyOrdering::ALL {
//!     let approx = greedy(&menu, 750.0, &ordering).unwrap();
//!     assert!(approx.value <= best.value);
//! }
//! ```
//!
//! ## Describe your own recurrence
//! Both the knapsack optimizer and `fib` are instances of a `Recurrence`
//! solved by a `MemoSolver`. Plugging your own recurrence is all it takes to
//! get it memoized.
//!
//! ```
//! # use exhaustive::*;
//! // The number of ways to climb n stairs one or two steps at a time
//! struct Stairs;
//! impl Recurrence for Stairs {
//!     type State = u64;
//!     type Value = u64;
//!
//!     fn base_case(&self, n: &u64) -> Option<u64> {
//!         if *n < 2 { Some(1) } else { None }
//!     }
//!     fn recur(&self, n: &u64, solve: &mut dyn SubproblemCallback<u64, u64>) -> Result<u64> {
//!         Ok(solve.solve(n - 1)? + solve.solve(n - 2)?)
//!     }
//! }
//!
//! let mut solver = MemoSolver::new(&Stairs, SimpleMemo::new(), &NoCutoff);
//! assert_eq!(89, solver.solve(10).unwrap());
//! assert_eq!(9, solver.stats().misses);
//! ```
//!
//! ## Paths
//! ```
//! # use exhaustive::*;
//! let graph  = city_graph(GraphConfig::default()).unwrap();
//! let boston = graph.node_by_name("Boston").unwrap();
//! let phoenix = graph.node_by_name("Phoenix").unwrap();
//!
//! let bfs = shortest_path(&graph, boston, phoenix).unwrap().unwrap();
//! let dfs = find_path(&graph, boston, phoenix).unwrap().unwrap();
//! assert_eq!("Boston->New York->Chicago->Phoenix", bfs.to_string());
//! assert_eq!(bfs.edge_count(), dfs.edge_count());
//! ```

mod common;
mod error;
mod abstraction;
mod implementation;
mod builders;

pub mod sim;
pub mod io_utils;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;
pub use builders::*;
