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

//! The command line arguments of the demo executable.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use exhaustive::GreedyOrdering;

/// This structure uses `clap-derive` annotations and defines the arguments
/// that can be passed on to the demo executable.
#[derive(Parser, Debug)]
#[command(name = "exhaustive")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log the progress of the searches (debug level)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Explicit log filter (e.g. `trace` or `exhaustive=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Print the outcome as json rather than as plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick the most valuable meal that fits within a calories budget
    Knapsack(KnapsackArgs),
    /// Print the Fibonacci numbers fib(0) up to fib(N)
    Fib(FibArgs),
    /// Find a path between two nodes of a graph
    Path(PathArgs),
    /// Estimate the odds of rolling a given sequence of dice
    Dice(DiceArgs),
    /// Estimate the odds that several people share a birthday
    Birthday(BirthdayArgs),
}

#[derive(Args, Debug)]
pub struct KnapsackArgs {
    /// A menu file (one `name value cost` line per item). The default menu
    /// is used when none is given.
    #[arg(long, conflicts_with = "large")]
    pub menu: Option<PathBuf>,
    /// The maximum total cost of the selected items
    #[arg(short, long, default_value = "750")]
    pub budget: f64,
    /// Use a random menu with that many items instead
    #[arg(long)]
    pub large: Option<usize>,
    /// The maximum value of the items of a random menu
    #[arg(long, default_value = "90")]
    pub max_value: u32,
    /// The maximum cost of the items of a random menu
    #[arg(long, default_value = "250")]
    pub max_cost: u32,
    /// The seed of the random menu
    #[arg(long, default_value = "0")]
    pub seed: u64,
    /// Also run the greedy heuristics with all of their orderings
    #[arg(long)]
    pub greedy: bool,
    /// Also run the greedy heuristic, with this ordering only
    #[arg(long, value_enum, conflicts_with = "greedy")]
    pub ordering: Option<GreedyOrdering>,
    /// The maximum amount of time (seconds) the exact optimizer may run
    #[arg(short, long)]
    pub duration: Option<u64>,
}

#[derive(Args, Debug)]
pub struct FibArgs {
    /// The last Fibonacci number to compute
    #[arg(long, default_value = "10")]
    pub upto: u32,
    /// Do not memoize the intermediate results
    #[arg(long)]
    pub naive: bool,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// The name of the start node
    #[arg(long, default_value = "Boston")]
    pub from: String,
    /// The name of the destination node
    #[arg(long, default_value = "Phoenix")]
    pub to: String,
    /// A graph file (`node NAME` and `edge SRC DEST` lines). The city graph
    /// is used when none is given.
    #[arg(long)]
    pub graph: Option<PathBuf>,
    /// Make every edge walkable both ways
    #[arg(long)]
    pub undirected: bool,
    /// Use the depth first search instead of the breadth first one
    #[arg(long)]
    pub dfs: bool,
}

#[derive(Args, Debug)]
pub struct DiceArgs {
    /// The sequence of faces to roll (e.g. 11111)
    #[arg(long, default_value = "11111")]
    pub goal: String,
    /// The number of simulated attempts
    #[arg(long, default_value = "1000")]
    pub trials: usize,
    /// The seed of the simulation
    #[arg(long, default_value = "0")]
    pub seed: u64,
}

#[derive(Args, Debug)]
pub struct BirthdayArgs {
    /// The sizes of the groups of people to simulate
    #[arg(long, value_delimiter = ',', default_value = "10,20,40,100")]
    pub people: Vec<usize>,
    /// The number of people who must share the same birthday
    #[arg(long, default_value = "2")]
    pub same: usize,
    /// The number of simulated groups
    #[arg(long, default_value = "10000")]
    pub trials: usize,
    /// The seed of the simulation
    #[arg(long, default_value = "0")]
    pub seed: u64,
    /// Account for the birthdays not being evenly spread over the year
    #[arg(long)]
    pub non_uniform: bool,
}
