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

//! This module defines the error type shared by the whole library. Every
//! fallible operation (graph construction, node lookup, optimization with an
//! invalid budget, parsing of instance files, ...) reports its failure through
//! the `Error` enum below. Note that "there is no path" and "nothing fits in
//! the knapsack" are *not* errors: these are normal outcomes of a search.

/// The errors that may occur while building a problem instance or while
/// solving it. None of them is retried internally: they are always surfaced
/// to the direct caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node with the same name is already present in the graph
    #[error("duplicate node {0}")]
    DuplicateNode(String),
    /// An edge (or a query) references a node that is not part of the graph
    #[error("node not in graph {0}")]
    MissingNode(String),
    /// No node bears the requested name
    #[error("no node named {0}")]
    NameNotFound(String),
    /// Budgets must be finite and non negative
    #[error("invalid budget {0}")]
    InvalidBudget(f64),
    /// Item values and costs must be finite and non negative
    #[error("invalid item {0}")]
    InvalidItem(String),
    /// The exact result does not fit in the integer type used to hold it
    #[error("fib({0}) overflows a 128 bits unsigned integer")]
    Overflow(u32),
    /// The search was interrupted by its cutoff before it could complete
    #[error("search interrupted at depth {depth}")]
    CutoffOccurred { depth: usize },
    /// There was an io related error (instance file unavailable ?)
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// A pattern used to parse the instance files could not be compiled
    #[error("invalid pattern {0}")]
    Pattern(#[from] regex::Error),
    /// The instance file is ill formed
    #[error("ill formed instance (line {line}): {reason}")]
    Format { line: usize, reason: String },
}

/// Shorthand for the results of this crate.
pub type Result<T> = std::result::Result<T, Error>;
