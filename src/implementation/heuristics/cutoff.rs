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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to tune the behavior of a memo solver.

use std::time::{Duration, Instant};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the search goes
/// on until the optimum is known.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self, _: usize) -> bool {false}
}

/// This cutoff bounds the depth of the recursion. It interrupts the search as
/// soon as it would need to expand a subproblem lying deeper than the given
/// limit in the search tree.
///
/// # Example
/// ```
/// # use exhaustive::*;
/// let guard = DepthLimit(2);
/// assert!(!guard.must_stop(2));
/// assert!( guard.must_stop(3));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DepthLimit(pub usize);
impl Cutoff for DepthLimit {
    fn must_stop(&self, depth: usize) -> bool {
        depth > self.0
    }
}

/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the time budget is elapsed, the search is interrupted.
///
/// # Example
/// ```
/// # use exhaustive::*;
/// use std::time::Duration;
///
/// let budget = TimeBudget::new(Duration::from_secs(10));
/// assert!(!budget.must_stop(0)); // for the next ten seconds at least
///
/// let elapsed = TimeBudget::new(Duration::ZERO);
/// assert!(elapsed.must_stop(0));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct TimeBudget {
    deadline: Instant,
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        TimeBudget { deadline: Instant::now() + budget }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self, _: usize) -> bool {
        Instant::now() >= self.deadline
    }
}
