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

//! This module provides the implementation of the exhaustive search solver.
//! That is a solver which explores the complete search tree of a recurrence
//! while memoizing the value of each subproblem it solves. Whenever the same
//! subproblem is met again along another branch of the tree, its value is
//! simply looked up instead of being recomputed.
//!
//! Plugging an `EmptyMemo` into this solver yields the plain exhaustive search
//! (exponential in the depth of the search tree).

use serde::Serialize;
use tracing::debug;

use crate::{Cutoff, Error, Memo, Recurrence, Result};

/// A few counters describing the work done by the last resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolverStats {
    /// The number of subproblems whose value was found in the memo
    pub hits: usize,
    /// The number of subproblems which had to be expanded
    pub misses: usize,
    /// The maximum depth reached by the recursion
    pub max_depth: usize,
}

pub struct MemoSolver<'a, R, M>
where
    R: Recurrence,
    M: Memo<R::State, R::Value>,
{
    /// A reference to the problem being solved
    problem: &'a R,
    /// The table remembering the value of the subproblems solved so far.
    ///
    /// # Note:
    /// The memo is cleared at the beginning of each call to `solve`: nothing
    /// survives from one resolution to the next.
    memo: M,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// The depth of the subproblem currently being expanded
    depth: usize,
    /// The counters of the last resolution
    stats: SolverStats,
}

impl<'a, R, M> MemoSolver<'a, R, M>
where
    R: Recurrence,
    M: Memo<R::State, R::Value>,
{
    pub fn new(problem: &'a R, memo: M, cutoff: &'a dyn Cutoff) -> Self {
        MemoSolver {
            problem,
            memo,
            cutoff,
            depth: 0,
            stats: SolverStats::default(),
        }
    }

    /// Computes the value of the `root` subproblem.
    ///
    /// The only error which can be raised by the solver itself is
    /// `Error::CutoffOccurred`. Any other error originates from the problem.
    pub fn solve(&mut self, root: R::State) -> Result<R::Value> {
        self.memo.clear();
        self.stats = SolverStats::default();
        self.depth = 0;

        let outcome = self.explore(root);

        debug!(
            hits      = self.stats.hits,
            misses    = self.stats.misses,
            max_depth = self.stats.max_depth,
            memoized  = self.memo.len(),
            "memo solver done"
        );
        outcome
    }

    /// The counters of the last resolution
    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    fn explore(&mut self, state: R::State) -> Result<R::Value> {
        if let Some(value) = self.problem.base_case(&state) {
            return Ok(value);
        }
        if let Some(value) = self.memo.get(&state) {
            self.stats.hits += 1;
            return Ok(value.clone());
        }
        self.stats.misses += 1;

        if self.cutoff.must_stop(self.depth) {
            return Err(Error::CutoffOccurred { depth: self.depth });
        }

        self.depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        let problem = self.problem;
        let outcome = problem.recur(&state, &mut |sub| self.explore(sub));
        self.depth -= 1;

        let value = outcome?;
        self.memo.insert(state, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod test_memo_solver {
    use crate::*;

    /// Counts the number of ways to climb `n` stairs taking one or two steps
    /// at a time.
    struct Stairs;
    impl Recurrence for Stairs {
        type State = usize;
        type Value = usize;

        fn base_case(&self, n: &usize) -> Option<usize> {
            if *n <= 1 { Some(1) } else { None }
        }
        fn recur(&self, n: &usize, solve: &mut dyn SubproblemCallback<usize, usize>) -> Result<usize> {
            Ok(solve.solve(n - 1)? + solve.solve(n - 2)?)
        }
    }

    #[test]
    fn it_solves_the_recurrence() {
        let mut solver = MemoSolver::new(&Stairs, SimpleMemo::new(), &NoCutoff);
        assert_eq!(Ok(89), solver.solve(10).map_err(|e| e.to_string()));
    }
    #[test]
    fn each_subproblem_is_expanded_once() {
        let mut solver = MemoSolver::new(&Stairs, SimpleMemo::new(), &NoCutoff);
        solver.solve(10).unwrap();
        let stats = solver.stats();
        // 2..=10 are expanded once, n-2 hits the memo as of n = 4
        assert_eq!(9, stats.misses);
        assert_eq!(7, stats.hits);
        assert_eq!(9, stats.max_depth);
    }
    #[test]
    fn without_memo_subproblems_are_expanded_again_and_again() {
        let mut solver = MemoSolver::new(&Stairs, EmptyMemo::new(), &NoCutoff);
        assert_eq!(89, solver.solve(10).unwrap());
        let stats = solver.stats();
        assert_eq!(0, stats.hits);
        assert_eq!(88, stats.misses);
    }
    #[test]
    fn the_memo_does_not_survive_a_resolution() {
        let mut solver = MemoSolver::new(&Stairs, SimpleMemo::new(), &NoCutoff);
        solver.solve(10).unwrap();
        solver.solve(10).unwrap();
        assert_eq!(9, solver.stats().misses);
    }
    #[test]
    fn a_cutoff_interrupts_the_search() {
        let mut solver = MemoSolver::new(&Stairs, SimpleMemo::new(), &DepthLimit(3));
        match solver.solve(10) {
            Err(Error::CutoffOccurred { depth }) => assert_eq!(4, depth),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    #[test]
    fn a_large_enough_depth_limit_is_harmless() {
        let mut solver = MemoSolver::new(&Stairs, SimpleMemo::new(), &DepthLimit(9));
        assert_eq!(89, solver.solve(10).unwrap());
    }
}
