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

//! This module defines the abstraction one implements in order to describe a
//! problem which is solved by exhaustive recursion over its subproblems.

use std::hash::Hash;

use crate::Result;

/// This trait defines the "contract" of a problem that is solvable with an
/// exhaustive search tree. An implementation of this trait defines the
/// recurrence relation of the problem: the value of a state is either known
/// right away (base case) or expressed in terms of the values of its sub-states.
///
/// The solver takes care of memoizing the values of the sub-states, so a sub-
/// state shared by several branches of the search tree is only solved once.
pub trait Recurrence {
    /// The state identifying a subproblem. It is the key of the memo table,
    /// hence it must be hashable.
    type State: Clone + Eq + Hash;
    /// The value of a solved subproblem.
    type Value: Clone;

    /// Returns the value of `state` when it needs no further decomposition,
    /// `None` otherwise. Base cases are never stored in the memo.
    fn base_case(&self, state: &Self::State) -> Option<Self::Value>;
    /// Computes the value of `state` from the value of its subproblems. The
    /// latter are obtained by calling the `solve` callback, which may fail
    /// (e.g. when the search is interrupted). Such failures are meant to be
    /// propagated as is.
    fn recur(&self, state: &Self::State, solve: &mut dyn SubproblemCallback<Self::State, Self::Value>)
        -> Result<Self::Value>;
}

/// This trait basically defines a callback which is passed on to the problem
/// so as to let it obtain the value of any of its subproblems.
pub trait SubproblemCallback<State, Value> {
    /// Solves the given subproblem
    fn solve(&mut self, state: State) -> Result<Value>;
}
/// The simplest and most natural callback implementation is to simply use
/// a closure.
impl <S, V, X: FnMut(S) -> Result<V>> SubproblemCallback<S, V> for X {
    fn solve(&mut self, state: S) -> Result<V> {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Result, SubproblemCallback};

    #[test]
    fn any_closure_is_a_subproblem_callback() {
        let mut calls = 0;
        let mut closure = |x: u32| -> Result<u32> {
            calls += 1;
            Ok(x * 2)
        };
        let callback: &mut dyn SubproblemCallback<u32, u32> = &mut closure;

        assert_eq!(8, callback.solve(4).unwrap());
        assert_eq!(2, callback.solve(1).unwrap());
        assert_eq!(2, calls);
    }
}
