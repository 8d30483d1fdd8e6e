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

//! This module defines the `Memo` abstraction: the table in which a solver
//! records the value of the subproblems it has already solved.

/// A memo table maps the state of a solved subproblem onto its value.
///
/// # Note:
/// Within one top level resolution, an entry is written at most once: the
/// solver only inserts the value of a state after a lookup for that same
/// state missed. Implementations may hence ignore any attempt to overwrite
/// an existing entry.
pub trait Memo<State, Value> {
    /// Returns the memoized value of `state` if there is one.
    fn get(&self, state: &State) -> Option<&Value>;
    /// Remembers the value of `state`.
    fn insert(&mut self, state: State, value: Value);
    /// The number of memoized states
    fn len(&self) -> usize;
    /// Returns true iff nothing is memoized
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Forgets everything
    fn clear(&mut self);
}
