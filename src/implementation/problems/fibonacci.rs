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

//! This module provides the Fibonacci sequence as a recurrence. It is the
//! degenerate case of an exhaustive search where both branches are always
//! explored and summed (rather than compared).

use crate::{EmptyMemo, Error, MemoSolver, NoCutoff, Recurrence, Result, SimpleMemo, SubproblemCallback};

/// The largest `n` for which `fib(n)` fits in an `u128`.
pub const FIB_MAX: u32 = 185;

/// The recurrence `fib(0) = fib(1) = 1` and `fib(n) = fib(n-1) + fib(n-2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fibonacci;
impl Recurrence for Fibonacci {
    type State = u32;
    type Value = u128;

    fn base_case(&self, n: &u32) -> Option<u128> {
        if *n <= 1 { Some(1) } else { None }
    }

    fn recur(&self, n: &u32, solve: &mut dyn SubproblemCallback<u32, u128>) -> Result<u128> {
        let a = solve.solve(n - 1)?;
        let b = solve.solve(n - 2)?;
        a.checked_add(b).ok_or(Error::Overflow(*n))
    }
}

/// Computes the `n`-th term of the sequence with memoization.
///
/// # Examples:
/// ```
/// # use exhaustive::fib;
/// assert_eq!(1,  fib(0).unwrap());
/// assert_eq!(1,  fib(1).unwrap());
/// assert_eq!(89, fib(10).unwrap());
/// assert!(fib(186).is_err());
/// ```
pub fn fib(n: u32) -> Result<u128> {
    MemoSolver::new(&Fibonacci, SimpleMemo::new(), &NoCutoff).solve(n)
}

/// Computes the `n`-th term of the sequence without memoization. This takes
/// exponential time: only use it with small values of `n`.
pub fn fib_naive(n: u32) -> Result<u128> {
    MemoSolver::new(&Fibonacci, EmptyMemo::new(), &NoCutoff).solve(n)
}
