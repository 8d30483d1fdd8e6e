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

//! This module provides a memo table which remembers nothing. Plugging it
//! into a solver yields the plain (exponential) exhaustive search.

use std::marker::PhantomData;

use crate::Memo;

/// Dummy implementation of Memo with no information stored at all.
#[derive(Debug, Clone, Copy)]
pub struct EmptyMemo<State, Value> {
    phantom: PhantomData<(State, Value)>,
}
impl <State, Value> Default for EmptyMemo<State, Value> {
    fn default() -> Self {
        EmptyMemo { phantom: Default::default() }
    }
}
impl <State, Value> EmptyMemo<State, Value> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<State, Value> Memo<State, Value> for EmptyMemo<State, Value> {
    #[inline(always)]
    fn get(&self, _: &State) -> Option<&Value> {
        None
    }

    #[inline(always)]
    fn insert(&mut self, _: State, _: Value) {}

    #[inline(always)]
    fn len(&self) -> usize {
        0
    }

    #[inline(always)]
    fn clear(&mut self) {}
}

#[cfg(test)]
mod test_empty_memo {
    use crate::{EmptyMemo, Memo};

    #[test]
    fn it_never_remembers_anything() {
        let mut memo = EmptyMemo::new();
        memo.insert(1_usize, 'a');
        assert_eq!(None, memo.get(&1));
        assert!(memo.is_empty());
    }
}
