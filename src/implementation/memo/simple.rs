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

//! This module provides the memo table which should be used by default.

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::Memo;

/// Simple implementation of Memo using one single hashmap.
#[derive(Debug, Clone)]
pub struct SimpleMemo<State, Value>
where State: Hash + Eq {
    values: FxHashMap<State, Value>,
}
impl <State, Value> Default for SimpleMemo<State, Value>
where State: Hash + Eq {
    fn default() -> Self {
        Self { values: Default::default() }
    }
}
impl <State, Value> SimpleMemo<State, Value>
where State: Hash + Eq {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<State, Value> Memo<State, Value> for SimpleMemo<State, Value>
where State: Hash + Eq {
    fn get(&self, state: &State) -> Option<&Value> {
        self.values.get(state)
    }

    fn insert(&mut self, state: State, value: Value) {
        // write once: the first value recorded for a state is kept
        self.values.entry(state).or_insert(value);
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod test_simple_memo {
    use crate::{Memo, SimpleMemo};

    #[test]
    fn a_miss_is_none() {
        let memo = SimpleMemo::<usize, isize>::new();
        assert_eq!(None, memo.get(&42));
        assert!(memo.is_empty());
    }
    #[test]
    fn a_hit_returns_the_recorded_value() {
        let mut memo = SimpleMemo::new();
        memo.insert((3, 'x'), 42);
        assert_eq!(Some(&42), memo.get(&(3, 'x')));
        assert_eq!(None, memo.get(&(3, 'y')));
        assert_eq!(1, memo.len());
    }
    #[test]
    fn entries_are_written_once() {
        let mut memo = SimpleMemo::new();
        memo.insert("fib", 1);
        memo.insert("fib", 2);
        assert_eq!(Some(&1), memo.get(&"fib"));
        assert_eq!(1, memo.len());
    }
    #[test]
    fn clear_forgets_everything() {
        let mut memo = SimpleMemo::new();
        memo.insert(1, 1);
        memo.insert(2, 1);
        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(None, memo.get(&1));
    }
}
