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

//! This module provides the formulation of the 0/1 knapsack problem as a
//! recurrence, along with the `optimize` entry point.
//!
//! The search tree considers the items in their input order. At each node, the
//! next item is either taken (left branch) or left out (right branch). When the
//! item does not fit in the remaining budget, only the right branch is explored.

use ordered_float::OrderedFloat;

use crate::{Cutoff, Error, Item, Memo, MemoSolver, NoCutoff, Recurrence, Result, SearchResult,
            SimpleMemo, SubproblemCallback};

/// The key of the memo table: the items that are still to be considered
/// (always a suffix of the input, identified by the position of its first
/// item) and the remaining budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchKey {
    /// Position of the first item which has not been considered yet
    pub next: usize,
    /// The budget left to spend on the remaining items
    pub budget: OrderedFloat<f64>,
}

/// The value of a knapsack subproblem: the best value achievable with the
/// remaining items and budget, and the positions of the items achieving it
/// (in increasing order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub value: f64,
    pub taken: Vec<usize>,
}

/// An instance of the 0/1 knapsack problem.
#[derive(Debug, Clone, Copy)]
pub struct Knapsack<'a> {
    items: &'a [Item],
}
impl <'a> Knapsack<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Knapsack { items }
    }
    /// The root subproblem: all items must be considered with the full budget
    pub fn root(&self, budget: f64) -> SearchKey {
        SearchKey { next: 0, budget: OrderedFloat(budget) }
    }
    /// Materializes the items of a selection
    pub fn result_of(&self, selection: &Selection) -> SearchResult {
        SearchResult {
            value: selection.value,
            taken: selection.taken.iter().map(|i| self.items[*i].clone()).collect(),
        }
    }
}

impl Recurrence for Knapsack<'_> {
    type State = SearchKey;
    type Value = Selection;

    fn base_case(&self, state: &SearchKey) -> Option<Selection> {
        if state.next >= self.items.len() || state.budget.0 == 0.0 {
            Some(Selection::default())
        } else {
            None
        }
    }

    fn recur(&self, state: &SearchKey, solve: &mut dyn SubproblemCallback<SearchKey, Selection>)
        -> Result<Selection>
    {
        let head = &self.items[state.next];
        let rest = state.next + 1;
        let without_head = SearchKey { next: rest, budget: state.budget };

        if head.cost() > state.budget.0 {
            return solve.solve(without_head);
        }

        let mut with = solve.solve(SearchKey { next: rest, budget: OrderedFloat(state.budget.0 - head.cost()) })?;
        with.value += head.value();
        let without = solve.solve(without_head)?;

        // on a tie, leaving the head out wins
        if with.value > without.value {
            with.taken.insert(0, state.next);
            Ok(with)
        } else {
            Ok(without)
        }
    }
}

/// Budgets must be finite and non negative.
pub(crate) fn check_budget(budget: f64) -> Result<()> {
    if budget.is_finite() && budget >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidBudget(budget))
    }
}

/// Finds the subset of `items` which maximizes the total value without
/// exceeding the `budget`. The taken items are listed in input order.
///
/// # Example
/// ```
/// # use exhaustive::*;
/// let items = vec![
///     Item::new("a", 60.0, 10.0).unwrap(),
///     Item::new("b", 100.0, 20.0).unwrap(),
///     Item::new("c", 120.0, 30.0).unwrap(),
/// ];
/// let best = optimize(&items, 50.0).unwrap();
/// assert_eq!(220.0, best.value);
/// assert_eq!(vec!["b", "c"], best.taken.iter().map(Item::name).collect::<Vec<_>>());
/// ```
pub fn optimize(items: &[Item], budget: f64) -> Result<SearchResult> {
    optimize_with(items, budget, SimpleMemo::new(), &NoCutoff)
}

/// Same as `optimize`, but lets one choose the memo table and the cutoff.
/// Using an `EmptyMemo` yields the plain search tree exploration.
pub fn optimize_with<M>(items: &[Item], budget: f64, memo: M, cutoff: &dyn Cutoff) -> Result<SearchResult>
where M: Memo<SearchKey, Selection>
{
    check_budget(budget)?;
    let problem   = Knapsack::new(items);
    let mut solver= MemoSolver::new(&problem, memo, cutoff);
    let selection = solver.solve(problem.root(budget))?;
    Ok(problem.result_of(&selection))
}

#[cfg(test)]
mod test_knapsack {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::*;

    fn menu() -> Vec<Item> {
        build_menu(
            &["wine", "beer", "pizza", "burger", "fries", "cola", "apple", "donut"],
            &[89.0, 90.0, 95.0, 100.0, 90.0, 79.0, 50.0, 10.0],
            &[123.0, 154.0, 258.0, 354.0, 365.0, 150.0, 95.0, 195.0],
        ).unwrap()
    }
    fn names(result: &SearchResult) -> Vec<&str> {
        result.taken.iter().map(Item::name).collect()
    }

    #[test]
    fn the_course_menu_with_750_calories() {
        let best = optimize(&menu(), 750.0).unwrap();
        assert_eq!(353.0, best.value);
        assert_eq!(vec!["wine", "beer", "pizza", "cola"], names(&best));
        assert_eq!(685.0, best.total_cost());
    }
    #[test]
    fn the_course_menu_with_1000_calories() {
        let best = optimize(&menu(), 1000.0).unwrap();
        assert_eq!(424.0, best.value);
        assert_eq!(vec!["wine", "beer", "pizza", "burger", "apple"], names(&best));
    }
    #[test]
    fn the_plain_search_tree_agrees_with_the_memoized_one() {
        for budget in [0.0, 100.0, 300.0, 750.0, 1000.0] {
            let fast = optimize(&menu(), budget).unwrap();
            let slow = optimize_with(&menu(), budget, EmptyMemo::new(), &NoCutoff).unwrap();
            assert_eq!(fast, slow);
        }
    }
    #[test]
    fn nothing_to_take() {
        assert_eq!(SearchResult::default(), optimize(&[], 750.0).unwrap());
        assert_eq!(SearchResult::default(), optimize(&menu(), 0.0).unwrap());
        assert_eq!(SearchResult::default(), optimize(&menu(), 50.0).unwrap());
    }
    #[test]
    fn on_a_tie_the_item_is_left_out() {
        let items = vec![
            Item::new("first",  5.0, 1.0).unwrap(),
            Item::new("second", 5.0, 1.0).unwrap(),
        ];
        let best = optimize(&items, 1.0).unwrap();
        assert_eq!(vec!["second"], names(&best));
    }
    #[test]
    fn duplicate_names_are_distinct_items() {
        let items = vec![
            Item::new("apple", 50.0, 95.0).unwrap(),
            Item::new("apple", 50.0, 95.0).unwrap(),
        ];
        let best = optimize(&items, 200.0).unwrap();
        assert_eq!(100.0, best.value);
        assert_eq!(2, best.taken.len());
    }
    #[test]
    fn invalid_budgets_are_rejected() {
        assert!(matches!(optimize(&menu(), -1.0),       Err(Error::InvalidBudget(_))));
        assert!(matches!(optimize(&menu(), f64::NAN),   Err(Error::InvalidBudget(_))));
        assert!(matches!(optimize(&menu(), f64::INFINITY), Err(Error::InvalidBudget(_))));
    }
    #[test]
    fn optimize_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0);
        let items = build_large_menu(40, 90, 250, &mut rng);
        assert_eq!(optimize(&items, 750.0).unwrap(), optimize(&items, 750.0).unwrap());
    }
    #[test]
    fn optimize_beats_greedy_and_stays_feasible() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [5, 10, 15, 20, 25] {
            let items = build_large_menu(n, 90, 250, &mut rng);
            let best  = optimize(&items, 750.0).unwrap();
            assert!(best.total_cost() <= 750.0);
            for ordering in GreedyOrdering::ALL {
                let heuristic = greedy(&items, 750.0, &ordering).unwrap();
                assert!(best.value >= heuristic.value);
            }
        }
    }
    #[test]
    fn memoization_matches_brute_force_on_random_menus() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let items = build_large_menu(12, 90, 250, &mut rng);
            let fast  = optimize(&items, 500.0).unwrap();
            let slow  = optimize_with(&items, 500.0, EmptyMemo::new(), &NoCutoff).unwrap();
            assert_eq!(fast.value, slow.value);
        }
    }
    #[test]
    fn a_time_budget_which_is_over_interrupts_the_search() {
        let expired = TimeBudget::new(std::time::Duration::ZERO);
        let outcome = optimize_with(&menu(), 750.0, SimpleMemo::new(), &expired);
        assert!(matches!(outcome, Err(Error::CutoffOccurred { depth: 0 })));
    }
}
