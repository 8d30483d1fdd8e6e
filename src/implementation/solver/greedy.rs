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

//! This module provides the greedy optimizer. It is a heuristic baseline:
//! items are considered one at a time, from the greatest to the smallest
//! according to some ordering, and each item is taken iff it still fits in the
//! remaining budget. The outcome is feasible but not optimal in general.

use compare::Compare;

use crate::{check_budget, Item, Result, SearchResult};

/// Greedily fills a knapsack of the given `budget` with the `items`, taking
/// the greatest items first according to `ordering`. Ties keep their input
/// order. The taken items are listed in the order they were picked.
///
/// # Example
/// ```
/// # use exhaustive::*;
/// let items = vec![
///     Item::new("wine",  89.0, 123.0).unwrap(),
///     Item::new("pizza", 95.0, 258.0).unwrap(),
///     Item::new("apple", 50.0,  95.0).unwrap(),
/// ];
/// let result = greedy(&items, 400.0, &ByValue).unwrap();
/// assert_eq!(184.0, result.value);
/// assert_eq!("pizza", result.taken[0].name());
/// ```
pub fn greedy<C: Compare<Item>>(items: &[Item], budget: f64, ordering: &C) -> Result<SearchResult> {
    check_budget(budget)?;

    let mut candidates = items.to_vec();
    candidates.sort_by(|a, b| ordering.compare(b, a));

    let mut result = SearchResult::default();
    let mut total_cost = 0.0;
    for item in candidates {
        if total_cost + item.cost() <= budget {
            total_cost   += item.cost();
            result.value += item.value();
            result.taken.push(item);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod test_greedy {
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
    fn greedy_by_value() {
        let result = greedy(&menu(), 750.0, &ByValue).unwrap();
        assert_eq!(284.0, result.value);
        assert_eq!(vec!["burger", "pizza", "wine"], names(&result));
    }
    #[test]
    fn greedy_by_cost() {
        let result = greedy(&menu(), 750.0, &ByCost).unwrap();
        assert_eq!(318.0, result.value);
        assert_eq!(vec!["apple", "wine", "cola", "beer", "donut"], names(&result));
    }
    #[test]
    fn greedy_by_density() {
        let result = greedy(&menu(), 750.0, &ByDensity).unwrap();
        assert_eq!(318.0, result.value);
        assert_eq!(vec!["wine", "beer", "cola", "apple", "donut"], names(&result));
    }
    #[test]
    fn greedy_with_a_larger_budget() {
        assert_eq!(424.0, greedy(&menu(), 1000.0, &GreedyOrdering::Value).unwrap().value);
        assert_eq!(413.0, greedy(&menu(), 1000.0, &GreedyOrdering::Cost).unwrap().value);
        assert_eq!(413.0, greedy(&menu(), 1000.0, &GreedyOrdering::Density).unwrap().value);
    }
    #[test]
    fn an_item_fitting_exactly_is_taken() {
        let items = vec![Item::new("a", 1.0, 10.0).unwrap()];
        assert_eq!(1, greedy(&items, 10.0, &ByValue).unwrap().taken.len());
    }
    #[test]
    fn ties_keep_the_input_order() {
        let items = vec![
            Item::new("first",  5.0, 1.0).unwrap(),
            Item::new("second", 5.0, 1.0).unwrap(),
        ];
        let result = greedy(&items, 1.0, &ByValue).unwrap();
        assert_eq!(vec!["first"], names(&result));
    }
    #[test]
    fn greedy_never_exceeds_the_budget() {
        for budget in [0.0, 100.0, 250.0, 500.0, 750.0] {
            for ordering in GreedyOrdering::ALL {
                let result = greedy(&menu(), budget, &ordering).unwrap();
                assert!(result.total_cost() <= budget);
            }
        }
    }
    #[test]
    fn a_negative_budget_is_rejected() {
        assert!(matches!(greedy(&menu(), -1.0, &ByValue), Err(Error::InvalidBudget(_))));
    }
}
