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

//! This module provides the orderings used by the greedy optimizer to decide
//! which items are considered first. Each ordering is a comparator: the
//! greedy algorithm considers the *greatest* items first.

use std::{cmp::Ordering, fmt};

use compare::Compare;
use serde::Serialize;

use crate::Item;

/// Items bringing the highest value are considered first.
#[derive(Debug, Default, Copy, Clone)]
pub struct ByValue;
impl Compare<Item> for ByValue {
    fn compare(&self, l: &Item, r: &Item) -> Ordering {
        l.value().total_cmp(&r.value())
    }
}

/// The cheapest items are considered first (highest inverse cost).
#[derive(Debug, Default, Copy, Clone)]
pub struct ByCost;
impl Compare<Item> for ByCost {
    fn compare(&self, l: &Item, r: &Item) -> Ordering {
        r.cost().total_cmp(&l.cost())
    }
}

/// Items bringing the most value per unit of cost are considered first.
#[derive(Debug, Default, Copy, Clone)]
pub struct ByDensity;
impl Compare<Item> for ByDensity {
    fn compare(&self, l: &Item, r: &Item) -> Ordering {
        l.density().total_cmp(&r.density())
    }
}

/// This enum lets one pick any of the above orderings at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GreedyOrdering {
    Value,
    Cost,
    Density,
}
impl GreedyOrdering {
    pub const ALL: [GreedyOrdering; 3] = [Self::Value, Self::Cost, Self::Density];
}
impl Compare<Item> for GreedyOrdering {
    fn compare(&self, l: &Item, r: &Item) -> Ordering {
        match self {
            Self::Value   => ByValue.compare(l, r),
            Self::Cost    => ByCost.compare(l, r),
            Self::Density => ByDensity.compare(l, r),
        }
    }
}
impl fmt::Display for GreedyOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value   => f.write_str("value"),
            Self::Cost    => f.write_str("cost"),
            Self::Density => f.write_str("density"),
        }
    }
}

#[cfg(test)]
mod test_ordering {
    use std::cmp::Ordering;

    use compare::Compare;

    use crate::*;

    fn item(value: f64, cost: f64) -> Item {
        Item::new("x", value, cost).unwrap()
    }

    #[test]
    fn by_value_prefers_valuable_items() {
        assert_eq!(Ordering::Greater, ByValue.compare(&item(10.0, 5.0), &item(5.0, 1.0)));
        assert_eq!(Ordering::Equal,   ByValue.compare(&item(5.0, 5.0), &item(5.0, 1.0)));
    }
    #[test]
    fn by_cost_prefers_cheap_items() {
        assert_eq!(Ordering::Greater, ByCost.compare(&item(1.0, 1.0), &item(10.0, 5.0)));
        assert_eq!(Ordering::Less,    ByCost.compare(&item(10.0, 5.0), &item(1.0, 1.0)));
    }
    #[test]
    fn by_density_prefers_dense_items() {
        assert_eq!(Ordering::Greater, ByDensity.compare(&item(10.0, 2.0), &item(10.0, 5.0)));
    }
    #[test]
    fn the_enum_delegates_to_the_comparators() {
        let a = item(10.0, 5.0);
        let b = item(3.0, 1.0);
        assert_eq!(ByValue.compare(&a, &b),   GreedyOrdering::Value.compare(&a, &b));
        assert_eq!(ByCost.compare(&a, &b),    GreedyOrdering::Cost.compare(&a, &b));
        assert_eq!(ByDensity.compare(&a, &b), GreedyOrdering::Density.compare(&a, &b));
    }
}
