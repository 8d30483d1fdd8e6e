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

use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};

use exhaustive::{io_utils::read_menu, *};

fn menu(id: &str) -> Vec<Item> {
    let location = PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/menus/")
        .join(id);

    read_menu(location).expect("cannot read menu")
}

fn names(result: &SearchResult) -> Vec<&str> {
    result.taken.iter().map(Item::name).collect()
}

#[test]
fn course_menu_750() {
    let best = optimize(&menu("course.txt"), 750.0).unwrap();
    assert_eq!(353.0, best.value);
    assert_eq!(685.0, best.total_cost());
    assert_eq!(vec!["wine", "beer", "pizza", "cola"], names(&best));
}

#[test]
fn course_menu_1000() {
    let best = optimize(&menu("course.txt"), 1000.0).unwrap();
    assert_eq!(424.0, best.value);
    assert_eq!(vec!["wine", "beer", "pizza", "burger", "apple"], names(&best));
}

#[test]
fn greedy_orderings_750() {
    let items = menu("course.txt");
    let by_value   = greedy(&items, 750.0, &ByValue).unwrap();
    let by_cost    = greedy(&items, 750.0, &ByCost).unwrap();
    let by_density = greedy(&items, 750.0, &ByDensity).unwrap();

    assert_eq!(284.0, by_value.value);
    assert_eq!(vec!["burger", "pizza", "wine"], names(&by_value));
    assert_eq!(318.0, by_cost.value);
    assert_eq!(vec!["apple", "wine", "cola", "beer", "donut"], names(&by_cost));
    assert_eq!(318.0, by_density.value);
    assert_eq!(vec!["wine", "beer", "cola", "apple", "donut"], names(&by_density));
}

#[test]
fn greedy_orderings_1000() {
    let items = menu("course.txt");
    let values: Vec<f64> = GreedyOrdering::ALL.iter()
        .map(|o| greedy(&items, 1000.0, o).unwrap().value)
        .collect();
    assert_eq!(vec![424.0, 413.0, 413.0], values);
}

#[test]
fn ties_keep_the_last_item() {
    let best = optimize(&menu("ties.txt"), 5.0).unwrap();
    assert_eq!(10.0, best.value);
    assert_eq!(vec!["b"], names(&best));
}

#[test]
fn ill_formed_menus_are_rejected() {
    let location = PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/menus/broken.txt");
    assert!(matches!(read_menu(location), Err(Error::Format { line: 2, .. })));
}

#[test]
fn memo_and_plain_search_agree_on_large_menus() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in (5..=20).step_by(5) {
        let items = build_large_menu(n, 90, 250, &mut rng);
        let memo  = optimize(&items, 750.0).unwrap();
        let plain = optimize_with(&items, 750.0, EmptyMemo::new(), &NoCutoff).unwrap();
        assert_eq!(memo.value, plain.value);
        assert_eq!(memo.taken, plain.taken);
    }
}

#[test]
fn exact_search_beats_every_greedy_ordering() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in (5..=60).step_by(5) {
        let items = build_large_menu(n, 90, 250, &mut rng);
        let best  = optimize(&items, 750.0).unwrap();
        assert!(best.total_cost() <= 750.0);
        for ordering in GreedyOrdering::ALL {
            let approx = greedy(&items, 750.0, &ordering).unwrap();
            assert!(approx.total_cost() <= 750.0);
            assert!(approx.value <= best.value);
        }
    }
}

#[test]
fn the_memo_pays_off() {
    let mut rng = StdRng::seed_from_u64(1);
    let items   = build_large_menu(20, 90, 250, &mut rng);
    let problem = Knapsack::new(&items);

    let mut memo = MemoSolver::new(&problem, SimpleMemo::new(), &NoCutoff);
    memo.solve(problem.root(750.0)).unwrap();
    let mut plain = MemoSolver::new(&problem, EmptyMemo::new(), &NoCutoff);
    plain.solve(problem.root(750.0)).unwrap();

    assert!(memo.stats().misses <= plain.stats().misses);
    assert_eq!(0, plain.stats().hits);
}

#[test]
fn fibonacci_numbers() {
    assert_eq!(1, fib(0).unwrap());
    assert_eq!(1, fib(1).unwrap());
    assert_eq!(89, fib(10).unwrap());
    assert_eq!(14028366653498915298923761, fib(121).unwrap());
    assert_eq!(fib_naive(20).unwrap(), fib(20).unwrap());
    assert!(matches!(fib(FIB_MAX + 1), Err(Error::Overflow(_))));
}

#[test]
fn free_items_cannot_enter_a_menu() {
    let menu = build_menu(&["a", "b"], &[1.0, 10.0], &[5.0, 0.0]);
    assert!(matches!(menu, Err(Error::InvalidItem(_))));

    let parsed = io_utils::parse_menu("a 1 5\nb 10 0\n".as_bytes());
    assert!(matches!(parsed, Err(Error::Format { line: 2, .. })));
}

#[test]
fn exact_search_beats_greedy_on_cheap_items() {
    let items = build_menu(&["a", "b"], &[1.0, 10.0], &[5.0, 0.5]).unwrap();
    for budget in [0.0, 0.5, 5.0, 5.5] {
        let best = optimize(&items, budget).unwrap();
        for ordering in GreedyOrdering::ALL {
            let approx = greedy(&items, budget, &ordering).unwrap();
            assert!(approx.value <= best.value);
        }
    }
}
