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

//! The demo executable: one subcommand per family of algorithms.

pub mod args;
pub mod logging;
pub mod report;

use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use exhaustive::{*, sim::*, io_utils::{read_graph, read_menu}};

pub use args::*;
use report::*;

/// The course menu used when no menu file is given
const NAMES : [&str; 9] = ["wine", "beer", "pizza", "burger", "fries", "cola", "apple", "donut", "cake"];
const VALUES: [f64; 8]  = [89.0, 90.0, 95.0, 100.0, 90.0, 79.0, 50.0, 10.0];
const COSTS : [f64; 8]  = [123.0, 154.0, 258.0, 354.0, 365.0, 150.0, 95.0, 195.0];

/// Runs the command selected on the command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Knapsack(args) => emit(&knapsack(args)?, cli.json),
        Command::Fib(args)      => emit(&fibonacci(args)?, cli.json),
        Command::Path(args)     => emit(&path(args)?, cli.json),
        Command::Dice(args)     => emit(&dice(args)?, cli.json),
        Command::Birthday(args) => emit(&birthday(args)?, cli.json),
    }
}

/// An utility function to return a cutoff heuristic that can either be a
/// time budget policy (if timeout is fixed) or no cutoff policy.
fn cutoff(timeout: Option<u64>) -> Box<dyn Cutoff> {
    if let Some(t) = timeout {
        Box::new(TimeBudget::new(Duration::from_secs(t)))
    } else {
        Box::new(NoCutoff)
    }
}

pub fn knapsack(args: &KnapsackArgs) -> anyhow::Result<KnapsackReport> {
    let menu = if let Some(fname) = &args.menu {
        read_menu(fname).with_context(|| format!("cannot read menu {}", fname.display()))?
    } else if let Some(n) = args.large {
        let mut rng = StdRng::seed_from_u64(args.seed);
        build_large_menu(n, args.max_value, args.max_cost, &mut rng)
    } else {
        build_menu(&NAMES, &VALUES, &COSTS)?
    };
    info!(items = menu.len(), budget = args.budget, "knapsack");

    let orderings = match (args.ordering, args.greedy) {
        (Some(ordering), _) => vec![ordering],
        (None, true)        => GreedyOrdering::ALL.to_vec(),
        (None, false)       => vec![],
    };
    let greedy = orderings.iter()
        .map(|ordering| Ok(GreedyRun { ordering: *ordering, result: exhaustive::greedy(&menu, args.budget, ordering)? }))
        .collect::<Result<Vec<_>>>()?;

    let cutoff = cutoff(args.duration);
    let start  = Instant::now();
    let exact  = optimize_with(&menu, args.budget, SimpleMemo::new(), cutoff.as_ref())?;

    Ok(KnapsackReport {
        budget: args.budget,
        items: menu.len(),
        greedy,
        exact,
        duration: start.elapsed(),
    })
}

pub fn fibonacci(args: &FibArgs) -> anyhow::Result<FibReport> {
    let numbers = (0..=args.upto)
        .map(|n| {
            let fib = if args.naive { fib_naive(n)? } else { fib(n)? };
            Ok(FibNumber { n, fib })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(FibReport { naive: args.naive, numbers })
}

pub fn path(args: &PathArgs) -> anyhow::Result<PathReport> {
    let config = GraphConfigBuilder::default()
        .symmetric(args.undirected)
        .build()?;
    let graph = if let Some(fname) = &args.graph {
        read_graph(fname, config).with_context(|| format!("cannot read graph {}", fname.display()))?
    } else {
        city_graph(config)?
    };

    let start = graph.node_by_name(&args.from)?;
    let end   = graph.node_by_name(&args.to)?;
    let (search, algorithm): (&'static str, &dyn PathSearch) = if args.dfs {
        ("dfs", &DepthFirst)
    } else {
        ("bfs", &BreadthFirst)
    };

    Ok(PathReport {
        from: args.from.clone(),
        to: args.to.clone(),
        search,
        path: algorithm.search(&graph, start, end)?,
    })
}

pub fn dice(args: &DiceArgs) -> anyhow::Result<DiceReport> {
    ensure!(
        args.goal.chars().all(|c| ('1'..='6').contains(&c)),
        "a goal is a sequence of faces between 1 and 6, got {}", args.goal
    );
    let mut rng = StdRng::seed_from_u64(args.seed);
    Ok(DiceReport {
        goal: args.goal.clone(),
        trials: args.trials,
        odds: run_sim(&args.goal, args.trials, &mut rng),
    })
}

pub fn birthday(args: &BirthdayArgs) -> anyhow::Result<BirthdayReport> {
    let dates = if args.non_uniform {
        non_uniform_possible_dates()
    } else {
        uniform_possible_dates()
    };
    let exact_known = args.same == 2 && !args.non_uniform;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let groups = args.people.iter()
        .map(|&people| BirthdayOdds {
            people,
            estimated: birthday_prob(people, args.same, args.trials, &dates, &mut rng),
            actual: exact_known.then(|| shared_birthday_prob(people)),
        })
        .collect();

    Ok(BirthdayReport { same: args.same, trials: args.trials, groups })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(line: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("exhaustive").chain(line.iter().copied()))
    }

    #[test]
    fn default_knapsack_is_the_course_menu() {
        let cli = parse(&["knapsack", "--greedy"]);
        let Command::Knapsack(args) = &cli.command else { panic!("not a knapsack") };
        let report = knapsack(args).unwrap();
        assert_eq!(8, report.items);
        assert_eq!(353.0, report.exact.value);
        assert_eq!(3, report.greedy.len());
        assert_eq!(284.0, report.greedy[0].result.value);
    }
    #[test]
    fn a_single_greedy_ordering_can_be_picked() {
        let cli = parse(&["knapsack", "--ordering", "cost"]);
        let Command::Knapsack(args) = &cli.command else { panic!("not a knapsack") };
        let report = knapsack(args).unwrap();
        assert_eq!(1, report.greedy.len());
        assert_eq!(GreedyOrdering::Cost, report.greedy[0].ordering);
        assert_eq!(318.0, report.greedy[0].result.value);
    }
    #[test]
    fn random_menus_are_reproducible() {
        let cli = parse(&["knapsack", "--large", "20", "--seed", "7"]);
        let Command::Knapsack(args) = &cli.command else { panic!("not a knapsack") };
        let a = knapsack(args).unwrap();
        let b = knapsack(args).unwrap();
        assert_eq!(20, a.items);
        assert_eq!(a.exact, b.exact);
    }
    #[test]
    fn fib_upto_lists_every_number() {
        let cli = parse(&["fib", "--upto", "5"]);
        let Command::Fib(args) = &cli.command else { panic!("not fib") };
        let fibs: Vec<u128> = fibonacci(args).unwrap().numbers.iter().map(|x| x.fib).collect();
        assert_eq!(vec![1, 1, 2, 3, 5, 8], fibs);
    }
    #[test]
    fn default_path_goes_from_boston_to_phoenix() {
        let cli = parse(&["path", "--dfs"]);
        let Command::Path(args) = &cli.command else { panic!("not path") };
        let report = path(args).unwrap();
        assert_eq!("Boston->New York->Chicago->Phoenix", report.path.unwrap().to_string());
    }
    #[test]
    fn unknown_cities_are_errors() {
        let cli = parse(&["path", "--from", "Paris"]);
        let Command::Path(args) = &cli.command else { panic!("not path") };
        assert!(path(args).is_err());
    }
    #[test]
    fn dice_goals_are_made_of_faces() {
        let cli = parse(&["dice", "--goal", "17"]);
        let Command::Dice(args) = &cli.command else { panic!("not dice") };
        assert!(dice(args).is_err());
    }
    #[test]
    fn exact_odds_are_only_known_for_pairs() {
        let cli = parse(&["birthday", "--people", "10", "--trials", "10", "--same", "3"]);
        let Command::Birthday(args) = &cli.command else { panic!("not birthday") };
        assert_eq!(None, birthday(args).unwrap().groups[0].actual);

        let cli = parse(&["birthday", "--people", "10", "--trials", "10"]);
        let Command::Birthday(args) = &cli.command else { panic!("not birthday") };
        assert!(birthday(args).unwrap().groups[0].actual.is_some());
    }
}
