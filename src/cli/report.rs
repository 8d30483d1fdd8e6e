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

//! The outcomes of the demo commands. Each report is printed either as plain
//! text (its `Display` implementation) or as json.

use std::{fmt, time::Duration};

use serde::Serialize;

use exhaustive::{sim::Estimate, GreedyOrdering, Path, SearchResult};

/// Prints the given report on stdout, in the requested format
pub fn emit<T: Serialize + fmt::Display>(report: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &SearchResult) -> fmt::Result {
    writeln!(f, "Total value of items taken = {}", result.value)?;
    for item in result.taken.iter() {
        writeln!(f, "   {item}")?;
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// --- KNAPSACK ---------------------------------------------------------------
// ----------------------------------------------------------------------------
#[derive(Debug, Serialize)]
pub struct KnapsackReport {
    pub budget: f64,
    pub items: usize,
    pub greedy: Vec<GreedyRun>,
    pub exact: SearchResult,
    #[serde(serialize_with = "as_secs")]
    pub duration: Duration,
}
#[derive(Debug, Serialize)]
pub struct GreedyRun {
    pub ordering: GreedyOrdering,
    pub result: SearchResult,
}
impl fmt::Display for KnapsackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.greedy.iter() {
            writeln!(f, "Use greedy by {} to allocate {} calories", run.ordering, self.budget)?;
            write_result(f, &run.result)?;
        }
        writeln!(f, "Use search tree to allocate {} calories", self.budget)?;
        write_result(f, &self.exact)?;
        writeln!(f, "Items:      {}", self.items)?;
        writeln!(f, "Duration:   {:.3} seconds", self.duration.as_secs_f32())
    }
}
fn as_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

// ----------------------------------------------------------------------------
// --- FIBONACCI --------------------------------------------------------------
// ----------------------------------------------------------------------------
#[derive(Debug, Serialize)]
pub struct FibReport {
    pub naive: bool,
    pub numbers: Vec<FibNumber>,
}
#[derive(Debug, Serialize)]
pub struct FibNumber {
    pub n: u32,
    pub fib: u128,
}
impl fmt::Display for FibReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in self.numbers.iter() {
            writeln!(f, "fib({}) = {}", x.n, x.fib)?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// --- PATH -------------------------------------------------------------------
// ----------------------------------------------------------------------------
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub search: &'static str,
    pub path: Option<Path>,
}
impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                // only the breadth first search guarantees the fewest edges
                let kind = if self.search == "bfs" { "Shortest path" } else { "Path" };
                writeln!(f, "{kind} from {} to {} is {} ({} search)", self.from, self.to, path, self.search)
            },
            None => writeln!(f, "There is no path from {} to {}", self.from, self.to),
        }
    }
}

// ----------------------------------------------------------------------------
// --- SIMULATIONS ------------------------------------------------------------
// ----------------------------------------------------------------------------
#[derive(Debug, Serialize)]
pub struct DiceReport {
    pub goal: String,
    pub trials: usize,
    #[serde(flatten)]
    pub odds: Estimate,
}
impl fmt::Display for DiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Actual probability of {} = {:.8}", self.goal, self.odds.actual)?;
        writeln!(f, "Estimated Probability of {} = {:.8}", self.goal, self.odds.estimated)
    }
}

#[derive(Debug, Serialize)]
pub struct BirthdayReport {
    pub same: usize,
    pub trials: usize,
    pub groups: Vec<BirthdayOdds>,
}
#[derive(Debug, Serialize)]
pub struct BirthdayOdds {
    pub people: usize,
    pub estimated: f64,
    /// Only known for pairs of people sharing uniformly drawn birthdays
    pub actual: Option<f64>,
}
impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in self.groups.iter() {
            write!(f, "For {} est. prob. of {} shared birthday is {:.4}",
                group.people, self.same, group.estimated)?;
            if let Some(actual) = group.actual {
                write!(f, " (actual {actual:.4})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
