use clap::Parser;
use xtaskops::{ops::cmd, tasks};

#[derive(Debug, clap::Parser)]
enum Args {
    Coverage{
        /// Generate html report
        #[clap(short, long)]
        dev_mode: bool
    },
    Ci,
    Docs,
    /// Runs the demo executable through the scenarios of the course
    Scenarios{
        /// Also print the search traces
        #[clap(short, long)]
        trace: bool
    },
}

/// The command lines of the course scenarios
const SCENARIOS: [&[&str]; 8] = [
    &["knapsack", "--greedy", "--budget", "750"],
    &["knapsack", "--greedy", "--budget", "1000"],
    &["knapsack", "--large", "40", "--seed", "0"],
    &["fib", "--upto", "30"],
    &["path", "--from", "Boston", "--to", "Phoenix"],
    &["path", "--from", "Boston", "--to", "Phoenix", "--dfs"],
    &["dice", "--goal", "11111", "--trials", "1000"],
    &["birthday", "--people", "10,20,40,100", "--same", "2"],
];

fn scenarios(trace: bool) -> Result<(), anyhow::Error> {
    for scenario in SCENARIOS {
        let mut args = vec!["run", "--release", "--quiet", "--bin", "exhaustive", "--"];
        args.extend_from_slice(scenario);
        if trace {
            args.extend_from_slice(&["--log-level", "trace"]);
        }
        println!("$ exhaustive {}", scenario.join(" "));
        cmd("cargo", args).run()?;
    }
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    match args {
        Args::Coverage{dev_mode} => tasks::coverage(dev_mode),
        Args::Ci                 => tasks::ci(),
        Args::Docs               => tasks::docs(),
        Args::Scenarios{trace}   => scenarios(trace),
    }
}
