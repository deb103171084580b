use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use euclidea::problem;
use euclidea::solver;

/// Search for a tool-sequence construction that solves a named puzzle.
#[derive(Parser)]
#[command(name = "euclidea-cli")]
#[command(about = "Straightedge-and-compass construction solver")]
struct Cli {
    /// Puzzle chapter, e.g. "alpha"
    chapter: String,
    /// Puzzle name within the chapter, e.g. "perpendicular_bisector"
    problem: String,

    /// Goal key selecting among alternate tool sequences
    #[arg(short = 'v', long, default_value = "E")]
    goal: String,

    /// Enable parallel search; an optional fan-out depth defaults to 1
    #[arg(short, long, num_args = 0..=1, default_missing_value = "1")]
    parallel: Option<usize>,

    /// Worker thread limit; defaults to the available parallelism
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cli = Cli::parse();

    let statement = problem::find(&cli.chapter, &cli.problem);
    let parallel_depth = cli.parallel.unwrap_or(0);
    let thread_limit = cli.threads.unwrap_or_else(default_thread_limit);

    tracing::info!(
        chapter = cli.chapter,
        problem = cli.problem,
        goal = cli.goal,
        parallel_depth,
        thread_limit,
        "starting search"
    );

    let started = Instant::now();
    let outcome = solver::solve(&statement, &cli.goal, parallel_depth, thread_limit)?;
    let elapsed = started.elapsed();

    println!("Number of boards searched: {}", outcome.boards_searched);
    println!("Took {:?}", elapsed);
    if outcome.found {
        println!("Solution found!");
    } else {
        println!("Solution not found.");
    }

    Ok(())
}

fn default_thread_limit() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
