use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::process;

use tile_bench::error::{Error, Result};
use tile_bench::puzzle::state::format_state;
use tile_bench::puzzle::{Board, EightPuzzle};
use tile_bench::report::{render_result, write_console, write_file};
use tile_bench::runner::{RunConfig, RunOutcome, run_directory, run_one};
use tile_bench::search::Registry;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "tilebench")]
#[command(about = "tilebench - solve 8-puzzles with several search strategies under a time budget")]
#[command(version)]
struct Args {
    /// Puzzle file to solve.
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,
    /// Directory of puzzle files; runs every strategy on every file.
    #[arg(short = 'D', long = "dir")]
    dir: Option<PathBuf>,
    /// Strategy to use (bfs, ids, h1, h2, h3); unknown names pick one at random.
    #[arg(short = 'a', long = "alg")]
    alg: Option<String>,
    /// Print the board before solving and every state along the solution.
    #[arg(short = 'd', long)]
    display: bool,
    /// Wall-clock budget per strategy run, in seconds.
    #[arg(long, default_value = "900")]
    budget: u64,
    /// Comma-separated strategies available to this run.
    #[arg(long, default_value = "bfs,ids,h1,h2,h3")]
    strategies: String,
    /// Output file for directory runs (overwritten).
    #[arg(short, long, default_value = "solutions.txt")]
    output: PathBuf,
}

// --- Directory Mode ---

fn solve_directory(
    dir: &Path,
    output: &Path,
    registry: &Registry,
    config: &RunConfig,
) -> Result<i32> {
    println!("{}", dir.display());
    let batch = run_directory(dir, registry, config)?;

    write_file(output, &batch, config.budget).map_err(|source| Error::Io {
        path: output.to_path_buf(),
        source,
    })?;
    println!("Files printed to '{}'.", output.display());
    Ok(0)
}

// --- Single File Mode ---

fn solve_file(args: &Args, file: &Path, registry: &Registry, config: &RunConfig) -> Result<i32> {
    let board = Board::load(file)?;

    let strategy = match &args.alg {
        Some(name) => registry.resolve(name),
        None => {
            let strategy = registry.random_strategy();
            println!("Choosing random algorithm: {}", strategy);
            strategy
        }
    };

    if args.display {
        println!("File: {}", file.display());
        println!("Algorithm: {}", strategy);
        println!("Before:");
        print!("{}", board);
    }

    let puzzle = EightPuzzle::from_board(&board);
    if !puzzle.solvable {
        println!("The inputted puzzle is not solvable:");
        print!("{}", board);
        return Ok(1);
    }

    info!("Starting {} on {}", strategy, file.display());
    let report = run_one(&board, None, strategy, config);

    if args.display && report.result.is_solved() {
        for state in puzzle.path_states(&report.result.moves) {
            println!("{}\n", format_state(&state));
        }
        println!("Total moves to result: {}", report.result.moves.len());
    }

    write_console(&render_result(&report.result, config.budget));

    match report.result.outcome {
        RunOutcome::Failed(_) | RunOutcome::Unsolvable => Ok(1),
        RunOutcome::Solved | RunOutcome::TimedOut => Ok(0),
    }
}

fn run(args: &Args) -> Result<i32> {
    let registry = Registry::from_names(&args.strategies)?;
    let config = RunConfig::default().with_budget_secs(args.budget);

    if let Some(dir) = &args.dir {
        return solve_directory(dir, &args.output, &registry, &config);
    }

    match &args.file {
        Some(file) => solve_file(args, file, &registry, &config),
        None => {
            println!("No file path given, exiting.");
            Ok(1)
        }
    }
}

// --- Main Function ---
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
