//! CLI entry point for the 8-puzzle solver.
//!
//! Usage:
//!   eight-puzzle-solver solve <board.json> [options]
//!   eight-puzzle-solver solve --stdin [options]
//!   eight-puzzle-solver scramble --seed <n>
//!
//! A board is a 3x3 JSON array of tile values with `0` for the blank,
//! e.g. `[[1,2,3],[4,0,5],[6,7,8]]`. The solve command prints a JSON
//! report and exits 0 when a solution was found, 1 when the board is
//! unsolvable, and 2 on bad input.

mod board;
mod heuristic;
mod node;
mod solver;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Serialize;

use board::{Board, Move};
use heuristic::Heuristic;
use solver::{solve, SolveResult, Strategy};

#[derive(Parser)]
#[command(name = "eight-puzzle-solver")]
#[command(about = "Exact strategy-driven solver for the 3x3 sliding-tile puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a scrambled board and report the move sequence
    Solve {
        /// Path to board JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the board from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value = "cost-guided")]
        strategy: Strategy,

        /// Heuristic evaluator (cost-guided strategy only)
        #[arg(long, value_enum, default_value = "manhattan-distance")]
        heuristic: Heuristic,

        /// Include every board along the path in the output
        #[arg(long)]
        show_path: bool,
    },

    /// Generate a random solvable board and print it as JSON
    Scramble {
        /// Seed for the board generator
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Output format for the solve command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveReport {
    solvable: bool,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    move_count: Option<usize>,
    states_expanded: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<Move>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Board>>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            heuristic,
            show_path,
        } => {
            // Read board JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(2);
            };

            // Parse board; deserialization also validates the permutation
            let start: Board = match serde_json::from_str(&json_content) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("Error parsing board JSON: {}", e);
                    std::process::exit(2);
                }
            };

            // Run solver
            let started = Instant::now();
            let result = solve(&start, strategy, heuristic);
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let solved = result.path.is_some();
            let report = format_report(&result, elapsed_ms, show_path);

            println!("{}", serde_json::to_string_pretty(&report).unwrap());

            if solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }

        Commands::Scramble { seed } => {
            let scramble = Board::random_with_seed(seed);
            // Human-readable grid on stderr, machine-readable JSON on stdout
            eprintln!("{}", scramble);
            println!("{}", serde_json::to_string_pretty(&scramble).unwrap());
        }
    }
}

fn format_report(result: &SolveResult, time_elapsed_ms: u64, show_path: bool) -> SolveReport {
    SolveReport {
        solvable: result.solvable,
        solved: result.path.is_some(),
        move_count: result.move_count(),
        states_expanded: result.states_expanded,
        time_elapsed_ms,
        moves: result.moves.clone(),
        path: if show_path { result.path.clone() } else { None },
    }
}
