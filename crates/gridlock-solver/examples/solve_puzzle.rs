//! Solve a sudoku puzzle from the command line.
//!
//! The puzzle is given in row-major text form: digits `1`-`9` for filled
//! cells, `.`, `_`, or `0` for empty cells, whitespace ignored.
//!
//! # Usage
//!
//! Solve the built-in demo puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Solve a puzzle given as an argument:
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
//! ```
//!
//! Read the puzzle from standard input:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --stdin < puzzle.txt
//! ```
//!
//! Print search statistics on stderr:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --stats
//! ```

use std::{io::Read as _, process, str::FromStr as _};

use clap::Parser;
use gridlock_core::Grid;
use gridlock_solver::BacktrackingSolver;

/// Classic 30-clue demo puzzle with a unique solution.
const DEMO_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle in row-major text form. Defaults to a built-in demo puzzle.
    #[arg(value_name = "GRID", conflicts_with = "stdin")]
    grid: Option<String>,

    /// Read the puzzle from standard input instead.
    #[arg(long)]
    stdin: bool,

    /// Print search statistics on stderr after solving.
    #[arg(long)]
    stats: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = if args.stdin {
        let mut buf = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("failed to read stdin: {err}");
            process::exit(2);
        }
        buf
    } else {
        args.grid.unwrap_or_else(|| DEMO_PUZZLE.to_owned())
    };

    let mut grid = match Grid::from_str(&text) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(2);
        }
    };
    log::debug!("parsed puzzle with {} clues", grid.clue_count());

    let (outcome, stats) = BacktrackingSolver::new().solve_with_stats(&mut grid);
    log::debug!("search visited {} nodes", stats.nodes);
    if args.stats {
        eprintln!(
            "nodes: {}, assignments: {}, backtracks: {}",
            stats.nodes, stats.assignments, stats.backtracks
        );
    }

    if outcome.is_unsolvable() {
        eprintln!("{outcome}");
        process::exit(1);
    }
    println!("{grid}");
}
