//! Benchmarks for the backtracking solver.
//!
//! # Benchmarks
//!
//! - **`solve_classic`**: Solves a well-known 30-clue puzzle with a unique
//!   solution. Measures the common case of a well-posed puzzle.
//! - **`solve_empty`**: Completes an entirely empty grid. Measures the
//!   search under maximum freedom, where the deterministic policies fill
//!   the canonical grid.
//!
//! Each iteration solves a fresh clone of the input grid, since solving
//! mutates it in place.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gridlock_core::Grid;
use gridlock_solver::BacktrackingSolver;

const CLASSIC_PUZZLE: &str = "
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

fn bench_solve_classic(c: &mut Criterion) {
    let puzzle = Grid::from_str(CLASSIC_PUZZLE).unwrap();
    let solver = BacktrackingSolver::new();
    c.bench_function("solve_classic", |b| {
        b.iter_batched(
            || hint::black_box(puzzle.clone()),
            |mut grid| solver.solve(&mut grid),
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve_empty(c: &mut Criterion) {
    let solver = BacktrackingSolver::new();
    c.bench_function("solve_empty", |b| {
        b.iter_batched(
            || hint::black_box(Grid::new()),
            |mut grid| solver.solve(&mut grid),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve_classic, bench_solve_empty);
criterion_main!(benches);
