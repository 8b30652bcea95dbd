//! Backtracking sudoku solver.
//!
//! This crate completes a partially filled 9x9 [`Grid`] in place, or proves
//! that no completion exists. The search is a plain recursive depth-first
//! backtracking over empty cells; see [`BacktrackingSolver`] for the exact
//! contract.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use gridlock_core::Grid;
//! use gridlock_solver::BacktrackingSolver;
//!
//! let mut grid = Grid::from_str(
//!     "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//!     ",
//! )?;
//!
//! let outcome = BacktrackingSolver::new().solve(&mut grid);
//! assert!(outcome.is_solved());
//! assert!(grid.is_solved());
//! # Ok::<(), gridlock_core::ParseGridError>(())
//! ```
//!
//! [`Grid`]: gridlock_core::Grid

pub use self::backtracking::*;

mod backtracking;
