//! Core board model for the gridlock sudoku solver.
//!
//! This crate provides the data structures shared by everything that works
//! with a 9x9 sudoku board: the solver, benchmarks, and any presentation
//! layer built on top.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Board coordinates and the row-major cell ordering
//! - [`digit_set`]: Compact sets of candidate digits
//! - [`grid`]: The 9x9 grid itself, with parsing, formatting, and the
//!   row/column/box uniqueness checks
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 is no longer a legal candidate anywhere else in row 0
//! assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridValueError, ParseGridError},
    position::Position,
};
