//! The 9x9 sudoku grid.
//!
//! [`Grid`] is the sole mutable entity of the solver subsystem: 81 cells,
//! each either empty or holding a [`Digit`], stored row-major. The grid
//! carries the uniqueness checks (row, column, 3x3 box) that both the solver
//! and validation rely on.
//!
//! # Text format
//!
//! Grids parse from and print to a simple text form: digits `1`-`9` for
//! filled cells, `.`, `_`, or `0` for empty cells, whitespace ignored.
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use gridlock_core::Grid;
//!
//! let grid = Grid::from_str(
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
//! assert_eq!(grid.clue_count(), 30);
//! # Ok::<(), gridlock_core::ParseGridError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// Error returned when building a grid from raw cell values.
///
/// Raw input encodes cells as integers where 0 means empty and 1-9 means
/// filled; anything else is a caller bug, rejected before any search can
/// happen and distinct from "no solution exists".
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell value out of range 0-9: {value}")]
pub struct GridValueError {
    /// The offending raw value.
    pub value: u8,
}

/// Error returned when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character that is neither a digit, an empty-cell marker
    /// (`.`, `_`, `0`), nor whitespace.
    #[display("unexpected character in grid text: {_0:?}")]
    UnexpectedCharacter(#[error(not(source))] char),
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    CellCount(#[error(not(source))] usize),
}

/// A 9x9 sudoku grid.
///
/// Cells are `Option<Digit>`: `None` is an empty cell, `Some` a filled one.
/// The grid itself places no consistency requirement on its contents — a
/// grid holding contradictory clues is representable, and it is the
/// solver's job to discover that no completion exists. Use
/// [`is_valid`](Self::is_valid) to check the uniqueness invariant
/// explicitly.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// let pos = Position::new(4, 4);
/// grid.set(pos, Some(Digit::D5));
///
/// assert_eq!(grid[pos], Some(Digit::D5));
/// assert!(grid.is_valid());
/// assert!(!grid.is_complete());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from raw row-major cell values, 0 meaning empty.
    ///
    /// Only the value range is validated here. Clue consistency is *not*
    /// checked: a grid whose givens already collide parses fine and is
    /// reported as unsolvable by the search instead.
    ///
    /// # Errors
    ///
    /// Returns [`GridValueError`] if any value is outside `0..=9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Grid;
    ///
    /// let mut values = [[0_u8; 9]; 9];
    /// values[0][0] = 5;
    /// let grid = Grid::from_values(&values)?;
    /// assert_eq!(grid.clue_count(), 1);
    ///
    /// values[8][8] = 10;
    /// assert!(Grid::from_values(&values).is_err());
    /// # Ok::<(), gridlock_core::GridValueError>(())
    /// ```
    pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Self, GridValueError> {
        let mut grid = Self::new();
        for (y, row) in (0..).zip(values) {
            for (x, &value) in (0..).zip(row) {
                let digit = match value {
                    0 => None,
                    _ => match Digit::try_from_value(value) {
                        Some(digit) => Some(digit),
                        None => return Err(GridValueError { value }),
                    },
                };
                grid.set(Position::new(x, y), digit);
            }
        }
        Ok(grid)
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets the cell at the given position, `None` clearing it.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.cell_index()] = digit;
    }

    /// Checks whether `digit` may legally occupy `pos`.
    ///
    /// This is the constraint predicate of the subsystem: the digit must not
    /// appear in any *other* cell of the row, column, or 3x3 box containing
    /// `pos`. The content of `pos` itself is ignored, so the same check
    /// serves both placement into an empty cell and validation of a cell
    /// that is already filled.
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        for x in 0..9 {
            let peer = Position::new(x, pos.y());
            if peer != pos && self[peer] == Some(digit) {
                return false;
            }
        }
        for y in 0..9 {
            let peer = Position::new(pos.x(), y);
            if peer != pos && self[peer] == Some(digit) {
                return false;
            }
        }
        for i in 0..9 {
            let peer = Position::from_box(pos.box_index(), i);
            if peer != pos && self[peer] == Some(digit) {
                return false;
            }
        }
        true
    }

    /// Returns the digits that may legally occupy `pos`.
    ///
    /// Iterating the returned set yields candidates in ascending order.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        Digit::ALL
            .into_iter()
            .filter(|&digit| self.is_legal(pos, digit))
            .collect()
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// This is the solver's empty-cell selection policy: row 0 through 8,
    /// column 0 through 8 within each row.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if every filled cell's digit is unique within its
    /// row, column, and box.
    ///
    /// Empty cells carry no constraint, so a partially filled grid can be
    /// valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self[pos].is_none_or(|digit| self.is_legal(pos, digit)))
    }

    /// Returns `true` if the grid is completely and correctly solved:
    /// every row, column, and box is a permutation of 1-9.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_valid()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.cell_index()]
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0_usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let digit = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => ch
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::try_from_value),
                _ => return Err(ParseGridError::UnexpectedCharacter(ch)),
            };
            if count < 81 {
                grid.cells[count] = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::CellCount(count));
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid(")?;
        Display::fmt(self, f)?;
        write!(f, "\n)")
    }
}
