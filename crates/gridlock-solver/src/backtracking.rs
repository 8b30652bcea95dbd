use gridlock_core::Grid;

/// Outcome of a solve call.
///
/// Failure to find a completion is a normal puzzle property, not an error
/// condition, so it is reported as a value rather than through `Result`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant,
)]
pub enum SolveOutcome {
    /// A completion was found and written into the grid.
    #[display("solved")]
    Solved,
    /// No completion exists; the grid was restored to its input state.
    #[display("no solution exists")]
    Unsolvable,
}

/// Counters collected during a search.
///
/// Useful for reporting and for asserting search behavior in tests; the
/// counters do not influence the search itself.
///
/// # Examples
///
/// ```
/// use gridlock_core::Grid;
/// use gridlock_solver::BacktrackingSolver;
///
/// let mut grid = Grid::new();
/// let (outcome, stats) = BacktrackingSolver::new().solve_with_stats(&mut grid);
/// assert!(outcome.is_solved());
/// println!("filled 81 cells in {} assignments", stats.assignments);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Search activations entered: one per cell visited, plus the terminal
    /// activation that finds no empty cell left.
    pub nodes: usize,
    /// Tentative digit placements made.
    pub assignments: usize,
    /// Placements undone after the search below them failed.
    pub backtracks: usize,
}

/// A solver that completes a grid by recursive backtracking search.
///
/// # Algorithm
///
/// Each activation selects the first empty cell in row-major order and
/// tries the digits 1 through 9 ascending. A digit is placed only if it
/// passes the constraint predicate ([`Grid::is_legal`]); the search then
/// recurses on the same grid. Success propagates immediately; failure
/// undoes the placement and moves to the next candidate. An activation
/// that exhausts all candidates fails, sending its caller to *its* next
/// candidate. A grid with no empty cell is already complete, so the search
/// succeeds at once.
///
/// Both policies — row-major cell selection and ascending digit order —
/// are deterministic, so a puzzle with several completions always resolves
/// to the same one.
///
/// # Contract
///
/// - On [`SolveOutcome::Solved`] the grid is complete and every row,
///   column, and box is a permutation of 1-9.
/// - On [`SolveOutcome::Unsolvable`] the grid is value-equal to its
///   pre-call state: every tentative placement has been undone.
/// - A grid that is already complete returns `Solved` without mutation.
/// - Contradictory givens are not rejected up front; the search simply
///   never finds a completion around them and reports `Unsolvable`.
///
/// The solver needs exclusive access to the grid for the whole call, which
/// the `&mut` borrow already guarantees; clone the grid to solve the same
/// puzzle from several threads.
///
/// Recursion depth is bounded by the number of empty cells, at most 81.
///
/// # Examples
///
/// ```
/// use gridlock_core::Grid;
/// use gridlock_solver::{BacktrackingSolver, SolveOutcome};
///
/// // The empty grid has many completions; the deterministic search picks
/// // the canonical one, starting with 1 through 9 across the first row.
/// let mut grid = Grid::new();
/// assert_eq!(BacktrackingSolver::new().solve(&mut grid), SolveOutcome::Solved);
/// assert!(grid.is_solved());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackingSolver
    }

    /// Solves the grid in place.
    ///
    /// See the [type-level documentation](Self) for the full contract.
    pub fn solve(&self, grid: &mut Grid) -> SolveOutcome {
        self.solve_with_stats(grid).0
    }

    /// Solves the grid in place, also reporting search counters.
    pub fn solve_with_stats(&self, grid: &mut Grid) -> (SolveOutcome, SolveStats) {
        let mut stats = SolveStats::default();
        let outcome = if Self::search(grid, &mut stats) {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Unsolvable
        };
        (outcome, stats)
    }

    fn search(grid: &mut Grid, stats: &mut SolveStats) -> bool {
        stats.nodes += 1;
        let Some(pos) = grid.first_empty() else {
            // No empty cell left: the grid is complete.
            return true;
        };
        for digit in grid.candidates(pos) {
            grid.set(pos, Some(digit));
            stats.assignments += 1;
            if Self::search(grid, stats) {
                return true;
            }
            grid.set(pos, None);
            stats.backtracks += 1;
        }
        false
    }
}
