//! Structural checks deciding whether a candidate grid is an acceptable pattern
//!
//! Each predicate is a pure function of the grid. A grid is valid when its
//! black count hits the target, no row or column holds a one-cell white run,
//! no white run exceeds the maximum length, and all white cells form a
//! single 4-connected region.

use std::fmt;

use crate::algorithm::connectivity;
use crate::spatial::{Cell, Grid};

/// Shortest white run that can hold a word
pub const MIN_RUN_LENGTH: usize = 2;

/// Lengths of maximal white runs along one lane, in order
pub struct WhiteRuns<I> {
    cells: I,
}

impl<'a, I> Iterator for WhiteRuns<I>
where
    I: Iterator<Item = &'a Cell>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let mut length = 0;
        for cell in self.cells.by_ref() {
            if cell.is_white() {
                length += 1;
            } else if length > 0 {
                return Some(length);
            }
        }
        // Grid edge closes the final run
        (length > 0).then_some(length)
    }
}

/// Split a row or column into its white run lengths
pub fn white_runs<'a, I>(lane: I) -> WhiteRuns<I::IntoIter>
where
    I: IntoIterator<Item = &'a Cell>,
{
    WhiteRuns {
        cells: lane.into_iter(),
    }
}

/// Number of black cells in the grid
pub fn black_count(grid: &Grid) -> usize {
    grid.black_count()
}

/// Whether any row or column contains a white run of exactly one cell
pub fn has_isolated_singleton(grid: &Grid) -> bool {
    grid.lanes()
        .any(|lane| white_runs(&lane).any(|length| length < MIN_RUN_LENGTH))
}

/// Whether any row or column contains a white run longer than `max_run`
pub fn has_overlong_run(grid: &Grid, max_run: usize) -> bool {
    grid.lanes()
        .any(|lane| white_runs(&lane).any(|length| length > max_run))
}

/// Whether all white cells form one 4-connected region
pub fn is_fully_connected(grid: &Grid) -> bool {
    connectivity::is_fully_connected(grid)
}

/// Reason a candidate grid was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Black cell total differs from the target
    BlackCount {
        /// Black cells present
        found: usize,
        /// Black cells required
        expected: usize,
    },
    /// Some row or column has a one-cell white run
    IsolatedSingleton,
    /// Some row or column has a white run above the maximum
    OverlongRun,
    /// White cells split into more than one region
    Disconnected,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlackCount { found, expected } => {
                write!(f, "{found} black cells, expected {expected}")
            }
            Self::IsolatedSingleton => write!(f, "isolated single white cell"),
            Self::OverlongRun => write!(f, "white run exceeds maximum length"),
            Self::Disconnected => write!(f, "white cells are not connected"),
        }
    }
}

/// Bounds a grid must satisfy to be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Exact number of black cells
    pub black_target: usize,
    /// Longest permitted white run
    pub max_run: usize,
}

impl Constraints {
    /// Run the four checks, reporting the first one that fails
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` describing the first failed check
    pub fn check(&self, grid: &Grid) -> Result<(), Rejection> {
        let found = black_count(grid);
        if found != self.black_target {
            return Err(Rejection::BlackCount {
                found,
                expected: self.black_target,
            });
        }
        if has_isolated_singleton(grid) {
            return Err(Rejection::IsolatedSingleton);
        }
        if has_overlong_run(grid, self.max_run) {
            return Err(Rejection::OverlongRun);
        }
        if !is_fully_connected(grid) {
            return Err(Rejection::Disconnected);
        }
        Ok(())
    }

    /// Whether the grid passes every check
    pub fn is_valid(&self, grid: &Grid) -> bool {
        self.check(grid).is_ok()
    }
}
