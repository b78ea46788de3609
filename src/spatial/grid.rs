//! Square black/white cell matrix with point-symmetric placement helpers
//!
//! A `Grid` is a plain value: the generator builds a fresh one for every
//! attempt and drops it wholesale on rejection, so no undo logic exists.

use std::fmt;

use ndarray::{Array2, ArrayView1};

use crate::io::configuration::{BLACK_MARKER, WHITE_MARKER};
use crate::io::error::{PatternError, Result};
use crate::spatial::geometry::{Position, mirror};

/// State of a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Available to hold a letter
    #[default]
    White,
    /// Blocked square
    Black,
}

impl Cell {
    /// Marker used for this cell in the output document
    pub const fn marker(self) -> &'static str {
        match self {
            Self::White => WHITE_MARKER,
            Self::Black => BLACK_MARKER,
        }
    }

    /// Parse a document marker back into a cell
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` for anything other than the two known markers
    pub fn from_marker(marker: &str) -> Result<Self> {
        match marker {
            BLACK_MARKER => Ok(Self::Black),
            WHITE_MARKER => Ok(Self::White),
            other => Err(PatternError::MalformedDocument {
                reason: format!("unknown cell marker '{other}'"),
            }),
        }
    }

    /// Whether the cell is black
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }

    /// Whether the cell is white
    pub const fn is_white(self) -> bool {
        matches!(self, Self::White)
    }

    const fn preview_char(self) -> char {
        match self {
            Self::White => '.',
            Self::Black => '#',
        }
    }
}

/// Square matrix of cells, all white on creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an all-white grid with the given side length
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::default((size, size)),
        }
    }

    /// Build a grid from rows of document markers
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` if the rows do not form a square or a
    /// marker is not recognised
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let size = rows.len();
        let mut grid = Self::new(size);

        for (row, markers) in rows.iter().enumerate() {
            if markers.len() != size {
                return Err(PatternError::MalformedDocument {
                    reason: format!(
                        "row {row} has {} cells, expected {size}",
                        markers.len()
                    ),
                });
            }
            for (col, marker) in markers.iter().enumerate() {
                grid.set([row, col], Cell::from_marker(marker.as_ref())?);
            }
        }

        Ok(grid)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell at a position, or `None` outside the grid
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Whether the position lies inside the grid and holds a white cell
    pub fn is_white_at(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_white)
    }

    /// Overwrite a single cell; positions outside the grid are ignored
    pub fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(position) {
            *slot = cell;
        }
    }

    /// Overwrite a cell together with its mirror image
    pub fn set_symmetric(&mut self, position: Position, cell: Cell) {
        let size = self.size();
        self.set(position, cell);
        self.set(mirror(position, size), cell);
    }

    /// Number of black cells
    pub fn black_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_black()).count()
    }

    /// Number of white cells
    pub fn white_count(&self) -> usize {
        self.cells.len() - self.black_count()
    }

    /// Whether every cell matches its 180° rotation image
    pub fn is_point_symmetric(&self) -> bool {
        let size = self.size();
        self.cells
            .indexed_iter()
            .all(|((row, col), cell)| self.get(mirror([row, col], size)) == Some(*cell))
    }

    /// Iterate over rows as 1-D views
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    /// Iterate over columns as 1-D views
    pub fn columns(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.columns().into_iter()
    }

    /// Iterate over every row followed by every column
    pub fn lanes(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.rows().chain(self.columns())
    }

    /// Positions of all white cells in row-major order
    pub fn white_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_white())
            .map(|((row, col), _)| [row, col])
    }

    /// Document markers for every row
    pub fn to_markers(&self) -> Vec<Vec<&'static str>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.marker()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.preview_char())?;
            }
        }
        Ok(())
    }
}
