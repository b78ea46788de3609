//! Enumeration of one rotational half of the grid
//!
//! The half-grid is the sampling universe for black-cell placement: every
//! cell above the center row, plus the cells left of the center on the
//! center row. Mirroring each of them covers the rest of the grid exactly
//! once, leaving only the center cell unpaired.

use std::sync::Arc;

use crate::spatial::geometry::{Position, center};

/// Immutable set of half-grid positions for one grid size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfGrid {
    size: usize,
    positions: Vec<Position>,
}

impl HalfGrid {
    /// Enumerate the half-grid for a given side length in row-major order
    pub fn enumerate(size: usize) -> Self {
        let middle = center(size);
        let mut positions = Vec::with_capacity(size * size / 2);

        for row in 0..size {
            for col in 0..size {
                if row < middle || (row == middle && col < middle) {
                    positions.push([row, col]);
                }
            }
        }

        Self { size, positions }
    }

    /// Side length this set was computed for
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All positions in enumeration order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the set holds no positions (only for sizes below 2)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Membership test
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// Lazily computed half-grid keyed by grid size
///
/// Holds at most one set at a time. Asking for a different size discards
/// the cached set and enumerates again.
#[derive(Debug, Default)]
pub struct HalfGridCache {
    current: Option<Arc<HalfGrid>>,
    /// Number of enumerations performed
    pub computations: usize,
}

impl HalfGridCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Half-grid for `size`, enumerating it on first use or after a size change
    pub fn get(&mut self, size: usize) -> Arc<HalfGrid> {
        match &self.current {
            Some(half) if half.size() == size => Arc::clone(half),
            _ => {
                self.computations += 1;
                let half = Arc::new(HalfGrid::enumerate(size));
                self.current = Some(Arc::clone(&half));
                half
            }
        }
    }
}
