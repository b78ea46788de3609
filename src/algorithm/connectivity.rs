//! Breadth-first flood fill over white cells
//!
//! White cells are graph nodes joined to their 4-directional white
//! neighbours. The traversal uses an explicit worklist and a visited bitset
//! laid out row-major over the grid.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::spatial::Grid;
use crate::spatial::geometry::Position;

const NEIGHBOUR_OFFSETS: [[isize; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];

/// Row-major visited flags for one traversal
struct VisitedSet {
    bits: BitVec,
    size: usize,
}

impl VisitedSet {
    fn new(size: usize) -> Self {
        Self {
            bits: bitvec![0; size * size],
            size,
        }
    }

    /// Mark a position, returning whether it was unvisited before
    fn insert(&mut self, position: Position) -> bool {
        let index = position[0] * self.size + position[1];
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }
}

fn neighbours(position: Position, size: usize) -> impl Iterator<Item = Position> {
    NEIGHBOUR_OFFSETS.into_iter().filter_map(move |[dr, dc]| {
        let row = position[0].checked_add_signed(dr)?;
        let col = position[1].checked_add_signed(dc)?;
        (row < size && col < size).then_some([row, col])
    })
}

/// Count the white cells reachable from `start`, including `start` itself
///
/// Returns 0 when `start` is black or lies outside the grid.
pub fn reachable_from(grid: &Grid, start: Position) -> usize {
    if !grid.is_white_at(start) {
        return 0;
    }

    let size = grid.size();
    let mut visited = VisitedSet::new(size);
    let mut worklist = VecDeque::new();

    visited.insert(start);
    worklist.push_back(start);

    let mut reached = 0;
    while let Some(position) = worklist.pop_front() {
        reached += 1;
        for next in neighbours(position, size) {
            if grid.is_white_at(next) && visited.insert(next) {
                worklist.push_back(next);
            }
        }
    }

    reached
}

/// Whether every white cell can reach every other white cell
///
/// The traversal starts from the first white cell in row-major order. A
/// grid with no white cells is trivially connected.
pub fn is_fully_connected(grid: &Grid) -> bool {
    grid.white_positions()
        .next()
        .is_none_or(|start| reachable_from(grid, start) == grid.white_count())
}
