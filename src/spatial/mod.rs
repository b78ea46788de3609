//! Spatial data structures for square puzzle grids
//!
//! This module contains:
//! - Center and mirror geometry
//! - The black/white grid value type
//! - Half-grid enumeration and caching

/// Center and 180° rotation helpers
pub mod geometry;
/// Black/white cell matrix
pub mod grid;
/// Half-grid sampling universe
pub mod half;

pub use grid::{Cell, Grid};
pub use half::{HalfGrid, HalfGridCache};
