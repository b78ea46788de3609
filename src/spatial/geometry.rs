//! Center and point-symmetry helpers for square grids
//!
//! All functions assume an odd side length. Even sizes have no center cell
//! and are rejected by configuration validation before reaching this module.

/// Row and column of a cell, both 0-indexed
pub type Position = [usize; 2];

/// Index of the center row and column for a grid of the given side length
pub const fn center(size: usize) -> usize {
    size / 2
}

/// Position of the center cell
pub const fn center_position(size: usize) -> Position {
    let middle = center(size);
    [middle, middle]
}

/// Image of a cell under 180° rotation about the grid center
///
/// Positions outside the grid wrap around, so callers must pass
/// `position[0] < size` and `position[1] < size`.
pub const fn mirror(position: Position, size: usize) -> Position {
    [
        size.wrapping_sub(1).wrapping_sub(position[0]),
        size.wrapping_sub(1).wrapping_sub(position[1]),
    ]
}

/// Whether a position is its own mirror image
pub const fn is_self_mirrored(position: Position, size: usize) -> bool {
    let image = mirror(position, size);
    image[0] == position[0] && image[1] == position[1]
}
