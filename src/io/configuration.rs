//! Reference constants and runtime configuration defaults

// Grid shape and acceptance bounds
/// Side length of the reference grid
pub const DEFAULT_GRID_SIZE: usize = 13;
/// Black cells in the reference grid, center included
pub const DEFAULT_BLACK_CELLS: usize = 25;
/// Longest white run allowed in the reference grid
pub const DEFAULT_MAX_RUN: usize = 10;

// Safety limit to keep a single search bounded
/// Sample-build-validate cycles per generation call
pub const DEFAULT_ATTEMPT_CEILING: usize = 400_000;

// Keeps per-attempt allocation small
/// Largest accepted grid side length
pub const MAX_GRID_SIZE: usize = 101;

/// Generation calls per batch
pub const DEFAULT_BATCH_SIZE: usize = 100;

// Output settings
/// File name of the saved document
pub const DEFAULT_OUTPUT_FILE: &str = "crucigramas.json";
/// Document marker for a black cell
pub const BLACK_MARKER: &str = "#";
/// Document marker for a white cell
pub const WHITE_MARKER: &str = "";
/// Indentation unit of the rendered document
pub const DOCUMENT_INDENT: &str = "    ";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
