//! Randomized generator of black/white fill patterns for square crossword grids
//!
//! Patterns are point-symmetric, hold an exact number of black cells, keep
//! every white run between two cells and a configured maximum, and leave all
//! white cells connected. Batches of patterns are saved as a JSON document.

#![forbid(unsafe_code)]

/// Pattern search, validation and batch driving
pub mod algorithm;
/// Document I/O, configuration, CLI and error handling
pub mod io;
/// Grid geometry and the cell matrix
pub mod spatial;

pub use algorithm::batch::{BatchDriver, BatchReport, PatternRecord};
pub use algorithm::generator::{Outcome, PatternConfig, PatternGenerator, generate};
pub use io::error::{PatternError, Result};
pub use spatial::{Cell, Grid};
