//! Rejection-sampling search for point-symmetric fill patterns
//!
//! Every attempt walks the same cycle: sample a placement from the
//! half-grid, build a fresh grid from it, validate, then either return the
//! grid or discard it and try again. The attempt ceiling bounds the search
//! for configurations whose solution space is tiny or empty.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, trace};

use crate::algorithm::validation::{Constraints, Rejection};
use crate::io::configuration::{
    DEFAULT_ATTEMPT_CEILING, DEFAULT_BLACK_CELLS, DEFAULT_GRID_SIZE, DEFAULT_MAX_RUN,
    MAX_GRID_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::geometry::{Position, center_position, is_self_mirrored};
use crate::spatial::{Cell, Grid, HalfGrid, HalfGridCache};

/// Parameters of a single generation call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternConfig {
    /// Grid side length (odd)
    pub size: usize,
    /// Exact number of black cells, center included
    pub black_target: usize,
    /// Longest permitted white run
    pub max_run: usize,
    /// Attempts before giving up
    pub attempt_ceiling: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            black_target: DEFAULT_BLACK_CELLS,
            max_run: DEFAULT_MAX_RUN,
            attempt_ceiling: DEFAULT_ATTEMPT_CEILING,
        }
    }
}

impl PatternConfig {
    /// Reject configurations that cannot be searched
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `size` is zero, even, or above `MAX_GRID_SIZE`
    /// - `black_target` is zero, even, or larger than the cell count
    /// - `max_run` or `attempt_ceiling` is zero
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size % 2 == 0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"grid needs an odd side length to have a center cell",
            ));
        }
        if self.size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must not exceed {MAX_GRID_SIZE}"),
            ));
        }
        if self.black_target == 0 || self.black_target % 2 == 0 {
            return Err(invalid_parameter(
                "black_target",
                &self.black_target,
                &"forced center plus mirrored pairs always gives an odd count",
            ));
        }
        if self.black_target > self.size * self.size {
            return Err(invalid_parameter(
                "black_target",
                &self.black_target,
                &format!("grid only has {} cells", self.size * self.size),
            ));
        }
        if self.max_run == 0 {
            return Err(invalid_parameter(
                "max_run",
                &self.max_run,
                &"must be positive",
            ));
        }
        if self.attempt_ceiling == 0 {
            return Err(invalid_parameter(
                "attempt_ceiling",
                &self.attempt_ceiling,
                &"must be positive",
            ));
        }
        Ok(())
    }

    /// Validation bounds derived from this configuration
    pub const fn constraints(&self) -> Constraints {
        Constraints {
            black_target: self.black_target,
            max_run: self.max_run,
        }
    }

    /// Mirrored pairs to place besides the center cell
    pub const fn pairs_needed(&self) -> usize {
        self.black_target.saturating_sub(1) / 2
    }
}

/// Result of one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A grid passed validation
    Found {
        /// The accepted grid
        grid: Grid,
        /// Attempts used, including the successful one
        attempts: usize,
    },
    /// The attempt ceiling was reached without an acceptable grid
    Exhausted {
        /// Attempts used
        attempts: usize,
    },
}

impl Outcome {
    /// Attempts consumed by the call
    pub const fn attempts(&self) -> usize {
        match self {
            Self::Found { attempts, .. } | Self::Exhausted { attempts } => *attempts,
        }
    }

    /// Whether a grid was found
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Take the accepted grid, if any
    pub fn into_grid(self) -> Option<Grid> {
        match self {
            Self::Found { grid, .. } => Some(grid),
            Self::Exhausted { .. } => None,
        }
    }
}

/// Rejections tallied by failing check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    /// Wrong number of black cells
    pub black_count: usize,
    /// One-cell white run present
    pub isolated_singleton: usize,
    /// White run too long
    pub overlong_run: usize,
    /// White region split
    pub disconnected: usize,
}

impl RejectionCounts {
    /// Count one rejection
    pub const fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::BlackCount { .. } => self.black_count += 1,
            Rejection::IsolatedSingleton => self.isolated_singleton += 1,
            Rejection::OverlongRun => self.overlong_run += 1,
            Rejection::Disconnected => self.disconnected += 1,
        }
    }

    /// Total rejections across all checks
    pub const fn total(&self) -> usize {
        self.black_count + self.isolated_singleton + self.overlong_run + self.disconnected
    }
}

/// Cumulative search statistics across generation calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Sample-build-validate cycles run
    pub attempts: usize,
    /// Calls that returned a grid
    pub accepted: usize,
    /// Calls that hit the attempt ceiling
    pub exhausted: usize,
    /// Breakdown of failed attempts
    pub rejections: RejectionCounts,
}

/// Randomized generator of valid fill patterns
///
/// Owns its random source so tests can inject a seeded one. The half-grid
/// is computed once per size and reused across calls; everything else is
/// rebuilt per attempt.
pub struct PatternGenerator<R> {
    config: PatternConfig,
    rng: R,
    half_cache: HalfGridCache,
    scratch: Vec<Position>,
    /// Statistics accumulated since construction
    pub stats: GenerationStats,
}

impl<R: Rng> PatternGenerator<R> {
    /// Create a generator over a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: PatternConfig, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            rng,
            half_cache: HalfGridCache::new(),
            scratch: Vec::new(),
            stats: GenerationStats::default(),
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Search for one valid grid
    ///
    /// Never fails: running out of attempts is reported as
    /// `Outcome::Exhausted`.
    pub fn generate(&mut self) -> Outcome {
        let half = self.half_cache.get(self.config.size);
        let constraints = self.config.constraints();

        for attempt in 1..=self.config.attempt_ceiling {
            self.stats.attempts += 1;

            let grid = self.build_candidate(&half);
            match constraints.check(&grid) {
                Ok(()) => {
                    self.stats.accepted += 1;
                    trace!(attempt, "pattern accepted");
                    return Outcome::Found {
                        grid,
                        attempts: attempt,
                    };
                }
                Err(rejection) => self.stats.rejections.record(&rejection),
            }
        }

        self.stats.exhausted += 1;
        debug!(
            attempts = self.config.attempt_ceiling,
            size = self.config.size,
            black_target = self.config.black_target,
            "search exhausted without a valid pattern"
        );
        Outcome::Exhausted {
            attempts: self.config.attempt_ceiling,
        }
    }

    /// Sample a fresh placement and expand it into a symmetric grid
    fn build_candidate(&mut self, half: &HalfGrid) -> Grid {
        let pairs = self.config.pairs_needed().min(half.len());

        self.scratch.clear();
        self.scratch.extend_from_slice(half.positions());
        let (placement, _) = self.scratch.partial_shuffle(&mut self.rng, pairs);

        let mut grid = Grid::new(self.config.size);
        grid.set(center_position(self.config.size), Cell::Black);
        for &position in placement.iter() {
            debug_assert!(half.contains(position));
            debug_assert!(!is_self_mirrored(position, self.config.size));
            grid.set_symmetric(position, Cell::Black);
        }
        grid
    }
}

impl PatternGenerator<StdRng> {
    /// Generator with a reproducible random sequence
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn seeded(config: PatternConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn from_entropy(config: PatternConfig) -> Result<Self> {
        Self::new(config, StdRng::from_os_rng())
    }
}

/// One-shot generation with a caller-supplied random source
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration fails validation; search
/// exhaustion is an `Ok` outcome
pub fn generate<R: Rng>(config: PatternConfig, rng: &mut R) -> Result<Outcome> {
    let mut generator = PatternGenerator::new(config, rng)?;
    Ok(generator.generate())
}
