//! Sequential batch driver assembling numbered pattern records

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{info, warn};

use crate::algorithm::generator::{Outcome, PatternGenerator};
use crate::spatial::Grid;

/// Accepted grid paired with its 1-based position in the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRecord {
    /// Sequential identifier, contiguous from 1
    pub id: usize,
    /// The validated grid
    pub grid: Grid,
}

/// Records produced by one batch run
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Accepted patterns in generation order
    pub records: Vec<PatternRecord>,
    /// Number of generation calls requested
    pub requested: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of patterns produced
    pub fn produced(&self) -> usize {
        self.records.len()
    }

    /// Number of slots that ran out of attempts
    pub fn exhausted(&self) -> usize {
        self.requested.saturating_sub(self.produced())
    }

    /// Status line reporting produced versus requested patterns
    pub fn summary(&self) -> String {
        format!(
            "Generated {} of {} patterns in {:.1}s",
            self.produced(),
            self.requested,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Runs a generator a fixed number of times and numbers its successes
pub struct BatchDriver<R> {
    generator: PatternGenerator<R>,
    requested: usize,
}

impl<R: Rng> BatchDriver<R> {
    /// Create a driver that will make `requested` generation calls
    pub const fn new(generator: PatternGenerator<R>, requested: usize) -> Self {
        Self {
            generator,
            requested,
        }
    }

    /// Generator used by this driver
    pub const fn generator(&self) -> &PatternGenerator<R> {
        &self.generator
    }

    /// Run every slot, reporting each outcome to `observer`
    ///
    /// Exhausted slots are skipped; ids stay contiguous over the records
    /// actually produced.
    pub fn run<F>(&mut self, mut observer: F) -> BatchReport
    where
        F: FnMut(usize, &Outcome),
    {
        let start = Instant::now();
        let mut records = Vec::with_capacity(self.requested);

        for slot in 0..self.requested {
            let outcome = self.generator.generate();
            observer(slot, &outcome);

            match outcome {
                Outcome::Found { grid, .. } => records.push(PatternRecord {
                    id: records.len() + 1,
                    grid,
                }),
                Outcome::Exhausted { attempts } => {
                    warn!(slot = slot + 1, attempts, "no pattern found, skipping slot");
                }
            }
        }

        let report = BatchReport {
            records,
            requested: self.requested,
            elapsed: start.elapsed(),
        };

        let stats = &self.generator.stats;
        info!(
            produced = report.produced(),
            requested = report.requested,
            attempts = stats.attempts,
            rejected_count = stats.rejections.black_count,
            rejected_singleton = stats.rejections.isolated_singleton,
            rejected_overlong = stats.rejections.overlong_run,
            rejected_disconnected = stats.rejections.disconnected,
            "batch complete"
        );

        report
    }
}
