//! Batch progress display tracking generation slots and found patterns

use crate::algorithm::generator::Outcome;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Patterns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the slots of one batch
///
/// The bar advances once per generation call; the message counts how many
/// calls produced a pattern and how many ran out of attempts.
pub struct ProgressManager {
    bar: ProgressBar,
    found: usize,
    exhausted: usize,
}

impl ProgressManager {
    /// Create a bar for `requested` generation calls
    pub fn new(requested: usize) -> Self {
        let bar = ProgressBar::new(requested as u64);
        bar.set_style(BATCH_STYLE.clone());

        let manager = Self {
            bar,
            found: 0,
            exhausted: 0,
        };
        manager.refresh_message();
        manager
    }

    /// Hidden bar for quiet runs and tests
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            found: 0,
            exhausted: 0,
        }
    }

    /// Record the outcome of one generation call
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_found() {
            self.found += 1;
        } else {
            self.exhausted += 1;
        }
        self.bar.inc(1);
        self.refresh_message();
    }

    /// Patterns found so far
    pub const fn found(&self) -> usize {
        self.found
    }

    /// Calls that ran out of attempts so far
    pub const fn exhausted(&self) -> usize {
        self.exhausted
    }

    /// Slots processed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn refresh_message(&self) {
        self.bar
            .set_message(format!("found {} | exhausted {}", self.found, self.exhausted));
    }
}
