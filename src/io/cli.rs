//! Command-line interface for generating and checking pattern documents

use crate::algorithm::batch::{BatchDriver, BatchReport};
use crate::algorithm::generator::{PatternConfig, PatternGenerator};
use crate::io::configuration::{
    DEFAULT_ATTEMPT_CEILING, DEFAULT_BATCH_SIZE, DEFAULT_BLACK_CELLS, DEFAULT_GRID_SIZE,
    DEFAULT_MAX_RUN, DEFAULT_OUTPUT_FILE,
};
use crate::io::document::{read_document, write_document};
use crate::io::error::{PatternError, Result};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crosspattern")]
#[command(
    author,
    version,
    about = "Generate point-symmetric crossword fill patterns"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Grid side length (odd)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Exact number of black cells, center included (odd)
    #[arg(short, long, default_value_t = DEFAULT_BLACK_CELLS)]
    pub black: usize,

    /// Longest allowed white run in any row or column
    #[arg(short, long, default_value_t = DEFAULT_MAX_RUN)]
    pub max_run: usize,

    /// Attempts per pattern before giving up
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPT_CEILING)]
    pub attempts: usize,

    /// Number of patterns to request
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub count: usize,

    /// Random seed for reproducible batches (system entropy when absent)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output document path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Validate an existing document instead of generating
    #[arg(long, value_name = "FILE")]
    pub check: Option<PathBuf>,

    /// Log every accepted grid
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Generation parameters assembled from the flags
    pub const fn pattern_config(&self) -> PatternConfig {
        PatternConfig {
            size: self.size,
            black_target: self.black,
            max_run: self.max_run,
            attempt_ceiling: self.attempts,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter matching the verbosity flag
    pub fn log_filter(&self) -> EnvFilter {
        match self.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    }
}

/// Install the global tracing subscriber for the binary
pub fn init_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a batch or a document check according to the CLI arguments
pub struct PatternApp {
    cli: Cli,
}

impl PatternApp {
    /// Create an application for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested mode
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the document cannot
    /// be written or read, or a checked document contains invalid patterns
    pub fn process(&self) -> Result<()> {
        match &self.cli.check {
            Some(path) => self.check_document(path),
            None => self.generate_document().map(|_| ()),
        }
    }

    /// Run a batch and save the document
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the document
    /// cannot be written
    pub fn generate_document(&self) -> Result<BatchReport> {
        let config = self.cli.pattern_config();
        let generator = match self.cli.seed {
            Some(seed) => PatternGenerator::seeded(config, seed)?,
            None => PatternGenerator::from_entropy(config)?,
        };

        info!(
            size = config.size,
            black_target = config.black_target,
            max_run = config.max_run,
            attempt_ceiling = config.attempt_ceiling,
            requested = self.cli.count,
            "starting batch"
        );

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.count)
        } else {
            ProgressManager::hidden()
        };

        let mut driver = BatchDriver::new(generator, self.cli.count);
        let report = driver.run(|_, outcome| progress.record(outcome));
        progress.finish();

        if self.cli.preview {
            for record in &report.records {
                info!("pattern {}:\n{}", record.id, record.grid);
            }
        }

        write_document(&self.cli.output, &report.records)?;
        Self::announce(&format!(
            "{}, saved to {}",
            report.summary(),
            self.cli.output.display()
        ));

        Ok(report)
    }

    /// Re-validate every pattern stored in a document
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or any pattern fails
    /// validation against the configured constraints
    pub fn check_document(&self, path: &Path) -> Result<()> {
        let config = self.cli.pattern_config();
        config.validate()?;
        let constraints = config.constraints();

        let records = read_document(path)?;
        let mut invalid = 0;

        for record in &records {
            let size = record.grid.size();
            let verdict = if size == config.size {
                constraints.check(&record.grid).map_err(|r| r.to_string())
            } else {
                Err(format!("size {size}, expected {}", config.size))
            };

            if let Err(reason) = verdict {
                invalid += 1;
                warn!(id = record.id, %reason, "invalid pattern");
            }
        }

        if invalid > 0 {
            return Err(PatternError::MalformedDocument {
                reason: format!("{invalid} of {} patterns failed validation", records.len()),
            });
        }

        Self::announce(&format!(
            "All {} patterns in {} are valid",
            records.len(),
            path.display()
        ));
        Ok(())
    }

    // Status line is the tool's primary output
    #[allow(clippy::print_stdout)]
    fn announce(message: &str) {
        println!("{message}");
    }
}
