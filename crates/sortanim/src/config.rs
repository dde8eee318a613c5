//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use sortanim_core::constants::DEFAULT_STEP_DELAY_MS;
use sortanim_core::generator::{generate_random, generate_seeded};
use sortanim_core::{EngineOptions, NumberSequence, Pacing, SortError};

/// SortAnim: watch quicksort work, one exchange at a time.
#[derive(Parser, Debug)]
#[command(name = "sortanim", version, about)]
pub struct AppConfig {
    /// How many numbers to generate.
    #[arg(
        short = 'n',
        long,
        default_value = "20",
        env = "SORTANIM_COUNT",
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Comma-separated numbers to sort instead of generated ones.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Option<Vec<i32>>,

    /// Seed for reproducible generation.
    #[arg(long, env = "SORTANIM_SEED")]
    pub seed: Option<u64>,

    /// Display delay per step in milliseconds (refreshes hold half as long).
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS, env = "SORTANIM_DELAY_MS")]
    pub delay_ms: u64,

    /// Consecutive runs; each run sorts in the opposite direction.
    #[arg(long, default_value = "1")]
    pub runs: usize,

    /// Also show each comparison against the pivot.
    #[arg(long)]
    pub show_comparisons: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Quiet mode (only print the values after each run).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write every step as JSON Lines to this file.
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Write logs to this file (the only log output in TUI mode).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Reject settings no run can use.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.runs == 0 {
            return Err(SortError::Config("--runs must be at least 1".into()));
        }
        if self.values.as_ref().is_some_and(Vec::is_empty) {
            return Err(SortError::Config("--values needs at least one number".into()));
        }
        Ok(())
    }

    /// Display pacing derived from `--delay-ms`.
    #[must_use]
    pub fn pacing(&self) -> Pacing {
        Pacing::from_step_delay(Duration::from_millis(self.delay_ms)).normalize()
    }

    /// Which frames the engine emits.
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            show_comparisons: self.show_comparisons,
            ..EngineOptions::default()
        }
    }

    /// The sequence to animate: `--values` if given, otherwise generated.
    pub fn initial_sequence(&self) -> Result<NumberSequence, SortError> {
        if let Some(values) = &self.values {
            return Ok(NumberSequence::new(values.clone()));
        }
        let count = usize::try_from(self.count)
            .ok()
            .filter(|&c| c > 0)
            .ok_or(SortError::InvalidCount(self.count))?;
        match self.seed {
            Some(seed) => generate_seeded(count, seed),
            None => generate_random(count),
        }
    }
}
