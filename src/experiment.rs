//! Experiment driver
//!
//! Runs heap sort over random sequences of sizes `10^min_exponent` through
//! `10^max_exponent`, several trials per size, and compares the mean
//! operation count against `n log n`.

use std::ops::ControlFlow;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;

use crate::bound::n_log_n;
use crate::config::ExperimentConfig;
use crate::generate::random_sequence_with;
use crate::sort::{heap_sort_with, OpCounter};

/// Upper bound on trials per size
pub const MAX_TRIALS: usize = 1_000_000;

/// Experiment errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExperimentError {
    #[error("min_exponent ({min}) is greater than max_exponent ({max})")]
    InvalidRange { min: u32, max: u32 },

    #[error("trials must be at least 1")]
    NoTrials,

    #[error("trials ({trials}) exceeds the maximum of {max}")]
    TooManyTrials { trials: usize, max: usize },

    #[error("array size 10^{0} does not fit in usize")]
    SizeOverflow(u32),
}

/// Result type for experiment operations.
pub type ExperimentResult<T> = Result<T, ExperimentError>;

/// Measurements for one array size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeReport {
    /// Array size
    pub size: usize,
    /// Operation count of every trial, in run order
    pub counts: Vec<u64>,
    /// Event breakdown summed over all trials
    pub totals: OpCounter,
    /// Arithmetic mean of `counts`
    pub mean: f64,
    /// `floor(log2(size) * size)`
    pub expected: u64,
    /// `mean / expected`, absent when `expected` is 0
    pub ratio: Option<f64>,
}

impl SizeReport {
    fn from_counts(size: usize, counts: Vec<u64>, totals: OpCounter) -> Self {
        let mean = if counts.is_empty() {
            0.0
        } else {
            counts.iter().sum::<u64>() as f64 / counts.len() as f64
        };
        let expected = n_log_n(size as u64);
        let ratio = (expected > 0).then(|| mean / expected as f64);
        Self {
            size,
            counts,
            totals,
            mean,
            expected,
            ratio,
        }
    }
}

/// Full experiment result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    /// Trials run per size
    pub trials: usize,
    /// Seed the run was made with, if any
    pub seed: Option<u64>,
    /// One entry per size, smallest first
    pub sizes: Vec<SizeReport>,
}

/// A validated experiment.
#[derive(Debug, Clone)]
pub struct Experiment {
    config: ExperimentConfig,
    sizes: Vec<usize>,
}

impl Experiment {
    /// Validate `config` and compute the sizes to run.
    pub fn new(config: ExperimentConfig) -> ExperimentResult<Self> {
        if config.min_exponent > config.max_exponent {
            return Err(ExperimentError::InvalidRange {
                min: config.min_exponent,
                max: config.max_exponent,
            });
        }
        if config.trials == 0 {
            return Err(ExperimentError::NoTrials);
        }
        if config.trials > MAX_TRIALS {
            return Err(ExperimentError::TooManyTrials {
                trials: config.trials,
                max: MAX_TRIALS,
            });
        }

        let sizes = (config.min_exponent..=config.max_exponent)
            .map(|exp| 10usize.checked_pow(exp).ok_or(ExperimentError::SizeOverflow(exp)))
            .collect::<ExperimentResult<Vec<_>>>()?;

        Ok(Self { config, sizes })
    }

    /// Array sizes in run order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Experiment settings.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Random source for this experiment: seeded when configured, fresh otherwise.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Run every trial for a single size.
    pub fn measure<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> SizeReport {
        let mut counts = Vec::with_capacity(self.config.trials);
        let mut totals = OpCounter::new();

        for trial in 0..self.config.trials {
            let mut seq = random_sequence_with(rng, size);
            let mut ops = OpCounter::new();
            heap_sort_with(&mut seq, &mut ops);
            tracing::trace!(size, trial, ops = ops.total(), "trial complete");

            counts.push(ops.total());
            totals += ops;
        }

        let report = SizeReport::from_counts(size, counts, totals);
        tracing::debug!(
            size,
            mean = report.mean,
            expected = report.expected,
            "size complete"
        );
        report
    }

    /// Run the experiment, calling `on_size` as each size finishes.
    ///
    /// Returning [`ControlFlow::Break`] from `on_size` stops the run; the
    /// report then holds only the sizes measured so far.
    pub fn run_with<F>(&self, mut on_size: F) -> ExperimentReport
    where
        F: FnMut(&SizeReport) -> ControlFlow<()>,
    {
        let mut rng = self.rng();
        let mut sizes = Vec::with_capacity(self.sizes.len());

        tracing::info!(
            sizes = self.sizes.len(),
            trials = self.config.trials,
            seed = ?self.config.seed,
            "starting experiment"
        );

        for &size in &self.sizes {
            let report = self.measure(size, &mut rng);
            let flow = on_size(&report);
            sizes.push(report);
            if flow.is_break() {
                tracing::debug!(size, "experiment stopped early");
                break;
            }
        }

        ExperimentReport {
            trials: self.config.trials,
            seed: self.config.seed,
            sizes,
        }
    }

    /// Run the experiment to completion.
    pub fn run(&self) -> ExperimentReport {
        self.run_with(|_| ControlFlow::Continue(()))
    }
}
