#![forbid(unsafe_code)]

use log::debug;
use percolation::Percolation;
use rand::Rng;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

const CONFIDENCE_COEFFICIENT_95: f64 = 1.96;

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("trial count must be positive")]
    InvalidTrialCount,

    #[error(transparent)]
    Grid(#[from] percolation::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////

/// Percolation thresholds observed over a series of independent trials.
///
/// Each trial opens uniformly random sites of a fresh N-by-N grid until it
/// percolates and records how many sites were open at that moment. Only the
/// raw counts are stored; every statistic is derived from them at read time.
#[derive(Debug)]
pub struct PercolationStats {
    dimension: usize,
    open_counts: Vec<usize>,
}

/// Bounds of a 95% confidence interval around the mean threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

impl PercolationStats {
    /// Runs `trials` independent trials on grids of the given dimension,
    /// drawing coordinates from the thread-local random generator.
    ///
    /// # Errors
    ///
    /// `Error::InvalidTrialCount` if `trials` is zero, or the grid error for
    /// a zero dimension. Either way no trial is executed.
    pub fn run(dimension: usize, trials: usize) -> Result<Self> {
        Self::run_with(dimension, trials, &mut rand::thread_rng())
    }

    /// Same as [`run`](Self::run), but draws from the given generator.
    /// A seeded generator makes the whole run reproducible.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_with<R: Rng>(dimension: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if trials == 0 {
            return Err(Error::InvalidTrialCount);
        }

        let mut open_counts = Vec::with_capacity(trials);

        for trial in 1..=trials {
            let open_count = run_trial(dimension, rng)?;
            debug!("trial {trial}: percolated after {open_count} open sites");
            open_counts.push(open_count);
        }

        Ok(Self {
            dimension,
            open_counts,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn trials(&self) -> usize {
        self.open_counts.len()
    }

    /// Per-trial thresholds: the fraction of sites open at the moment the
    /// grid first percolated.
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        let site_count = (self.dimension * self.dimension) as f64;

        self.open_counts
            .iter()
            .map(move |&count| count as f64 / site_count)
    }

    /// Arithmetic mean of the thresholds.
    pub fn mean(&self) -> f64 {
        self.thresholds().sum::<f64>() / self.trials() as f64
    }

    /// Sample standard deviation of the thresholds.
    /// A single-trial run has no dispersion estimate: the result is NaN.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squared_deviations: f64 = self
            .thresholds()
            .map(|threshold| (threshold - mean).powi(2))
            .sum();

        (squared_deviations / (self.trials() - 1) as f64).sqrt()
    }

    /// 95% confidence interval of the mean threshold.
    pub fn confidence_interval_95(&self) -> ConfidenceInterval {
        let mean = self.mean();
        let margin = CONFIDENCE_COEFFICIENT_95 * self.stddev() / (self.trials() as f64).sqrt();

        ConfidenceInterval {
            low: mean - margin,
            high: mean + margin,
        }
    }
}

fn run_trial<R: Rng>(dimension: usize, rng: &mut R) -> Result<usize> {
    let mut grid = Percolation::new(dimension)?;

    while !grid.percolates() {
        let row = rng.gen_range(1..=dimension);
        let column = rng.gen_range(1..=dimension);

        if !grid.is_open(row, column)? {
            grid.open(row, column)?;
        }
    }

    Ok(grid.open_sites())
}

////////////////////////////////////////////////////////////////////////////////
