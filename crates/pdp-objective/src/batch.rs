//! Scoring many runs at once.
//!
//! Each run is scored independently with a shared `&dyn ObjectiveFunction`;
//! there is no state shared between scorings, so the parallel and sequential
//! paths return identical `Vec<Score>`s in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

use pdp_core::replication_seed;

use crate::{ObjectiveFunction, ObjectiveResult, StatisticsDto};

// ── ExperimentConfig ──────────────────────────────────────────────────────────

/// Batch-experiment configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub master_seed: u64,

    /// Number of replications per scenario family.
    pub replications: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl ExperimentConfig {
    /// `(replication index, seed)` for every replication, in order.
    pub fn seeds(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        (0..self.replications).map(|i| (i, replication_seed(self.master_seed, i)))
    }
}

// ── Score ─────────────────────────────────────────────────────────────────────

/// Verdict for one run.  `cost` is `Some` exactly when `valid` is `true`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub valid: bool,
    pub cost:  Option<f64>,
}

impl Score {
    /// Score one run.
    pub fn of<O: ObjectiveFunction + ?Sized>(objective: &O, stats: &StatisticsDto) -> Score {
        match objective.compute_cost(stats) {
            Ok(cost) => Score { valid: true, cost: Some(cost) },
            Err(_) => Score { valid: false, cost: None },
        }
    }
}

// ── Batch scoring ─────────────────────────────────────────────────────────────

/// Score every run in `runs`, preserving order.
///
/// With the `parallel` feature the work runs on Rayon's global pool.
pub fn score_all<O: ObjectiveFunction + ?Sized>(objective: &O, runs: &[StatisticsDto]) -> Vec<Score> {
    #[cfg(feature = "parallel")]
    let scores: Vec<Score> = runs.par_iter().map(|s| Score::of(objective, s)).collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<Score> = runs.iter().map(|s| Score::of(objective, s)).collect();

    let invalid = scores.iter().filter(|s| !s.valid).count();
    if invalid > 0 {
        warn!(objective = objective.name(), invalid, total = scores.len(), "invalid runs in batch");
    }
    info!(objective = objective.name(), runs = scores.len(), "scored batch");
    scores
}

/// [`score_all`] on a dedicated pool sized by `config.num_threads`.
pub fn score_batch<O: ObjectiveFunction + ?Sized>(
    config:    &ExperimentConfig,
    objective: &O,
    runs:      &[StatisticsDto],
) -> ObjectiveResult<Vec<Score>> {
    #[cfg(feature = "parallel")]
    {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = config.num_threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;
        Ok(pool.install(|| score_all(objective, runs)))
    }

    #[cfg(not(feature = "parallel"))]
    {
        let _ = config;
        Ok(score_all(objective, runs))
    }
}
