//! CSV export of scored runs for analysis tooling.
//!
//! One row per run.  Rows carry the problem class and instance id of the
//! scenario so that results of comparable instances can be grouped.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use pdp_scenario::Scenario;

use crate::{ObjectiveFunction, ObjectiveResult, Score, StatisticsDto};

const HEADER: [&str; 9] = [
    "problem_class",
    "instance_id",
    "replication",
    "seed",
    "objective",
    "valid",
    "cost",
    "total_distance",
    "total_tardiness",
];

/// A scored run, flattened for output.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub problem_class:   &'static str,
    pub instance_id:     String,
    pub replication:     u64,
    pub seed:            u64,
    pub objective:       &'static str,
    pub score:           Score,
    pub total_distance:  f64,
    pub total_tardiness: u64,
}

impl ResultRow {
    /// Score `stats` with `objective` and record it against `scenario`.
    pub fn from_run<O: ObjectiveFunction + ?Sized>(
        scenario:    &Scenario,
        replication: u64,
        seed:        u64,
        objective:   &O,
        stats:       &StatisticsDto,
    ) -> Self {
        Self {
            problem_class:   scenario.problem_class().id(),
            instance_id:     scenario.instance_id().to_owned(),
            replication,
            seed,
            objective:       objective.name(),
            score:           Score::of(objective, stats),
            total_distance:  stats.total_distance,
            total_tardiness: stats.total_tardiness(),
        }
    }
}

/// Writes [`ResultRow`]s as CSV.  Rows may be written after `finish`;
/// the next `finish` flushes them.
pub struct CsvResultWriter<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvResultWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn from_path(path: &Path) -> ObjectiveResult<Self> {
        Self::with_writer(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvResultWriter<W> {
    /// Wrap any `io::Write` and write the header row.
    pub fn new(writer: W) -> ObjectiveResult<Self> {
        Self::with_writer(Writer::from_writer(writer))
    }

    fn with_writer(mut inner: Writer<W>) -> ObjectiveResult<Self> {
        inner.write_record(HEADER)?;
        Ok(Self { inner, finished: false })
    }

    pub fn write_row(&mut self, row: &ResultRow) -> ObjectiveResult<()> {
        let cost = row.score.cost.map(|c| c.to_string()).unwrap_or_default();
        self.inner.write_record(&[
            row.problem_class.to_owned(),
            row.instance_id.clone(),
            row.replication.to_string(),
            row.seed.to_string(),
            row.objective.to_owned(),
            (row.score.valid as u8).to_string(),
            cost,
            row.total_distance.to_string(),
            row.total_tardiness.to_string(),
        ])?;
        self.finished = false;
        Ok(())
    }

    pub fn write_rows(&mut self, rows: &[ResultRow]) -> ObjectiveResult<()> {
        rows.iter().try_for_each(|r| self.write_row(r))
    }

    /// Flush buffered rows.  A second call with no rows written in between
    /// does nothing.
    ///
    /// Dropping the writer also flushes, but discards any error; call this
    /// before dropping to see it.
    pub fn finish(&mut self) -> ObjectiveResult<()> {
        if self.finished {
            return Ok(());
        }
        self.inner.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> ObjectiveResult<W> {
        self.finish()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}
