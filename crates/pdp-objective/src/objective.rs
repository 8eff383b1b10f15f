//! The `ObjectiveFunction` trait — one scoring policy per problem family.

use crate::{ObjectiveError, ObjectiveResult, StatisticsDto};

/// Stateless evaluator of run statistics.
///
/// # Contract
///
/// - All methods are pure functions of `stats`: identical input gives
///   identical output, on any thread, in any process.
/// - Implementations keep no mutable state.  Every method takes `&self`
///   and the trait requires `Send + Sync + 'static`, so one instance may be
///   shared by any number of concurrent scorers.
///
///   The bound cannot rule out interior mutability: a `Mutex` or an atomic
///   field is still `Sync`, and stable Rust has no trait for "contains no
///   `UnsafeCell`".  `Copy` would come close but makes the trait unusable
///   as `dyn ObjectiveFunction`, which the registry hands out.  The built-in
///   objectives are all `Copy`; new ones should be too.
/// - [`compute_cost`][Self::compute_cost] returns
///   [`ObjectiveError::InvalidResult`] for stats that
///   [`is_valid_result`][Self::is_valid_result] rejects.  It never returns a
///   number for an invalid run.
/// - [`human_readable_format`][Self::human_readable_format] never fails.
///
/// # Example
///
/// ```rust,ignore
/// struct DeliveredParcels;
///
/// impl ObjectiveFunction for DeliveredParcels {
///     fn name(&self) -> &'static str { "delivered" }
///     fn is_valid_result(&self, stats: &StatisticsDto) -> bool { stats.sim_finished }
///     fn compute_cost(&self, stats: &StatisticsDto) -> ObjectiveResult<f64> {
///         self.check(stats)?;
///         Ok(-(stats.total_deliveries as f64))
///     }
/// }
/// ```
pub trait ObjectiveFunction: Send + Sync + 'static {
    /// Short identifier used in errors and reports.
    fn name(&self) -> &'static str;

    /// `true` if the run is eligible for scoring under this family's rules.
    fn is_valid_result(&self, stats: &StatisticsDto) -> bool;

    /// The scalar cost of a valid run.  Lower is better.
    fn compute_cost(&self, stats: &StatisticsDto) -> ObjectiveResult<f64>;

    /// A deterministic multi-line report of `stats` and its cost.
    ///
    /// Default: the objective name, the cost (or `INVALID`), then the stats.
    fn human_readable_format(&self, stats: &StatisticsDto) -> String {
        let verdict = match self.compute_cost(stats) {
            Ok(cost) => format!("cost: {cost:.3}"),
            Err(_) => "cost: INVALID (run not eligible for scoring)".to_owned(),
        };
        format!("[{}]\n{verdict}\n{stats}", self.name())
    }

    /// `Err(InvalidResult)` unless `stats` is valid.  Implementations call
    /// this first in `compute_cost`.
    fn check(&self, stats: &StatisticsDto) -> ObjectiveResult<()> {
        if self.is_valid_result(stats) {
            Ok(())
        } else {
            Err(ObjectiveError::InvalidResult { objective: self.name() })
        }
    }
}
