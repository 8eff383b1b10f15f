//! fabri_recht — end-to-end demo of the pdptw scenario and scoring crates.
//!
//! Builds one hand-written Fabri & Recht instance plus a batch of seeded
//! generated instances, plays each through a toy dispatcher, scores the
//! resulting statistics with the family's objective function, and writes
//! one CSV row per run.

mod driver;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, fmt};

use pdp_core::{ParcelDto, Point, Tick, TimeWindow, VehicleDto};
use pdp_objective::{CsvResultWriter, ExperimentConfig, ObjectiveFunction, ResultRow, objective_for, score_batch};
use pdp_scenario::{GeneratorConfig, Scenario, TimedEvent, fabri_recht, generate};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64 = 42;
const REPLICATIONS: u64 = 8;
const HORIZON_MIN:  u64 = 480; // one working day, in one-minute ticks

// ── Instances ─────────────────────────────────────────────────────────────────

/// A small Fabri & Recht instance on a 50 km × 50 km plane.
fn fabri_recht_instance() -> Result<Scenario> {
    let min = Point::new(0.0, 0.0);
    let max = Point::new(50.0, 50.0);
    let depot = Point::new(25.0, 25.0);
    let day = TimeWindow::new(Tick::ZERO, Tick(HORIZON_MIN))?;
    let vehicle = VehicleDto::new(depot, 1.0, 4, day);

    // (pickup, delivery, announce, pickup window, delivery window)
    let orders = [
        ((5.0, 5.0),   (40.0, 10.0), 0,   (0, 60),    (30, 120)),
        ((45.0, 45.0), (10.0, 40.0), 15,  (20, 90),   (60, 180)),
        ((20.0, 30.0), (30.0, 20.0), 60,  (60, 120),  (90, 200)),
        ((1.0, 49.0),  (49.0, 1.0),  120, (120, 150), (150, 240)),
        ((33.0, 12.0), (25.0, 25.0), 200, (200, 260), (220, 320)),
        ((12.0, 18.0), (44.0, 36.0), 300, (300, 330), (330, 420)),
    ];

    let mut events = vec![
        TimedEvent::depot(Tick::ZERO, depot),
        TimedEvent::vehicle(Tick::ZERO, vehicle),
        TimedEvent::vehicle(Tick::ZERO, vehicle),
    ];
    for ((px, py), (dx, dy), announce, (pb, pe), (db, de)) in orders {
        let parcel = ParcelDto::new(Point::new(px, py), Point::new(dx, dy))
            .with_windows(TimeWindow::new(Tick(pb), Tick(pe))?, TimeWindow::new(Tick(db), Tick(de))?)
            .with_announce_time(Tick(announce))
            .with_durations(5, 5);
        events.push(TimedEvent::parcel(parcel));
    }
    events.push(TimedEvent::time_out(Tick(HORIZON_MIN)));

    Ok(fabri_recht(events, min, max, day, vehicle)?)
}

fn objective(scenario: &Scenario) -> Result<&'static dyn ObjectiveFunction> {
    objective_for(scenario.problem_class())
        .with_context(|| format!("no objective for problem class {}", scenario.problem_class()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::Layer::new().with_writer(io::stdout).with_filter(LevelFilter::INFO));
    tracing::subscriber::set_global_default(subscriber)?;

    let out_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fabri_recht_results.csv"));

    println!("=== fabri_recht — pdptw scenario demo ===");
    println!("Seed: {SEED}  |  Replications: {REPLICATIONS}  |  Output: {}", out_path.display());
    println!();

    let mut rows = Vec::new();

    // 1. Hand-written Fabri & Recht instance.
    let scenario = fabri_recht_instance()?;
    info!(
        class = %scenario.problem_class(),
        instance = scenario.instance_id(),
        events = scenario.events().len(),
        stop = %scenario.stop_condition(),
        "built scenario"
    );
    let stats = driver::run(&scenario)?;
    let obj = objective(&scenario)?;
    println!("{}", obj.human_readable_format(&stats));
    println!();
    rows.push(ResultRow::from_run(&scenario, 0, 0, obj, &stats));

    // 2. Seeded generated instances, scored as one batch.
    let config = ExperimentConfig { master_seed: SEED, replications: REPLICATIONS, num_threads: None };
    let generator = GeneratorConfig::default();
    let mut runs = Vec::new();
    for (replication, seed) in config.seeds() {
        let scenario = generate(&generator, seed)?;
        let stats = driver::run(&scenario)?;
        runs.push((replication, seed, scenario, stats));
    }

    if let Some((_, _, first, _)) = runs.first() {
        let obj = objective(first)?;
        let all: Vec<_> = runs.iter().map(|(_, _, _, stats)| stats.clone()).collect();
        let scores = score_batch(&config, obj, &all)?;
        for ((replication, seed, scenario, stats), score) in runs.iter().zip(&scores) {
            let cost = score.cost.map_or_else(|| "INVALID".to_owned(), |c| format!("{c:.3}"));
            println!("{} #{replication:<2} seed {seed:>20}  cost {cost}", scenario.instance_id());
            rows.push(ResultRow::from_run(scenario, *replication, *seed, obj, stats));
        }
    }

    // 3. Export.
    let mut writer = CsvResultWriter::from_path(&out_path)?;
    writer.write_rows(&rows)?;
    writer.finish()?;
    info!(rows = rows.len(), path = %out_path.display(), "wrote results");

    Ok(())
}
