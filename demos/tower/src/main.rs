//! tower: runs an elevator fleet in real time with random hall calls.
//!
//! A background `Ticker` drives the clock while the main thread plays the
//! part of the building's call buttons.  Per-tick output goes to
//! `output/tower/`, and the final fleet state is dumped as JSON.
//!
//! Usage: `tower [config.toml]`.  Log verbosity follows `RUST_LOG`.

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::{ElevatorId, FleetConfig};
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{CallOutcome, SimBuilder, Ticker};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:      &str = "output/tower";
const CALLS:           usize = 40;
const CALL_SPACING_MS: u64   = 30;
const SETTLE_TICKS:    u64   = 40;

fn default_config() -> FleetConfig {
    FleetConfig {
        floors:           12,
        elevators:        3,
        tick_interval_ms: 50,
        seed:             Some(42),
        ..FleetConfig::default()
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tower=info,lift_sim=info")),
        )
        .init();

    // 1. Config.
    let config = match std::env::args().nth(1) {
        Some(path) => FleetConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => default_config(),
    };
    println!("=== tower: elevator fleet simulator ===");
    println!(
        "Floors: {}  |  Cars: {}  |  Capacity: {}  |  Tick: {} ms",
        config.floors, config.elevators, config.capacity, config.tick_interval_ms
    );
    println!();

    // 2. Sim + output.
    let sim = Arc::new(SimBuilder::new(config.clone()).build()?);
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let observer = SimOutputObserver::new(writer, &config);

    // 3. Start the clock.
    let t0 = Instant::now();
    let ticker = Ticker::spawn_with(Arc::clone(&sim), config.tick_interval(), observer)?;

    // 4. Random hall calls, plus one manual override halfway through.
    let (mut assigned, mut dropped) = (0usize, 0usize);
    for i in 0..CALLS {
        match sim.submit_random_call()? {
            CallOutcome::Assigned { .. } => assigned += 1,
            CallOutcome::Dropped { .. }  => dropped += 1,
        }
        if i == CALLS / 2 {
            sim.send_to_floor(ElevatorId(0), i64::from(config.floors))?;
        }
        thread::sleep(Duration::from_millis(CALL_SPACING_MS));
    }

    // 5. Let the fleet work off what it has, then stop.
    thread::sleep(config.tick_interval() * SETTLE_TICKS as u32);
    let ticks = ticker.ticks();
    let mut observer = ticker.stop().context("ticker thread died")?;
    observer.finish();
    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }
    let elapsed = t0.elapsed();
    info!(ticks, assigned, dropped, "run complete");

    // 6. Summary.
    println!("Ran {ticks} ticks in {:.3} s", elapsed.as_secs_f64());
    println!("  calls assigned : {assigned}");
    println!("  calls dropped  : {dropped}");
    println!("  open requests  : {}", sim.list_floor_requests().len());
    println!();

    let cars = sim.list_elevators();
    println!("{:<6} {:<6} {:<7} {:<8} {:<6} {:<8}", "Car", "Floor", "Target", "Status", "Riders", "Pending");
    println!("{}", "-".repeat(46));
    for car in &cars {
        println!(
            "{:<6} {:<6} {:<7} {:<8} {:<6} {:<8}",
            car.id().0,
            car.current_floor().0,
            car.target_floor().map_or_else(|| "-".to_owned(), |f| f.0.to_string()),
            car.status(),
            car.passenger_count(),
            car.pending_pickups().len(),
        );
    }

    // 7. Final snapshot.
    let snapshot = Path::new(OUTPUT_DIR).join("final_fleet.json");
    std::fs::write(&snapshot, serde_json::to_string_pretty(&cars)?)?;
    println!();
    println!("Wrote {}", snapshot.display());

    Ok(())
}
