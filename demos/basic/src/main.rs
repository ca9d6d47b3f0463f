//! basic: one simulated day at a three-runway airport.
//!
//! Usage: `basic [-v|-vv|-vvv] [params.json] [output_dir]`
//!
//! Without a params file the defaults of `SimulationParams` are used with a
//! fixed seed.  When an output directory is given, `events.csv` and
//! `queue_snapshots.csv` are written there as well.  `demos/basic/params.json`
//! is a sample configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use atc_airport::{Runway, RunwayMode};
use atc_core::{RunwayId, SimulationParams};
use atc_sim::EngineBuilder;
use atc_stats::{CsvCollector, Fanout, Statistics};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:     u64 = 42;
const SIM_DAYS: u64 = 1;

// ── Command line ──────────────────────────────────────────────────────────────

struct Args {
    verbosity:  u8,
    params:     Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args { verbosity: 0, params: None, output_dir: None };
    for arg in std::env::args().skip(1) {
        if let Some(vs) = arg.strip_prefix('-').filter(|s| !s.is_empty() && s.chars().all(|c| c == 'v')) {
            args.verbosity = args.verbosity.saturating_add(vs.len() as u8);
        } else if args.params.is_none() {
            args.params = Some(PathBuf::from(arg));
        } else {
            args.output_dir = Some(PathBuf::from(arg));
        }
    }
    args
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Unable to initiate logger: {e}");
    }
}

fn load_params(path: Option<&Path>) -> Result<SimulationParams> {
    let Some(path) = path else {
        return Ok(SimulationParams { seed: Some(SEED), ..SimulationParams::default() });
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let params = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(params)
}

fn runways() -> Vec<Runway> {
    vec![
        Runway::new(RunwayId(1), RunwayMode::LANDING),
        Runway::new(RunwayId(2), RunwayMode::TAKEOFF),
        Runway::new(RunwayId(3), RunwayMode::MIXED),
    ]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = parse_args();
    init_logger(args.verbosity);

    let params = load_params(args.params.as_deref())?;
    let duration_min = SIM_DAYS * 24 * 60;

    println!("=== basic: airport traffic simulation ===");
    println!(
        "Tick: {} min  |  Arrivals: {}/h  |  Departures: {}/h  |  Seed: {}",
        params.tick_size_min,
        params.inbound_rate_per_hour,
        params.outbound_rate_per_hour,
        params.effective_seed(),
    );
    println!("Runways:");
    for r in runways() {
        println!("  {}  {}", r.id(), r.mode());
    }
    println!();

    let t0 = Instant::now();
    let (stats, now) = match &args.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let csv = CsvCollector::new(dir)?;
            let mut engine = EngineBuilder::new(params, Fanout(Statistics::new(), csv))
                .runways(runways())
                .build()?;
            engine.run_for(duration_min)?;
            let now = engine.now();
            let (_, Fanout(stats, mut csv)) = engine.into_parts();
            csv.finish()?;
            info!("CSV output written to {}", dir.display());
            (stats, now)
        }
        None => {
            let mut engine = EngineBuilder::new(params, Statistics::new()).runways(runways()).build()?;
            engine.run_for(duration_min)?;
            let now = engine.now();
            let (_, stats) = engine.into_parts();
            (stats, now)
        }
    };
    let elapsed = t0.elapsed();

    println!("Simulated {} ({} snapshots) in {:.3} s", now, stats.snapshots, elapsed.as_secs_f64());
    println!();
    println!("{stats}");
    println!();

    println!("{:<8} {:>12}", "Runway", "Utilisation");
    println!("{}", "-".repeat(21));
    for (id, share) in stats.runway_utilisation(now.minutes()) {
        println!("{:<8} {:>11.1}%", id.to_string(), share * 100.0);
    }

    Ok(())
}
