use std::path::PathBuf;

use clap::Parser;
use launch_telemetry::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "telemetry", about = "Synthesize launch telemetry over a mission time range")]
struct Args {
    /// First sample time, seconds from liftoff
    #[arg(long, default_value_t = -60.0, allow_negative_numbers = true)]
    start: f64,

    /// Last sample time, seconds from liftoff
    #[arg(long, default_value_t = 600.0, allow_negative_numbers = true)]
    end: f64,

    /// Seconds between samples
    #[arg(long, default_value_t = 10.0)]
    interval: f64,

    /// Vehicle label, e.g. falcon9
    #[arg(long)]
    vehicle: Option<String>,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// TOML engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the series as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let schedule = BatchSchedule::new(args.start, args.end, args.interval)?;

    let mut synthesizer = match args.seed {
        Some(seed) => TelemetrySynthesizer::with_seed(config, seed),
        None => TelemetrySynthesizer::new(config),
    };
    let vehicle = synthesizer.resolve_vehicle(args.vehicle.as_deref());
    info!(
        "Synthesizing {} samples for {} from {} to {}",
        schedule.len(),
        vehicle,
        format_mission_time(schedule.start()),
        format_mission_time(schedule.end())
    );

    if args.json {
        let points = synthesizer.batch(schedule, vehicle);
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!(
        "{:>11} {:<17} {:>8} {:>7} {:>9} {:>6} {:>6} {:>6} {:>9} {:>9} {:>5}",
        "CLOCK", "PHASE", "ALT km", "VEL", "DOWNRANGE", "Q kPa", "THR %", "FUEL %", "STAGE",
        "FAIRING", "MAXQ"
    );
    let mut summary = FlightSummary::new();
    for point in synthesizer.stream(schedule, vehicle) {
        println!(
            "{:>11} {:<17} {:>8.2} {:>7.3} {:>9.1} {:>6.2} {:>6.1} {:>6.1} {:>9} {:>9} {:>5}",
            format_mission_time(point.mission_time),
            point.phase,
            point.altitude,
            point.velocity,
            point.downrange,
            point.dynamic_pressure,
            point.throttle,
            point.fuel_remaining,
            point.stage_status.as_str(),
            point.fairing_status.as_str(),
            if point.is_max_q { "yes" } else { "" }
        );
        summary.record(&point);
    }
    summary.display();

    Ok(())
}
