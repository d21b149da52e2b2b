//! bulwark-run: headless popup-turret scenario runner.
//!
//! Usage:
//!   bulwark-run run --ticks 3000 --seed 7
//!   bulwark-run run --config units.json --skip-make --output final.json
//!   bulwark-run run --commands opening.json
//!   bulwark-run defaults

use std::path::PathBuf;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bulwark_core::commands::SimCommand;
use bulwark_core::config::UnitDefs;
use bulwark_core::events::SimEvent;
use bulwark_core::types::Position;
use bulwark_sim::systems::raid_spawner::RaidSchedule;
use bulwark_sim::{SimConfig, SimulationEngine};

const DEFAULT_TICKS: u64 = 3_000;
const DEFAULT_SEED: u64 = 42;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    init_logging(parse_value(&args[2..], "--log").unwrap_or("info"));

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "defaults" => cmd_defaults(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "bulwark-run: BULWARK popup turret scenario runner\n\
         \n\
         Commands:\n\
         \n\
         run       Run the default raid scenario against two popup turrets\n\
         \n\
           --config <path>    Unit definitions JSON (optional, default: built-in)\n\
           --ticks <N>        Ticks to simulate (default: 3000)\n\
           --seed <N>         RNG seed (default: 42)\n\
           --skip-make        Place turrets already built\n\
           --commands <path>  JSON array of commands queued before the first tick\n\
           --output <path>    Write the final snapshot JSON here (default: stdout)\n\
           --log <filter>     Log filter, e.g. debug or bulwark_mount=trace (default: info)\n\
         \n\
         defaults  Print the built-in unit definitions as JSON\n\
         \n\
         Examples:\n\
         \n\
           bulwark-run run --ticks 1500 --seed 7 --skip-make\n\
           bulwark-run defaults > units.json\n"
    );
}

fn init_logging(directive: &str) {
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(err) => {
            eprintln!("Error: invalid --log filter {directive:?}: {err}");
            process::exit(1);
        }
    };
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number(args: &[String], flag: &str, default: u64) -> u64 {
    match parse_value(args, flag) {
        None => default,
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let defs = match parse_value(args, "--config") {
        Some(path) => match UnitDefs::load(&PathBuf::from(path)) {
            Ok(defs) => defs,
            Err(err) => {
                eprintln!("Error: failed to load {path}: {err}");
                process::exit(1);
            }
        },
        None => UnitDefs::default(),
    };
    let ticks = parse_number(args, "--ticks", DEFAULT_TICKS);
    let seed = parse_number(args, "--seed", DEFAULT_SEED);
    let skip_make = has_flag(args, "--skip-make");

    let raids = RaidSchedule::default_scenario();
    info!(ticks, seed, skip_make, raiders = raids.total_raiders(), "starting scenario");

    let mut engine = SimulationEngine::new(SimConfig { seed, defs, raids });
    let turrets = [
        engine.spawn_turret(Position::new(-60.0, 0.0), skip_make),
        engine.spawn_turret(Position::new(60.0, 0.0), skip_make),
    ];
    if let Some(path) = parse_value(args, "--commands") {
        let commands = load_commands(path);
        info!(count = commands.len(), path, "queued commands");
        engine.queue_commands(commands);
    }

    let mut transitions = 0usize;
    let mut shots = 0usize;
    let mut destroyed = 0usize;
    let mut last = None;
    for _ in 0..ticks {
        let snapshot = engine.tick();
        for event in &snapshot.events {
            match event {
                SimEvent::MountStateChanged { .. } => transitions += 1,
                SimEvent::WeaponFired { .. } => shots += 1,
                SimEvent::UnitDestroyed { .. } => destroyed += 1,
                SimEvent::DamageTaken { .. } => {}
            }
        }
        last = Some(snapshot);
    }

    info!(
        tick = engine.time().tick,
        transitions, shots, destroyed, "scenario finished"
    );
    for unit in turrets {
        match engine.mount_state(unit) {
            Some(state) => info!(?unit, ?state, "turret standing"),
            None => info!(?unit, "turret destroyed"),
        }
    }

    let Some(snapshot) = last else {
        eprintln!("Error: --ticks must be at least 1");
        process::exit(1);
    };
    let json = match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Error: failed to serialize snapshot: {err}");
            process::exit(1);
        }
    };

    match parse_value(args, "--output") {
        Some(path) => {
            if let Err(err) = std::fs::write(path, json) {
                eprintln!("Error: failed to write {path}: {err}");
                process::exit(1);
            }
            info!(path, "snapshot written");
        }
        None => println!("{json}"),
    }
}

fn load_commands(path: &str) -> Vec<SimCommand> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Error: failed to read {path}: {err}");
            process::exit(1);
        }
    };
    match serde_json::from_str(&json) {
        Ok(commands) => commands,
        Err(err) => {
            eprintln!("Error: malformed commands in {path}: {err}");
            process::exit(1);
        }
    }
}

// --- Defaults command ---

fn cmd_defaults() {
    match serde_json::to_string_pretty(&UnitDefs::default()) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Error: failed to serialize defaults: {err}");
            process::exit(1);
        }
    }
}
