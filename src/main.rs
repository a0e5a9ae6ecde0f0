//! Arena Sim - headless tournament driver
//!
//! Runs one tournament from setup to the end, prints the event log and
//! appends the victor to the hall of fame when a record file is configured.

use std::path::PathBuf;

use arena_sim::catalog::Catalog;
use arena_sim::core::error::{ArenaError, Result};
use arena_sim::core::RunConfig;
use arena_sim::records::{HallOfFameEntry, JsonFileRecordStore, RecordStore};
use arena_sim::simulation::{Advance, Engine, ManualEvent, Phase, SimulationState};
use clap::{Parser, ValueEnum};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per log entry followed by a summary
    Text,
    /// The final state snapshot as JSON
    Json,
}

/// Arena Sim - deterministic elimination tournament
#[derive(Parser, Debug)]
#[command(name = "arena-sim")]
#[command(about = "Run a seeded elimination tournament and print its event log")]
struct Args {
    /// TOML run configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed string (random when omitted)
    #[arg(long)]
    seed: Option<String>,

    /// Arena id
    #[arg(long)]
    arena: Option<String>,

    /// Enable gamemaker triggers
    #[arg(long)]
    gamemaker: bool,

    /// Call a feast at the start of this day (needs --gamemaker)
    #[arg(long)]
    feast_day: Option<u32>,

    /// TOML catalog replacing the standard one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON hall-of-fame file
    #[arg(long)]
    hall_of_fame: Option<PathBuf>,

    /// Maximum day/night ticks before giving up
    #[arg(long)]
    max_ticks: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print important log entries
    #[arg(long)]
    important_only: bool,

    /// List the catalog's arenas and exit
    #[arg(long)]
    list_arenas: bool,

    /// Print the hall of fame and exit
    #[arg(long)]
    show_hall_of_fame: bool,
}

impl Args {
    fn apply(&self, config: &mut RunConfig) {
        if let Some(seed) = &self.seed {
            config.seed = Some(seed.clone());
        }
        if let Some(arena) = &self.arena {
            config.arena = arena.clone();
        }
        if self.gamemaker {
            config.gamemaker_mode = true;
        }
        if self.feast_day.is_some() {
            config.feast_day = self.feast_day;
        }
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(path) = &self.hall_of_fame {
            config.hall_of_fame = Some(path.clone());
        }
        if let Some(max_ticks) = self.max_ticks {
            config.max_ticks = max_ticks;
        }
    }
}

fn random_seed() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

/// Drive the engine to the end or until the tick budget runs out
fn run(engine: &mut Engine, config: &RunConfig) {
    let mut ticks = 0;
    let mut feast_called = false;

    while !engine.state().is_over() {
        let state = engine.state();
        if !feast_called && state.phase == Phase::Day && config.feast_day == Some(state.day) {
            feast_called = true;
            if !engine.trigger(ManualEvent::Feast).applied() {
                warn!("feast requested but gamemaker mode is off");
            }
        }

        if engine.expected_advance() == Some(Advance::Tick) {
            if ticks >= config.max_ticks {
                warn!(ticks, "tick budget exhausted before the games ended");
                break;
            }
            ticks += 1;
        }
        engine.advance_next();
    }
}

fn print_text(state: &SimulationState, important_only: bool) {
    println!("=== {} (seed {}) ===", state.arena.name, state.seed);
    for entry in state.log.entries() {
        if important_only && !entry.important {
            continue;
        }
        let marker = if entry.important { "*" } else { " " };
        println!("{} [day {:>2} {:<10}] {}", marker, entry.day, entry.phase, entry.text);
    }

    let summary = state.summary();
    println!();
    println!("Days: {}  Alive: {}  Dead: {}", summary.day, summary.alive, summary.dead);
    match &summary.victor {
        Some(name) => println!("Victor: {}", name),
        None if summary.phase == Phase::Ended => println!("No survivors"),
        None => println!("Unfinished ({} still alive)", summary.alive),
    }
    if !summary.top_killers.is_empty() {
        println!("Top killers:");
        for (name, kills) in &summary.top_killers {
            println!("  {:<20} {}", name, kills);
        }
    }
}

fn show_hall_of_fame(config: &RunConfig) -> Result<()> {
    let path = config
        .hall_of_fame
        .clone()
        .ok_or_else(|| ArenaError::InvalidConfig("no hall_of_fame file configured".into()))?;
    let entries = JsonFileRecordStore::new(path).load_all()?;
    if entries.is_empty() {
        println!("The hall of fame is empty.");
    }
    for entry in entries {
        println!(
            "{}  {:<20} District {:<2}  {} kills  {} (seed {})",
            entry.date.format("%Y-%m-%d %H:%M"),
            entry.winner_name,
            entry.winner_origin,
            entry.kills,
            entry.arena_name,
            entry.seed
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arena_sim=info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::standard(),
    };

    if args.list_arenas {
        for arena in &catalog.arenas {
            println!("{:<10} {} ({:?})", arena.id, arena.name, arena.climate);
            println!("           {}", arena.description);
        }
        return Ok(());
    }
    if args.show_hall_of_fame {
        return show_hall_of_fame(&config);
    }

    let seed = config.seed.clone().unwrap_or_else(random_seed);
    info!(seed = %seed, arena = %config.arena, gamemaker = config.gamemaker_mode, "starting tournament");

    let mut engine = Engine::setup(&seed, &config.arena, catalog, config.gamemaker_mode)?;
    run(&mut engine, &config);
    let state = engine.into_state();

    match args.format {
        OutputFormat::Text => print_text(&state, args.important_only),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
    }

    if let Some(path) = &config.hall_of_fame {
        if let Some(entry) = HallOfFameEntry::from_state(&state) {
            JsonFileRecordStore::new(path).append(entry)?;
            info!(path = %path.display(), "victor added to the hall of fame");
        }
    }

    Ok(())
}
