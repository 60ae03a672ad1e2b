//! Arena CLI - inspect routes and controller decisions on ASCII arena snapshots.
//!
//! - `arena plan <MAP>` - route from `@` to `M` and the compiled action queue
//! - `arena decide <MAP>` - run the controller on the snapshot for a few cycles

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use arena_bot::{ArenaDescription, BotConfig, BotController, ChampionKnowledge, Controller};
use arena_core::{AsciiArena, Facing, Weapon};
use arena_nav::{compile, find_path};

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Route and decision inspector for tile-arena controllers", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find and compile the route from the agent to the menhir
    Plan {
        /// ASCII arena snapshot
        map: PathBuf,

        /// Initial facing of the agent
        #[arg(long, default_value = "up")]
        facing: Facing,
    },

    /// Feed the snapshot to a controller and print its decisions
    Decide {
        /// ASCII arena snapshot
        map: PathBuf,

        /// Facing of the agent
        #[arg(long, default_value = "up")]
        facing: Facing,

        /// Weapon the agent holds
        #[arg(long, default_value = "knife")]
        weapon: Weapon,

        /// Controller config (YAML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Decision cycles to run with the pose held fixed
        #[arg(long, default_value_t = 1)]
        cycles: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Plan { map, facing } => plan(&map, facing),
        Commands::Decide {
            map,
            facing,
            weapon,
            config,
            cycles,
        } => decide(&map, facing, weapon, config.as_deref(), cycles),
    }
}

fn load_arena(path: &Path) -> Result<AsciiArena> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read arena {}", path.display()))?;
    AsciiArena::parse(&text).with_context(|| format!("failed to parse arena {}", path.display()))
}

fn plan(path: &Path, facing: Facing) -> Result<()> {
    tracing::info!(map = %path.display(), facing = facing.name(), "Planning route");
    let arena = load_arena(path)?;
    let goal = arena
        .menhir
        .with_context(|| format!("arena {} has no menhir", path.display()))?;

    let world = arena.world_map();
    let Some(route) = find_path(&world, arena.agent, goal) else {
        println!("No route from {} to {}", arena.agent, goal);
        return Ok(());
    };

    let queue = compile(route.approach(), arena.agent, facing)?;

    println!("Route {} -> {} ({} cells)", arena.agent, goal, route.len());
    for cell in route.cells() {
        println!("  {cell}");
    }
    println!("Actions ({}):", queue.len());
    for action in queue.iter() {
        println!("  {action}");
    }
    Ok(())
}

fn decide(
    path: &Path,
    facing: Facing,
    weapon: Weapon,
    config: Option<&Path>,
    cycles: u32,
) -> Result<()> {
    tracing::info!(map = %path.display(), %weapon, cycles, "Running controller");
    let arena = load_arena(path)?.with_agent(facing, weapon);
    let config = match config {
        Some(config_path) => BotConfig::load(config_path)?,
        None => BotConfig::default(),
    };

    let menhir = arena
        .menhir
        .with_context(|| format!("arena {} has no menhir", path.display()))?;
    let name = path.display().to_string();

    let mut controller = BotController::with_config(config);
    controller.reset(&ArenaDescription::new(name, menhir))?;

    let knowledge = ChampionKnowledge::new(arena.agent, arena.tiles.clone());
    for cycle in 0..cycles {
        let decision = controller.decide_with_reason(&knowledge)?;
        println!("{cycle:>4}  {:<12}  {:?}", decision.action, decision.reason);
    }
    Ok(())
}
