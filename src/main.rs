//! autoval-nav — headless simulation runner.
//!
//! Assembles a scenario, drives the simulation core to completion, and
//! prints the run summary plus an ASCII view of the explored grid. Acts as
//! the export collaborator too: `--events-out` dumps the event log as JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use autoval_nav::{OddSnapshot, Result, SceneSnapshot, SimConfig, SimulationDriver};

#[derive(Parser, Debug)]
#[command(version, about = "Headless runner for the autoVal navigation core")]
struct Args {
    /// TOML configuration file; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Strategy key (default, potential-field, bug, dwa, sampling, gap)
    #[arg(long)]
    strategy: Option<String>,

    /// Frame budget override
    #[arg(long)]
    frames: Option<usize>,

    /// RNG seed override
    #[arg(long)]
    seed: Option<u64>,

    /// Arena layout to simulate in
    #[arg(long, value_enum, default_value = "open")]
    scenario: Scenario,

    /// Weather preset (clear, rain, snow, fog)
    #[arg(long, default_value = "clear")]
    weather: String,

    /// Write the event log as JSON to this path
    #[arg(long)]
    events_out: Option<PathBuf>,

    /// Print the explored grid as ASCII after the run
    #[arg(long)]
    show_grid: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scenario {
    /// Empty arena
    Open,
    /// Arena ringed by walls
    Walled,
    /// Random scatter of obstacles and other vehicles
    Scatter,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("autoval_nav=info".parse().expect("static directive")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("loading configuration from {:?}", path);
            SimConfig::load(path)?
        }
        None => SimConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(frames) = args.frames {
        config.frame_budget = frames;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let scene = match args.scenario {
        Scenario::Open => SceneSnapshot::empty(),
        Scenario::Walled => SceneSnapshot::walled_arena(config.arena_size, config.cell_step),
        Scenario::Scatter => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            SceneSnapshot::scatter_random(config.arena_size, config.cell_step, &mut rng)
        }
    };
    let odd = OddSnapshot::from_weather_name(&args.weather);

    info!(
        strategy = %config.strategy,
        scenario = ?args.scenario,
        objects = scene.len(),
        speed_factor = odd.speed_factor(),
        "starting simulation"
    );

    let mut driver = SimulationDriver::new(config, &scene)?;
    let summary = driver.run(&scene, &odd);

    info!(
        strategy = summary.strategy,
        frames = summary.frames,
        status = ?summary.status,
        explored = summary.explored_cells,
        events = summary.events.len(),
        "run finished"
    );

    if args.show_grid {
        println!("{}", driver.grid().render_ascii());
    }

    if let Some(path) = args.events_out {
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, &summary)
            .map_err(|e| autoval_nav::NavError::Config(e.to_string()))?;
        info!("event log written to {:?}", path);
    }

    Ok(())
}
