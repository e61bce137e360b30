use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tesseract_app::arena::{self, RunSummary};
use tesseract_app::autopilot::Autopilot;
use tesseract_sim::SimConfig;

/// Run the Tesseract Arena simulation headless under the autopilot.
#[derive(Parser, Debug)]
#[command(name = "tesseract-arena", version)]
struct Args {
    /// JSON file with simulation settings. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate in fast mode.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Run the realtime game loop thread instead of fixed fast ticks.
    #[arg(long)]
    realtime: bool,

    /// Wall-clock length of a realtime run.
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Stop at the first game over instead of starting a new game.
    #[arg(long)]
    no_restart: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("invalid simulation config")?;

    let pilot = Autopilot::new(!args.no_restart);
    info!(seed = config.seed, realtime = args.realtime, "tesseract arena starting");

    let summary = if args.realtime {
        if !args.seconds.is_finite() || args.seconds <= 0.0 {
            bail!("--seconds must be a positive number, got {}", args.seconds);
        }
        arena::run_realtime(config, Duration::from_secs_f64(args.seconds), pilot)?
    } else {
        arena::run_fast(config, args.ticks, pilot)?
    };

    log_summary(&summary);
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<SimConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SimConfig::from_json(&json).with_context(|| format!("failed to load config {}", path.display()))
}

fn log_summary(summary: &RunSummary) {
    info!(
        ticks = summary.ticks,
        kills = summary.kills,
        waves_cleared = summary.waves_cleared,
        games_over = summary.games_over,
        best_score = summary.best_score,
        best_level = summary.best_level,
        final_phase = ?summary.final_phase,
        "run summary"
    );
}
