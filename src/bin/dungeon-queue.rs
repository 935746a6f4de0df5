//! `dungeon-queue`: run the dungeon instance scheduler.
//!
//! Configuration comes from a JSON file (`--config`) or from `DUNGEON_*`
//! environment variables (a `.env` file is honoured), and individual flags
//! override either source.
//!
//! ```text
//! dungeon-queue --instances 2 --tanks 3 --healers 3 --dps 9 --min-time 1 --max-time 3
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use dungeon_queue::builders::{build_scheduler, Launch};
use dungeon_queue::config::DungeonConfig;
use dungeon_queue::core::{AppResult, EventSink, JsonLinesSink, Phase};
use dungeon_queue::runtime::{render_config, render_formation, render_status, render_summary};
use dungeon_queue::util::init_tracing;

#[derive(Parser)]
#[command(name = "dungeon-queue", about = "Dungeon instance queue simulator")]
struct Cli {
    /// JSON configuration file. Without it, `DUNGEON_*` variables are read.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dungeon instances that may run at the same time.
    #[arg(long)]
    instances: Option<usize>,

    /// Tanks waiting in the queue.
    #[arg(long)]
    tanks: Option<u32>,

    /// Healers waiting in the queue.
    #[arg(long)]
    healers: Option<u32>,

    /// DPS waiting in the queue.
    #[arg(long)]
    dps: Option<u32>,

    /// Fastest clear time in seconds.
    #[arg(long)]
    min_time: Option<u64>,

    /// Slowest clear time in seconds.
    #[arg(long)]
    max_time: Option<u64>,

    /// Real milliseconds per simulated second.
    #[arg(long)]
    time_unit_ms: Option<u64>,

    /// RNG seed for reproducible clear times.
    #[arg(long)]
    seed: Option<u64>,

    /// Print party events as JSON lines.
    #[arg(long)]
    events: bool,

    /// Print the final summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn load_config(&self) -> AppResult<DungeonConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                DungeonConfig::from_json_str(&raw).map_err(anyhow::Error::msg)?
            }
            None => DungeonConfig::from_env().map_err(anyhow::Error::msg)?,
        };

        if let Some(v) = self.instances {
            cfg.instances = v;
        }
        if let Some(v) = self.tanks {
            cfg.tanks = v;
        }
        if let Some(v) = self.healers {
            cfg.healers = v;
        }
        if let Some(v) = self.dps {
            cfg.dps = v;
        }
        if let Some(v) = self.min_time {
            cfg.min_dungeon_time = v;
        }
        if let Some(v) = self.max_time {
            cfg.max_dungeon_time = v;
        }
        if let Some(v) = self.time_unit_ms {
            cfg.time_unit_ms = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }

        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> AppResult<ExitCode> {
    init_tracing("info");
    let cli = Cli::parse();
    let cfg = cli.load_config()?;

    println!("{}", render_config(&cfg));

    let events: Option<Box<dyn EventSink>> = if cli.events {
        Some(Box::new(JsonLinesSink))
    } else {
        None
    };

    let (formation, scheduler) = match build_scheduler(&cfg, events)? {
        Launch::Ready {
            formation,
            scheduler,
        } => (formation, scheduler),
        Launch::Insufficient(formation) => {
            println!("{}", render_formation(&formation));
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("{}\n", render_formation(&formation));

    let table = scheduler.table();
    let mut phase = scheduler.phase_watch();
    let stop = scheduler.shutdown_handle();
    let run = tokio::spawn(scheduler.run());

    let mut ticker = tokio::time::interval(cfg.time_scale().real(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => println!("{}", render_status(&table.snapshot())),
            changed = phase.changed() => {
                if changed.is_err() || *phase.borrow() == Phase::Done {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c(), if !stop.is_triggered() => {
                tracing::warn!("interrupt received, letting active parties finish");
                stop.trigger();
            }
        }
    }

    let summary = run.await.context("scheduler task panicked")??;
    if cli.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{}", render_summary(&summary));
    }
    Ok(ExitCode::SUCCESS)
}
