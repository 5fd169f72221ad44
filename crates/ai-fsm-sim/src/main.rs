//! `npc-sim` - run an NPC behavior scenario headlessly.
//!
//! - `npc-sim run [--scenario FILE]` - simulate and log transitions
//! - `npc-sim init FILE` - write the built-in scenario as an editable template

use std::path::{Path, PathBuf};

use ai_fsm_sim::{simulate, Scenario};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "npc-sim")]
#[command(about = "Headless NPC behavior simulator", version)]
struct Cli {
    /// Verbose output (per-transition debug logs)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a scenario
    Run {
        /// Scenario file (YAML); the built-in scenario when omitted
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Override the scenario's tick count
        #[arg(long)]
        ticks: Option<u64>,

        /// Override the scenario's seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the time spent in each mode
        #[arg(long)]
        summary: bool,

        /// Report format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Write the built-in scenario to a file
    Init {
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Some(Commands::Run {
            scenario,
            ticks,
            seed,
            summary,
            format,
        }) => run(scenario.as_deref(), ticks, seed, summary, format),
        Some(Commands::Init { path, force }) => init(&path, force),
        None => run(None, None, None, true, Format::Text),
    }
}

fn run(
    path: Option<&Path>,
    ticks: Option<u64>,
    seed: Option<u64>,
    summary: bool,
    format: Format,
) -> Result<()> {
    let mut scenario = Scenario::load_or_default(path)?;
    if let Some(seed) = seed {
        scenario.seed = seed;
    }
    let ticks = ticks.unwrap_or(scenario.ticks);

    tracing::info!(
        scenario = %path.map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
        ticks,
        seed = scenario.seed,
        "Starting simulation"
    );

    let report = simulate(&scenario, ticks)?;

    for t in &report.transitions {
        tracing::info!(tick = t.tick, from = %t.from, to = %t.to, "Transition");
    }

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{json}");
        }
        Format::Text if summary => print!("{report}"),
        Format::Text => {
            tracing::info!(
                transitions = report.transitions.len(),
                final_mode = %report.final_mode,
                "Simulation finished"
            );
        }
    }

    Ok(())
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let yaml = Scenario::default().to_yaml()?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write scenario to {}", path.display()))?;

    println!("Wrote scenario template to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit checkpoints, the player route and fsm tuning");
    println!("  2. Run: npc-sim run --scenario {} --summary", path.display());
    Ok(())
}
