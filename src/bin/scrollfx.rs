use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    /// Log verbosity written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scenario and write one JSON snapshot per line.
    Simulate(SimulateArgs),
    /// Print particle descriptors as JSON.
    Particles(ParticlesArgs),
    /// Validate a config and print the effective settings.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON-lines path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ParticlesArgs {
    /// Which effect to generate.
    #[arg(long, value_enum, default_value_t = ParticleChoice::Leaves)]
    kind: ParticleChoice,

    /// Number of particles (effect default when omitted).
    #[arg(long)]
    count: Option<usize>,

    /// Generator seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Config JSON to validate (defaults when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ParticleChoice {
    Leaves,
    Confetti,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Particles(args) => cmd_particles(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn read_scenario_json(path: &Path) -> anyhow::Result<scrollfx::Scenario> {
    let f = File::open(path).with_context(|| format!("open scenario '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scenario: scrollfx::Scenario =
        serde_json::from_reader(r).with_context(|| "parse scenario JSON")?;
    Ok(scenario)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scenario = read_scenario_json(&args.in_path)?;
    let snapshots = scenario.run()?;

    let mut out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    for snap in &snapshots {
        serde_json::to_writer(&mut out, snap).with_context(|| "write snapshot")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {} snapshots to {}", snapshots.len(), path.display());
    }
    Ok(())
}

fn cmd_particles(args: ParticlesArgs) -> anyhow::Result<()> {
    let defaults = scrollfx::ParticleConfig::default();
    let particles = match args.kind {
        ParticleChoice::Leaves => {
            scrollfx::falling_leaves(args.count.unwrap_or(defaults.leaf_count), args.seed)
        }
        ParticleChoice::Confetti => {
            scrollfx::confetti_burst(args.count.unwrap_or(defaults.confetti_count), args.seed)
        }
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &particles).with_context(|| "write particles")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = match &args.in_path {
        Some(path) => scrollfx::FxConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => scrollfx::FxConfig::default(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &cfg).with_context(|| "write config")?;
    writeln!(out)?;
    Ok(())
}
