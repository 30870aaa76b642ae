use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pocketsweeper_core::program::Program;
use pocketsweeper_core::{CellCount, Coord};

mod framebuffer;
mod keys;
mod settings;
mod terminal;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with [game], [input] and [session] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width in tiles
    #[arg(long)]
    width: Option<Coord>,

    /// Board height in tiles
    #[arg(long)]
    height: Option<Coord>,

    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Screen pixels per terminal column
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,

    /// Write the log here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> settings::Overrides {
        settings::Overrides {
            width: self.width,
            height: self.height,
            mines: self.mines,
            seed: self.seed,
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp_millis();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("could not install logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut settings = settings::load(args.config.as_deref())?;
    args.overrides().apply(&mut settings);
    let mut program = Program::new(&settings).context("invalid game settings")?;
    log::debug!("starting with {settings:?}");

    let ctx = {
        let mut platform = terminal::TerminalPlatform::new(args.scale)?;
        let ctx = program.run(&mut platform);
        if let Some(err) = platform.take_error() {
            return Err(err).context("terminal output failed");
        }
        ctx
    };

    match ctx.best_score {
        Some(seconds) => log::info!("best score this run: {seconds}s"),
        None => log::info!("no wins this run"),
    }
    Ok(())
}
