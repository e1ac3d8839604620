//! marquee - Entry Point

use clap::Parser;
use marquee::config::CliOverrides;
use marquee::model::{AppError, LoopMode, TargetKind};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// marquee - slide and loop lines of text across the terminal
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(version)]
#[command(about = "Slide and loop lines of text across the terminal")]
pub struct Args {
    /// File with one item per line (reads piped stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frames per second (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: Option<u32>,

    /// Cells moved per frame (1 to 40)
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=40))]
    pub speed: Option<i32>,

    /// Where items come to rest
    #[arg(short, long, value_parser = TargetKind::from_str)]
    pub target: Option<TargetKind>,

    /// When items wrap around instead of settling
    #[arg(long, value_parser = LoopMode::from_str)]
    pub loop_mode: Option<LoopMode>,

    /// Spawn all items again once every item has left the screen
    #[arg(long)]
    pub cycle: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            fps: self.fps,
            speed: self.speed,
            target: self.target,
            loop_mode: self.loop_mode,
            cycle: self.cycle.then_some(true),
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = marquee::config::load_config_with_precedence(args.config.clone())?;
        let merged = marquee::config::merge_config(config_file);
        let with_env = marquee::config::apply_env_overrides(merged);
        let with_cli = marquee::config::apply_cli_overrides(with_env, args.overrides());
        marquee::config::validate(with_cli)?
    };

    marquee::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let items = marquee::source::resolve_items(args.file.clone(), config.items.clone())?;

    marquee::view::run(items, &config)?;

    Ok(())
}
