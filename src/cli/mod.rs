pub mod completions;
pub mod convert;
pub mod matching;
pub mod mix;
pub mod palette;
pub mod pick;
pub mod target;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::Palette;

/// swatch - colour conversion, mixing and matching
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./swatch.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a colour in every supported colour model
    Convert(convert::ConvertArgs),

    /// Mix picked colours by quantity
    Mix(mix::MixArgs),

    /// Score a mix against a target colour
    Match(matching::MatchArgs),

    /// List the active palette
    Palette(palette::PaletteArgs),

    /// Generate a random target colour
    Target(target::TargetArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Shared state for running a command.
pub struct Context {
    pub palette: Palette,
    pub printer: Printer,
}

impl Context {
    /// Build the context from loaded config.
    pub fn new(config: &Config, printer: Printer) -> Result<Self> {
        Ok(Self {
            palette: config.palette()?,
            printer,
        })
    }
}

/// Load `--config PATH` if given, otherwise discover swatch.yaml in the
/// working directory.
pub fn load_config(cli: &Cli, printer: &Printer) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::discover(&cwd)?
        }
    };

    if let Some(path) = &config.source {
        if !config.palette.is_empty() {
            printer.status(
                "Loaded",
                &format!(
                    "{} ({})",
                    display_path(path),
                    plural(config.palette.len(), "colour", "colours")
                ),
            );
        }
    }
    Ok(config)
}

/// Dispatch a parsed command.
pub fn run(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Convert(args) => convert::run(args, ctx),
        Commands::Mix(args) => mix::run(args, ctx),
        Commands::Match(args) => matching::run(args, ctx),
        Commands::Palette(args) => palette::run(args, ctx),
        Commands::Target(args) => target::run(args, ctx),
        Commands::Completions(args) => completions::run(args),
    }
}
