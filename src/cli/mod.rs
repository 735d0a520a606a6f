pub mod check;
pub mod completions;
pub mod draw;
pub mod init;
pub mod input;
pub mod normalize;

use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// fplot - Normalize freeform formulas into plot-ready batches
#[derive(Parser, Debug)]
#[command(name = "fplot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log pipeline details to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a plot from formulas and write the plot document
    Draw(draw::DrawArgs),

    /// Check formulas and bounds without drawing
    Check(check::CheckArgs),

    /// Print the normalized form of each formula
    Normalize(normalize::NormalizeArgs),

    /// Create a starter fplot.yaml session
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Install the stderr logger. Only errors are logged unless `-v` is given.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Fails only if a logger is already installed
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}
