use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use catclock_engine::{FaceConfig, TimeSample};

#[derive(Debug, Parser)]
#[command(name = "catclock", version, about = "Renders the cat clock face")]
pub struct Cli {
    /// Log filter in `env_logger` syntax (overrides RUST_LOG).
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a single frame to PNG.
    Render(RenderArgs),
    /// Run the ticking view and redraw whenever the time changes.
    Live(LiveArgs),
}

#[derive(Debug, Args)]
pub struct FaceArgs {
    /// Background artwork drawn under the ink, stretched to the face.
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Output pixels per face unit (the face is 150 × 300 units).
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Also draw the second hand.
    #[arg(long)]
    pub second_hand: bool,
}

impl FaceArgs {
    pub fn to_config(&self) -> FaceConfig {
        FaceConfig::default()
            .scale(self.scale)
            .second_hand(self.second_hand)
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Time to draw as HH:MM[:SS[.fraction]]; defaults to the local time.
    #[arg(long)]
    pub at: Option<TimeSample>,

    /// Output file.
    #[arg(long, short, default_value = "catclock.png")]
    pub out: PathBuf,

    #[command(flatten)]
    pub face: FaceArgs,
}

#[derive(Debug, Args)]
pub struct LiveArgs {
    /// How long to keep the view visible.
    #[arg(long, default_value_t = 3.0)]
    pub seconds: f64,

    /// Write frames into this directory.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Only write every Nth redrawn frame.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub every: u64,

    #[command(flatten)]
    pub face: FaceArgs,
}
