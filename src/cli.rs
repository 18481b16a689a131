use crate::playback::config::{DEFAULT_FREEZE_TICKS, DEFAULT_TICKS_PER_TURN, MAX_TICKS_PER_TURN};
use crate::playback::PlaybackConfig;
use clap::Parser;

/// CLI arguments for the headless playback
#[derive(Parser, Debug)]
#[command(
    name = "lemin_playback",
    about = "🐜 Replay a lem-in solution on its map",
    long_about = "Replay a lem-in solution on its map.\n\n\
                  Without --map/--solution the combined lem-in output is read from stdin."
)]
pub struct Args {
    /// Path to the map file
    #[arg(short = 'm', long = "map", requires = "solution")]
    pub map: Option<String>,

    /// Path to the solution file
    #[arg(short = 's', long = "solution", requires = "map")]
    pub solution: Option<String>,

    /// Clock ticks needed to play one turn
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_TURN, value_parser = clap::value_parser!(u64).range(1..=MAX_TICKS_PER_TURN))]
    pub ticks_per_turn: u64,

    /// Ticks to hold on every whole turn
    #[arg(long, default_value_t = DEFAULT_FREEZE_TICKS)]
    pub freeze_ticks: u64,

    /// Number of ticks to run (default: until the playback loops)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Suppress per-turn logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig::new(self.ticks_per_turn, self.freeze_ticks).unwrap_or_default()
    }
}
