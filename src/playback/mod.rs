pub mod config;
pub mod engine;

pub use config::PlaybackConfig;
pub use engine::{PlaybackEngine, PlaybackState, TickEvent};
