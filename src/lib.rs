//! # lem-in playback
//!
//! Reads a lem-in ant farm map and the movement log of a solution, and
//! replays it as smooth, controllable motion.
//!
//! The library parses both text formats into an immutable graph and per-ant
//! timelines, then drives a tick based clock that interpolates every ant
//! between rooms. Drawing is left to the caller.

pub mod cli;
pub mod console;
pub mod error;
pub mod geometry;
pub mod map;
pub mod playback;
pub mod scene;
pub mod solution;

pub use cli::Args;
pub use error::{Error, MapParseError, Result, SolutionParseError};
pub use geometry::{Coords, Position, Rect};
pub use map::{parse_map, Map, Room, RoomId, RoomRole, Tunnel};
pub use playback::{PlaybackConfig, PlaybackEngine, PlaybackState, TickEvent};
pub use scene::Scene;
pub use solution::{parse_solution, Ant, Solution, Turn};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Coords, Error, Map, PlaybackConfig, PlaybackEngine, PlaybackState, Position,
        Rect, Result, Room, RoomRole, Scene, Solution, TickEvent,
    };
}
