use thiserror::Error;

/// Structural violations found while reading a map
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapParseError {
    #[error("map is empty, expected the number of ants on line 1")]
    MissingAntCount,
    #[error("line 1: invalid number of ants: {0:?}")]
    InvalidAntCount(String),
    #[error("line {line}: expected `<name> <x> <y>`, got {text:?}")]
    InvalidRoomLine { line: usize, text: String },
    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: usize, value: String },
    #[error("line {line}: room {name:?} is already declared")]
    DuplicateRoom { line: usize, name: String },
    #[error("line {line}: a second ##{role} room {name:?}")]
    DuplicateRole { line: usize, role: String, name: String },
    #[error("no ##{0} room declared")]
    MissingRole(String),
    #[error("line {line}: expected `<room>-<room>`, got {text:?}")]
    InvalidTunnelLine { line: usize, text: String },
    #[error("line {line}: tunnel from {name:?} to itself")]
    SelfTunnel { line: usize, name: String },
    #[error("line {line}: unknown room {name:?}")]
    UnknownRoom { line: usize, name: String },
}

/// References in a movement log that cannot be resolved against the map
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolutionParseError {
    #[error("turn {turn}: expected `L<ant>-<room>`, got {token:?}")]
    InvalidToken { turn: u32, token: String },
    #[error("turn {turn}: unknown ant {ant:?}")]
    UnknownAnt { turn: u32, ant: String },
    #[error("turn {turn}: unknown room {room:?}")]
    UnknownRoom { turn: u32, room: String },
}

/// Crate level error, displayed verbatim to the user
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("MapParseError: {0}")]
    Map(#[from] MapParseError),
    #[error("SolutionParseError: {0}")]
    Solution(#[from] SolutionParseError),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
