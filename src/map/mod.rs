pub mod map;
pub mod parser;
pub mod room;

pub use map::Map;
pub use parser::parse_map;
pub use room::{Room, RoomId, RoomRole, Tunnel};
