use crate::geometry::Coords;

/// Index of a room inside its `Map`
pub type RoomId = u32;

/// Special meaning of a room, set by a `##start` / `##end` command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoomRole {
    Start,
    End,
}

impl RoomRole {
    /// Parse the text following `##`; anything else carries no role
    #[inline]
    pub fn from_command(s: &str) -> Option<Self> {
        match s.as_bytes() {
            b"start" => Some(RoomRole::Start),
            b"end" => Some(RoomRole::End),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoomRole::Start => "start",
            RoomRole::End => "end",
        }
    }
}

/// Named graph node with its drawing coordinates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub coords: Coords,
    pub role: Option<RoomRole>,
}

impl Room {
    pub fn new(name: impl Into<String>, coords: Coords, role: Option<RoomRole>) -> Self {
        Self {
            name: name.into(),
            coords,
            role,
        }
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == Some(RoomRole::Start)
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.role == Some(RoomRole::End)
    }
}

/// Undirected edge between two distinct rooms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tunnel {
    pub a: RoomId,
    pub b: RoomId,
}

impl Tunnel {
    pub fn new(a: RoomId, b: RoomId) -> Self {
        debug_assert_ne!(a, b);
        Self { a, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_command() {
        assert_eq!(RoomRole::from_command("start"), Some(RoomRole::Start));
        assert_eq!(RoomRole::from_command("end"), Some(RoomRole::End));
        assert_eq!(RoomRole::from_command("ends"), None);
        assert_eq!(RoomRole::from_command(""), None);
    }

    #[test]
    fn test_room_roles() {
        let room = Room::new("A", Coords::new(1, 2), Some(RoomRole::Start));
        assert!(room.is_start());
        assert!(!room.is_end());

        let plain = Room::new("B", Coords::new(0, 0), None);
        assert!(!plain.is_start());
        assert!(!plain.is_end());
    }
}
