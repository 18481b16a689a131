use crate::map::room::{Room, RoomId, Tunnel};
use std::collections::HashMap;

/// Parsed puzzle graph: ant population, rooms and tunnels
///
/// A `Map` is only ever built by the parser and is immutable afterwards.
/// It always has exactly one start and one end room.
#[derive(Clone, Debug)]
pub struct Map {
    ant_count: u32,
    rooms: Vec<Room>,
    name_to_id: HashMap<String, RoomId>,
    tunnels: Vec<Tunnel>,
    start: RoomId,
    end: RoomId,
}

impl Map {
    pub(crate) fn new(
        ant_count: u32,
        rooms: Vec<Room>,
        name_to_id: HashMap<String, RoomId>,
        tunnels: Vec<Tunnel>,
        start: RoomId,
        end: RoomId,
    ) -> Self {
        Self {
            ant_count,
            rooms,
            name_to_id,
            tunnels,
            start,
            end,
        }
    }

    /// Number of ants leaving the start room
    #[inline]
    pub fn ant_count(&self) -> u32 {
        self.ant_count
    }

    /// All rooms, indexed by `RoomId`
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Tunnels in declaration order
    #[inline]
    pub fn tunnels(&self) -> &[Tunnel] {
        &self.tunnels
    }

    #[inline]
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_to_id.get(name).copied()
    }

    #[inline]
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.room_id(name).map(|id| &self.rooms[id as usize])
    }

    #[inline]
    pub fn room_by_id(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id as usize)
    }

    /// Get the name of a room by id
    ///
    /// # Panics
    /// If `id` does not belong to this map
    pub fn room_name(&self, id: RoomId) -> &str {
        &self.rooms[id as usize].name
    }

    #[inline]
    pub fn start(&self) -> RoomId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.end
    }

}
