use crate::geometry::{Coords, Position};
use crate::map::RoomId;
use std::collections::BTreeMap;

/// Index of a turn in the movement log; turn 0 is the synthetic departure
pub type Turn = u32;

/// One ant and the sparse record of the rooms it occupied
///
/// A turn without an entry means the ant did not move during that turn.
/// After parsing, the earliest entry is always the start room.
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    timeline: BTreeMap<Turn, RoomId>,
}

impl Ant {
    /// Create an ant with an empty timeline
    pub fn new(id: u32) -> Self {
        Self {
            id,
            timeline: BTreeMap::new(),
        }
    }

    /// Label used in the movement log, e.g. `L3`
    pub fn label(&self) -> String {
        format!("L{}", self.id)
    }

    /// Record the room reached at `turn`; a repeated turn keeps the last room
    pub(crate) fn record(&mut self, turn: Turn, room: RoomId) {
        self.timeline.insert(turn, room);
    }

    /// Insert the departure from `start` one turn before the first move
    ///
    /// An ant that never moves departs at turn 0 and stays there.
    pub(crate) fn add_initial_turn(&mut self, start: RoomId) {
        let departure = match self.timeline.keys().next() {
            Some(&first) => first.saturating_sub(1),
            None => 0,
        };
        self.timeline.insert(departure, start);
    }

    #[inline]
    pub fn timeline(&self) -> &BTreeMap<Turn, RoomId> {
        &self.timeline
    }

    /// Earliest recorded turn (the departure once parsing is done)
    #[inline]
    pub fn first_turn(&self) -> Option<Turn> {
        self.timeline.keys().next().copied()
    }

    /// Turn of the last recorded move
    #[inline]
    pub fn last_turn(&self) -> Option<Turn> {
        self.timeline.keys().next_back().copied()
    }

    /// Room occupied at `turn`: the nearest record at or before it
    #[inline]
    pub fn room_at(&self, turn: Turn) -> Option<RoomId> {
        self.timeline.range(..=turn).next_back().map(|(_, &room)| room)
    }

    /// Interpolated position at fractional turn `t`
    ///
    /// Blends from the room held at `floor(t)` towards the room recorded at
    /// `floor(t) + 1`. Without a record there the ant stands still. Times
    /// before the departure clamp to the departure room.
    pub fn position_at(&self, t: f64, coords: &[Coords]) -> Position {
        let Some((&first, &departure)) = self.timeline.iter().next() else {
            return Position::default();
        };
        if !(t >= first as f64) {
            return coords[departure as usize].into();
        }

        let whole = t.floor();
        let turn = whole as Turn;
        let current = self.room_at(turn).unwrap_or(departure);
        let next = match turn.checked_add(1) {
            Some(n) => self.timeline.get(&n).copied().unwrap_or(current),
            None => current,
        };

        Position::mix(coords[current as usize], coords[next as usize], t - whole)
    }

    /// Rooms visited in order, with consecutive repeats collapsed
    pub fn path(&self) -> Vec<RoomId> {
        let mut path: Vec<RoomId> = self.timeline.values().copied().collect();
        path.dedup();
        path
    }

    /// Consecutive room pairs of `path`, i.e. the tunnels the ant walked
    pub fn path_tunnels(&self) -> Vec<(RoomId, RoomId)> {
        self.path().windows(2).map(|w| (w[0], w[1])).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: RoomId = 0;
    const MID: RoomId = 1;
    const END: RoomId = 2;

    fn coords() -> Vec<Coords> {
        vec![Coords::new(0, 0), Coords::new(10, 0), Coords::new(10, 20)]
    }

    /// Departs at turn 1, reaches MID at 2 and END at 4 (waits during turn 3)
    fn walker() -> Ant {
        let mut ant = Ant::new(1);
        ant.record(2, MID);
        ant.record(4, END);
        ant.add_initial_turn(START);
        ant
    }

    #[test]
    fn test_initial_turn_precedes_first_move() {
        let ant = walker();
        assert_eq!(ant.first_turn(), Some(1));
        assert_eq!(ant.timeline()[&1], START);
        assert_eq!(ant.last_turn(), Some(4));
    }

    #[test]
    fn test_idle_ant_departs_at_zero() {
        let mut ant = Ant::new(7);
        ant.add_initial_turn(START);

        assert_eq!(ant.timeline().len(), 1);
        assert_eq!(ant.first_turn(), Some(0));
        assert_eq!(ant.room_at(0), Some(START));
        assert_eq!(ant.path(), vec![START]);
        assert!(ant.path_tunnels().is_empty());
    }

    #[test]
    fn test_room_at_searches_backwards() {
        let ant = walker();
        assert_eq!(ant.room_at(0), None);
        assert_eq!(ant.room_at(1), Some(START));
        assert_eq!(ant.room_at(2), Some(MID));
        assert_eq!(ant.room_at(3), Some(MID));
        assert_eq!(ant.room_at(4), Some(END));
        assert_eq!(ant.room_at(100), Some(END));
    }

    #[test]
    fn test_position_on_whole_turns() {
        let ant = walker();
        let c = coords();

        assert_eq!(ant.position_at(1.0, &c), Position { x: 0.0, y: 0.0 });
        assert_eq!(ant.position_at(2.0, &c), Position { x: 10.0, y: 0.0 });
        assert_eq!(ant.position_at(4.0, &c), Position { x: 10.0, y: 20.0 });
    }

    #[test]
    fn test_position_between_turns() {
        let ant = walker();
        let c = coords();

        assert_eq!(ant.position_at(1.5, &c), Position { x: 5.0, y: 0.0 });
        // no record at turn 3: waits at MID, then walks towards END
        assert_eq!(ant.position_at(2.5, &c), Position { x: 10.0, y: 0.0 });
        assert_eq!(ant.position_at(3.25, &c), Position { x: 10.0, y: 5.0 });
    }

    #[test]
    fn test_position_clamps_before_departure() {
        let ant = walker();
        let c = coords();

        assert_eq!(ant.position_at(0.0, &c), Position { x: 0.0, y: 0.0 });
        assert_eq!(ant.position_at(0.9, &c), Position { x: 0.0, y: 0.0 });
        assert_eq!(ant.position_at(-3.0, &c), Position { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_position_stays_after_last_turn() {
        let ant = walker();
        let c = coords();

        for t in [4.0, 4.5, 5.0, 99.9] {
            assert_eq!(ant.position_at(t, &c), Position { x: 10.0, y: 20.0 });
        }
    }

    #[test]
    fn test_path_collapses_repeats() {
        let mut ant = Ant::new(2);
        ant.record(1, MID);
        ant.record(2, MID);
        ant.record(3, END);
        ant.add_initial_turn(START);

        assert_eq!(ant.path(), vec![START, MID, END]);
        assert_eq!(ant.path_tunnels(), vec![(START, MID), (MID, END)]);
        assert_eq!(ant.label(), "L2");
    }
}
