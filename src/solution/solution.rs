use crate::geometry::{Coords, Position, Rect};
use crate::map::RoomId;
use crate::solution::ant::Ant;
use std::collections::BTreeSet;

/// Per-ant timelines of a whole movement log
///
/// Built once by the parser and never mutated. Interpolated positions are
/// written into caller-owned buffers so the model stays shareable.
#[derive(Clone, Debug)]
pub struct Solution {
    ants: Vec<Ant>,
    turn_count: u32,
    bounding_rect: Option<Rect>,
    room_coords: Vec<Coords>,
}

impl Solution {
    pub(crate) fn new(ants: Vec<Ant>, turn_count: u32, room_coords: Vec<Coords>) -> Self {
        let bounding_rect = Rect::enclosing(
            ants.iter()
                .flat_map(|a| a.timeline().values())
                .map(|&room| room_coords[room as usize]),
        );
        Self {
            ants,
            turn_count,
            bounding_rect,
            room_coords,
        }
    }

    /// Ants ordered by id, `ants()[i].id == i + 1`
    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Get an ant by its 1-based id
    #[inline]
    pub fn ant(&self, id: u32) -> Option<&Ant> {
        let idx = id.checked_sub(1)?;
        self.ants.get(idx as usize)
    }

    /// Number of movement lines plus the departure turn
    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Smallest rectangle holding every room any ant occupies, `None` without ants
    #[inline]
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.bounding_rect
    }

    /// Every room occupied by at least one ant at some turn
    pub fn visited_rooms(&self) -> BTreeSet<RoomId> {
        self.ants
            .iter()
            .flat_map(|a| a.timeline().values().copied())
            .collect()
    }

    /// Position of a single ant at fractional turn `t`
    #[inline]
    pub fn position_of(&self, ant: &Ant, t: f64) -> Position {
        ant.position_at(t, &self.room_coords)
    }

    /// Interpolate every ant at `t` into `out`, which is resized to fit
    pub fn write_positions(&self, t: f64, out: &mut Vec<Position>) {
        out.clear();
        out.extend(self.ants.iter().map(|a| self.position_of(a, t)));
    }

    /// Positions of all ants at `t`, in id order
    pub fn positions_at(&self, t: f64) -> Vec<Position> {
        let mut out = Vec::with_capacity(self.ants.len());
        self.write_positions(t, &mut out);
        out
    }
}
