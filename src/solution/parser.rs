use crate::error::SolutionParseError;
use crate::map::{Map, RoomId};
use crate::solution::ant::{Ant, Turn};
use crate::solution::solution::Solution;

type ParseResult<T> = std::result::Result<T, SolutionParseError>;

/// Parse a movement log against `map`
///
/// Each non-empty line is one turn, starting at turn 1. Ants absent from a
/// line did not move. Every ant of the map gets a timeline, even if idle.
pub fn parse_solution(src: &str, map: &Map) -> ParseResult<Solution> {
    let mut ants: Vec<Ant> = (1..=map.ant_count()).map(Ant::new).collect();
    let mut turn: Turn = 0;

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        turn += 1;

        for token in line.split_whitespace() {
            let (ant_idx, room) = parse_move(turn, token, map)?;
            ants[ant_idx].record(turn, room);
        }
    }

    for ant in &mut ants {
        ant.add_initial_turn(map.start());
    }

    let coords = map.rooms().iter().map(|r| r.coords).collect();
    Ok(Solution::new(ants, turn + 1, coords))
}

/// Resolve an `L<ant>-<room>` token into an ant index and a room
fn parse_move(turn: Turn, token: &str, map: &Map) -> ParseResult<(usize, RoomId)> {
    let invalid = || SolutionParseError::InvalidToken {
        turn,
        token: token.to_string(),
    };

    let (ant, room) = token
        .strip_prefix('L')
        .and_then(|rest| rest.split_once('-'))
        .ok_or_else(invalid)?;
    if ant.is_empty() || room.is_empty() {
        return Err(invalid());
    }

    // ids are the exact strings "1".."N": no sign, no leading zero
    let canonical = ant.bytes().all(|b| b.is_ascii_digit()) && !ant.starts_with('0');
    let ant_idx = match ant.parse::<u32>() {
        Ok(id) if canonical && (1..=map.ant_count()).contains(&id) => (id - 1) as usize,
        _ => {
            return Err(SolutionParseError::UnknownAnt {
                turn,
                ant: ant.to_string(),
            })
        }
    };
    let room_id = map
        .room_id(room)
        .ok_or_else(|| SolutionParseError::UnknownRoom {
            turn,
            room: room.to_string(),
        })?;

    Ok((ant_idx, room_id))
}
