use crate::error::MapParseError;
use crate::geometry::Coords;
use crate::map::map::Map;
use crate::map::room::{Room, RoomId, RoomRole, Tunnel};
use std::collections::HashMap;

type ParseResult<T> = std::result::Result<T, MapParseError>;

/// Parse a map from its text form
///
/// Rooms are read until the first line containing a `-`; that line and every
/// following non-comment line are tunnels. `##start` / `##end` tag the next
/// room line only.
pub fn parse_map(src: &str) -> ParseResult<Map> {
    let mut lines = src
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()));

    let (_, first) = lines.next().ok_or(MapParseError::MissingAntCount)?;
    let ant_count: u32 = first
        .parse()
        .map_err(|_| MapParseError::InvalidAntCount(first.to_string()))?;

    let mut rooms: Vec<Room> = Vec::with_capacity(64);
    let mut name_to_id: HashMap<String, RoomId> = HashMap::with_capacity(64);
    let mut start: Option<RoomId> = None;
    let mut end: Option<RoomId> = None;

    // Pending role from the last command line, consumed by the next room
    let mut pending: Option<RoomRole> = None;
    let mut first_tunnel: Option<(usize, &str)> = None;

    for (no, line) in lines.by_ref() {
        if line.is_empty() || is_comment_line(line) {
            continue;
        }
        if is_tunnel_line(line) {
            first_tunnel = Some((no, line));
            break;
        }
        if let Some(command) = line.strip_prefix("##") {
            pending = RoomRole::from_command(command);
            continue;
        }

        let role = pending.take();
        let room = parse_room_line(no, line, role)?;
        if name_to_id.contains_key(&room.name) {
            return Err(MapParseError::DuplicateRoom {
                line: no,
                name: room.name,
            });
        }

        let id = rooms.len() as RoomId;
        if let Some(role) = role {
            let slot = match role {
                RoomRole::Start => &mut start,
                RoomRole::End => &mut end,
            };
            if slot.is_some() {
                return Err(MapParseError::DuplicateRole {
                    line: no,
                    role: role.as_str().to_string(),
                    name: room.name,
                });
            }
            *slot = Some(id);
        }
        name_to_id.insert(room.name.clone(), id);
        rooms.push(room);
    }

    let mut tunnels: Vec<Tunnel> = Vec::with_capacity(rooms.len() * 2);
    for (no, line) in first_tunnel.into_iter().chain(lines) {
        if line.is_empty() || is_comment_line(line) {
            continue;
        }
        tunnels.push(parse_tunnel_line(no, line, &name_to_id)?);
    }

    let start = start.ok_or_else(|| MapParseError::MissingRole(RoomRole::Start.as_str().into()))?;
    let end = end.ok_or_else(|| MapParseError::MissingRole(RoomRole::End.as_str().into()))?;

    Ok(Map::new(ant_count, rooms, name_to_id, tunnels, start, end))
}

/// `#` followed by anything but a second `#`
#[inline]
fn is_comment_line(line: &str) -> bool {
    line.starts_with('#') && !line.starts_with("##")
}

#[inline]
fn is_tunnel_line(line: &str) -> bool {
    line.contains('-')
}

fn parse_room_line(no: usize, line: &str, role: Option<RoomRole>) -> ParseResult<Room> {
    let mut parts = line.split_whitespace();
    let (Some(name), Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(MapParseError::InvalidRoomLine {
            line: no,
            text: line.to_string(),
        });
    };

    let coord = |s: &str| {
        s.parse::<i64>().map_err(|_| MapParseError::InvalidCoordinate {
            line: no,
            value: s.to_string(),
        })
    };

    Ok(Room::new(name, Coords::new(coord(x)?, coord(y)?), role))
}

fn parse_tunnel_line(
    no: usize,
    line: &str,
    name_to_id: &HashMap<String, RoomId>,
) -> ParseResult<Tunnel> {
    let invalid = || MapParseError::InvalidTunnelLine {
        line: no,
        text: line.to_string(),
    };

    let (a, b) = line.split_once('-').ok_or_else(invalid)?;
    if a.is_empty() || b.is_empty() || b.contains('-') {
        return Err(invalid());
    }

    let lookup = |name: &str| {
        name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| MapParseError::UnknownRoom {
                line: no,
                name: name.to_string(),
            })
    };
    let (a_id, b_id) = (lookup(a)?, lookup(b)?);
    if a_id == b_id {
        return Err(MapParseError::SelfTunnel {
            line: no,
            name: a.to_string(),
        });
    }

    Ok(Tunnel::new(a_id, b_id))
}
