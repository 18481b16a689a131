use crate::map::{Map, RoomId};
use crate::solution::Solution;
use colored::Colorize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Distinct routes taken by the ants, with how many ants share each
///
/// Routes are listed in order of the lowest ant id walking them.
pub fn distinct_routes(solution: &Solution) -> Vec<(Vec<RoomId>, usize)> {
    let mut routes: Vec<(Vec<RoomId>, usize)> = Vec::new();
    let mut index: HashMap<Vec<RoomId>, usize> = HashMap::new();

    for ant in solution.ants() {
        let path = ant.path();
        match index.get(&path) {
            Some(&i) => routes[i].1 += 1,
            None => {
                index.insert(path.clone(), routes.len());
                routes.push((path, 1));
            }
        }
    }
    routes
}

/// Number of distinct tunnels walked by at least one ant
pub fn used_tunnel_count(solution: &Solution) -> usize {
    solution
        .ants()
        .iter()
        .flat_map(|a| a.path_tunnels())
        .map(|(x, y)| (x.min(y), x.max(y)))
        .collect::<HashSet<_>>()
        .len()
}

/// Print what was loaded
pub fn print_summary(map: &Map, solution: &Solution) {
    println!("{}", "===".bright_blue().bold());
    println!(
        "{} {} {} {}",
        "🗺️  Map:".green().bold(),
        format!("rooms={}", map.rooms().len()).cyan(),
        format!("tunnels={}", map.tunnels().len()).cyan(),
        format!("ants={}", map.ant_count()).cyan(),
    );
    println!(
        "{} {} {} {}",
        "🐜 Solution:".green().bold(),
        format!("turns={}", solution.turn_count().saturating_sub(1)).cyan(),
        format!("used_tunnels={}", used_tunnel_count(solution)).cyan(),
        match solution.bounding_rect() {
            Some(r) => format!(
                "rect=[top={} left={} bottom={} right={}]",
                r.top, r.left, r.bottom, r.right
            )
            .cyan(),
            None => "rect=none".dimmed(),
        },
    );

    for (n, (route, ants)) in distinct_routes(solution).iter().enumerate() {
        let names: Vec<&str> = route.iter().map(|&id| map.room_name(id)).collect();
        println!(
            "   {} {} {}",
            format!("route {}", n + 1).yellow(),
            format!("({} ants)", ants).dimmed(),
            names.join(" → "),
        );
    }
}

/// Log where every ant stands on a whole turn
///
/// The extra dwell turn past the last movement line is not logged.
pub fn log_turn(map: &Map, solution: &Solution, turn: u64) {
    if turn >= u64::from(solution.turn_count()) {
        return;
    }
    println!(
        "{} {}",
        "⏭️  turn".bright_blue(),
        format!("{} / {}", turn, solution.turn_count().saturating_sub(1)).bold(),
    );

    let turn = u32::try_from(turn).unwrap_or(u32::MAX);
    for ant in solution.ants() {
        // before a late departure the ant still waits in its first room
        let Some(room) = ant
            .room_at(turn)
            .or_else(|| ant.timeline().values().next().copied())
        else {
            continue;
        };
        let Some(room) = map.room_by_id(room) else {
            continue;
        };
        let mut name = room.name.as_str().normal();
        if room.is_start() {
            name = name.dimmed();
        } else if room.is_end() {
            name = name.green();
        }
        println!(
            "   {} {} {}",
            ant.label().yellow(),
            name,
            format!("({}, {})", room.coords.x, room.coords.y).dimmed(),
        );
    }
}

pub fn log_restart() {
    println!("{}", "🔁 playback restarted".bright_blue());
}

/// Print a parse failure to stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "❌".red(), msg.bright_red());
}

/// Print the playback run time
pub fn print_latency(elapsed: Duration, ticks: u64, turn: u64) {
    println!(
        "\n{}\n{} {:.3} ms {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Playback Latency:".green().bold(),
        elapsed.as_secs_f64() * 1000.0,
        "|".dimmed(),
        format!("ticks={}", ticks).cyan(),
        format!("turn={}", turn).cyan(),
    );
}
