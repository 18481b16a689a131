// Seeded randomized checks of the timeline and interpolation invariants.

use lemin_playback::prelude::*;
use lemin_playback::{parse_map, parse_solution};
use std::collections::BTreeMap;

struct Farm {
    map_src: String,
    solution_src: String,
    /// Expected moves per ant id: turn -> room name
    moves: BTreeMap<u32, BTreeMap<u32, String>>,
}

fn random_farm(rng: &mut fastrand::Rng) -> Farm {
    let rooms = rng.usize(2..12);
    let ants = rng.u32(0..8);
    let turns = rng.u32(0..10);

    let mut map_src = format!("{}\n", ants);
    for i in 0..rooms {
        if i == 0 {
            map_src.push_str("##start\n");
        } else if i == rooms - 1 {
            map_src.push_str("##end\n");
        }
        map_src.push_str(&format!("r{} {} {}\n", i, rng.i64(0..100), rng.i64(0..100)));
    }
    for i in 1..rooms {
        map_src.push_str(&format!("r{}-r{}\n", i - 1, i));
    }

    let mut moves: BTreeMap<u32, BTreeMap<u32, String>> = BTreeMap::new();
    let mut solution_src = String::new();
    let mut turn = 0;
    for _ in 0..turns {
        let step: Vec<(u32, String)> = (1..=ants)
            .filter_map(|ant| rng.bool().then(|| (ant, format!("r{}", rng.usize(0..rooms)))))
            .collect();
        // a line with no move is blank and does not count as a turn
        if step.is_empty() {
            continue;
        }
        turn += 1;

        let tokens: Vec<String> = step.iter().map(|(ant, room)| format!("L{}-{}", ant, room)).collect();
        solution_src.push_str(&tokens.join(" "));
        solution_src.push('\n');
        for (ant, room) in step {
            moves.entry(ant).or_default().insert(turn, room);
        }
    }

    Farm {
        map_src,
        solution_src,
        moves,
    }
}

#[test]
fn random_farms_keep_timeline_invariants() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..200 {
        let farm = random_farm(&mut rng);
        let map = parse_map(&farm.map_src).unwrap();
        let solution = parse_solution(&farm.solution_src, &map).unwrap();

        assert_eq!(solution.ants().len() as u32, map.ant_count());

        for ant in solution.ants() {
            let first = ant.first_turn().unwrap();
            assert_eq!(ant.timeline()[&first], map.start());

            let expected = farm.moves.get(&ant.id);
            match expected.and_then(|m| m.keys().next()) {
                Some(&first_move) => assert_eq!(first, first_move - 1),
                None => assert_eq!(first, 0),
            }
            if let Some(moves) = expected {
                for (&turn, room) in moves {
                    assert_eq!(map.room_name(ant.timeline()[&turn]), room);
                }
            }
        }
    }
}

#[test]
fn random_farms_interpolate_inside_bounds() {
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..200 {
        let farm = random_farm(&mut rng);
        let map = parse_map(&farm.map_src).unwrap();
        let solution = parse_solution(&farm.solution_src, &map).unwrap();
        let Some(rect) = solution.bounding_rect() else {
            assert_eq!(map.ant_count(), 0);
            continue;
        };

        for ant in solution.ants() {
            // recorded whole turns land exactly on the room
            for (&turn, &room) in ant.timeline() {
                let c = map.rooms()[room as usize].coords;
                assert_eq!(solution.position_of(ant, turn as f64), Position::from(c));
            }

            // nothing moves after the last record
            let last = ant.last_turn().unwrap();
            let rest = solution.position_of(ant, last as f64);
            for extra in [0.25, 0.5, 1.0, 7.75] {
                assert_eq!(solution.position_of(ant, last as f64 + extra), rest);
            }

            // every blended position stays inside the bounding rectangle
            for step in 0..(solution.turn_count() * 8) {
                let p = solution.position_of(ant, step as f64 / 8.0);
                assert!(p.x >= rect.left as f64 && p.x <= rect.right as f64);
                assert!(p.y >= rect.top as f64 && p.y <= rect.bottom as f64);
            }
        }
    }
}

#[test]
fn engine_never_runs_past_the_last_turn() {
    let mut rng = fastrand::Rng::with_seed(1234);

    for _ in 0..50 {
        let farm = random_farm(&mut rng);
        let map = parse_map(&farm.map_src).unwrap();
        let solution = parse_solution(&farm.solution_src, &map).unwrap();

        let config = PlaybackConfig::new(rng.u64(1..20), rng.u64(0..5)).unwrap();
        let mut engine = PlaybackEngine::new(config);
        let limit = engine.last_tick(&solution);

        for _ in 0..2000 {
            match rng.u8(0..50) {
                0 => engine.play_or_pause(),
                1 => engine.step_forward(),
                2 => engine.step_backward(),
                _ => {}
            }
            engine.tick(&solution);
            assert!(engine.tick_counter() <= limit);
            assert_eq!(engine.positions().len(), solution.ants().len());
        }
    }
}
