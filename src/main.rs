use clap::Parser;
use lemin_playback::console;
use lemin_playback::prelude::*;
use std::process::ExitCode;
use std::time::Instant;

/// Load from both files, or from combined lem-in output on stdin
fn load_scene(args: &Args) -> Result<Scene> {
    let config = args.playback_config();
    match (&args.map, &args.solution) {
        (Some(map), Some(solution)) => Scene::read_files(map, solution, config),
        _ => Scene::read_combined(std::io::stdin().lock(), config),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut scene = match load_scene(&args) {
        Ok(scene) => scene,
        Err(err) => {
            console::print_error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };
    if let Some(err) = scene.error() {
        console::print_error(err);
        return ExitCode::FAILURE;
    }
    if let (Some(map), Some(solution)) = (scene.map(), scene.solution()) {
        console::print_summary(map, solution);
    }

    // Run playback
    let started = Instant::now();
    let mut ticks = 0u64;
    while args.frames.map_or(true, |limit| ticks < limit) {
        let event = scene.tick();
        ticks += 1;

        match event {
            TickEvent::TurnReached(turn) if !args.suppress_events => {
                if let (Some(map), Some(solution)) = (scene.map(), scene.solution()) {
                    console::log_turn(map, solution, turn);
                }
            }
            TickEvent::Restarted => {
                if !args.suppress_events {
                    console::log_restart();
                }
                if args.frames.is_none() {
                    break;
                }
            }
            _ => {}
        }
    }

    console::print_latency(started.elapsed(), ticks, scene.engine().current_turn());

    ExitCode::SUCCESS
}
