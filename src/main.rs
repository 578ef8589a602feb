//! u235 entry point
//!
//! Headless host: loads settings, runs the autopilot through a session at a
//! fixed frame rate and prints a JSON summary when done.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::Duration;

    use u235::audio::LogPlayer;
    use u235::sim::GameState;
    use u235::{Flow, Session, Settings, autopilot};

    env_logger::init();
    log::info!("Commands: left/right move, shoot fires, quit exits, restart after game over");

    let settings = Settings::load_or_default(Path::new("u235.json"));
    let seed = settings.seed.unwrap_or_else(u235::clock_seed);
    log::info!(
        "u235 starting (seed {}, {} frames at {} fps)",
        seed,
        settings.max_frames,
        settings.fps
    );

    let state = GameState::new(seed, settings.sim_config());
    let mut session = Session::new(state, LogPlayer::from_settings(&settings));
    if let Some(base) = settings.seed {
        session = session.with_seed(base);
    }
    let frame_time = Duration::from_secs(1) / settings.fps;

    for _ in 0..settings.max_frames {
        let commands = autopilot::plan(session.state());
        if session.step(&commands) == Flow::Quit {
            break;
        }
        if settings.realtime {
            std::thread::sleep(frame_time);
        }
    }

    let summary = session.summary();
    log::info!(
        "Finished: score {}, high score {}, {} restarts",
        summary.score,
        summary.high_score,
        summary.restarts
    );
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is the deliverable on wasm
}
