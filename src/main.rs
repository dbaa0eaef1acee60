//! Brickfall entry point
//!
//! Runs the simulation headless in self-play: useful as a smoke test, a
//! balance probe, and a high-score generator. A renderer would drive the
//! same `tick` loop with real input instead.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use brickfall::consts::SIM_DT;
use brickfall::highscores::{HighScores, RunEntry};
use brickfall::settings::Settings;
use brickfall::sim::{GamePhase, GameState, TickInput, generate_grid, tick};

/// Stop a demo run after ten simulated minutes
const MAX_DEMO_TICKS: u64 = 10 * 60 * 120;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brickfall starting...");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let (mut rows, mut cols) = settings.grid();

    // Optional `brickfall <rows> <cols>` override
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() == 2 {
        match (args[0].parse(), args[1].parse()) {
            (Ok(r), Ok(c)) => {
                rows = r;
                cols = c;
            }
            _ => log::warn!("Ignoring malformed grid arguments: {args:?}"),
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut state = GameState::with_grid(seed, rows, cols);
    generate_grid(&mut state);
    let total_bricks = state.bricks_left.value();
    log::info!("Game initialized with seed: {seed}");

    let input = TickInput {
        self_play: true,
        ..Default::default()
    };

    while state.phase == GamePhase::Playing && state.time_ticks < MAX_DEMO_TICKS {
        tick(&mut state, &input, SIM_DT);
    }

    let run = RunEntry {
        bricks_destroyed: total_bricks - state.bricks_left.value(),
        lives_left: state.lives,
        ticks: state.time_ticks,
        won: state.phase == GamePhase::Won,
    };

    match state.phase {
        GamePhase::Won => log::info!(
            "You win! {} bricks in {} ticks, {} lives left",
            run.bricks_destroyed,
            run.ticks,
            run.lives_left
        ),
        GamePhase::Lost => log::info!(
            "You lose! {} of {} bricks destroyed in {} ticks",
            run.bricks_destroyed,
            total_bricks,
            run.ticks
        ),
        _ => log::info!("Demo stopped after {} ticks", run.ticks),
    }

    let scores_path = Path::new(HighScores::FILE_NAME);
    let mut scores = HighScores::load(scores_path);
    if let Some(rank) = scores.add_run(run) {
        log::info!("Run entered the best-runs table at rank {rank}");
        if let Err(e) = scores.save(scores_path) {
            log::warn!("Failed to save high scores: {e}");
        }
    }
}
