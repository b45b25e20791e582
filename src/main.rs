//! Headless demo runner
//!
//! Runs one of the three games for a fixed number of ticks with a scripted
//! input pattern and prints a JSON summary of the final session. Useful for
//! exercising the simulation without a renderer:
//!
//! ```text
//! astro-arcade [rings|surfer|invader] [seed]
//! ```

use serde::Serialize;

use astro_arcade::audio::{AudioCue, AudioSink};
use astro_arcade::consts::NOMINAL_DT;
use astro_arcade::input::FrameInput;
use astro_arcade::sim::{InvaderGame, RingsGame, SurferGame};
use astro_arcade::{GameConfig, GamePhase, GameSession, ShipKind};

/// One minute of simulated play
const DEMO_TICKS: u32 = 3600;

/// Sink that logs cues instead of playing them
struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("audio: {cue:?}");
    }
}

#[derive(Serialize)]
struct RunSummary<'a> {
    game: &'a str,
    seed: u64,
    ticks: u32,
    phase: GamePhase,
    score: u32,
    game_over_reason: &'a str,
    live_entities: usize,
    elapsed_secs: f32,
}

fn summarize(game: &str, seed: u64, ticks: u32, session: &GameSession, live: usize, elapsed: f32) {
    let summary = RunSummary {
        game,
        seed,
        ticks,
        phase: session.phase,
        score: session.score,
        game_over_reason: &session.game_over_reason,
        live_entities: live,
        elapsed_secs: elapsed,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("summary serialization failed: {e}"),
    }
}

/// Scripted steering: weave and boost periodically
fn rings_input(tick: u32) -> FrameInput {
    FrameInput {
        left: (tick / 120).is_multiple_of(2),
        right: !(tick / 120).is_multiple_of(2),
        up: (tick / 300).is_multiple_of(2),
        boost: tick % 600 < 90,
        boost_tap: tick % 600 == 0,
        ..Default::default()
    }
}

/// Scripted lane hopping
fn surfer_input(tick: u32) -> FrameInput {
    FrameInput {
        left_tap: tick % 90 == 0,
        right_tap: tick % 90 == 45,
        ..Default::default()
    }
}

/// Scripted horizontal sweep
fn invader_input(tick: u32) -> FrameInput {
    FrameInput {
        left: (tick / 180).is_multiple_of(2),
        right: !(tick / 180).is_multiple_of(2),
        ..Default::default()
    }
}

fn run_rings(config: GameConfig) {
    let mut game = RingsGame::new(config);
    let mut audio = LogAudio;
    game.start();
    let mut ticks = 0;
    for tick in 0..DEMO_TICKS {
        game.tick(&rings_input(tick), NOMINAL_DT, &mut audio);
        ticks = tick + 1;
        if !game.session.is_playing() {
            break;
        }
    }
    summarize(
        "rings",
        config.seed,
        ticks,
        &game.session,
        game.remaining_rings(),
        game.elapsed,
    );
}

fn run_surfer(config: GameConfig) {
    let mut game = SurferGame::new(config);
    let mut audio = LogAudio;
    game.start();
    let mut ticks = 0;
    for tick in 0..DEMO_TICKS {
        game.tick(&surfer_input(tick), NOMINAL_DT, &mut audio);
        ticks = tick + 1;
        if !game.session.is_playing() {
            break;
        }
    }
    summarize(
        "surfer",
        config.seed,
        ticks,
        &game.session,
        game.obstacles.len() + game.lasers.len(),
        game.elapsed,
    );
}

fn run_invader(config: GameConfig) {
    let mut game = InvaderGame::new(config);
    let mut audio = LogAudio;
    game.start();
    let mut ticks = 0;
    for tick in 0..DEMO_TICKS {
        game.tick(&invader_input(tick), NOMINAL_DT, &mut audio);
        ticks = tick + 1;
        if !game.session.is_playing() {
            break;
        }
    }
    summarize(
        "invader",
        config.seed,
        ticks,
        &game.session,
        game.asteroids.len() + game.lasers.len(),
        game.elapsed,
    );
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let game = args.next().unwrap_or_else(|| "rings".to_string());
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let config = GameConfig::for_ship(ShipKind::Ship1, seed);

    log::info!("running {game} demo with seed {seed}");
    match game.as_str() {
        "rings" => run_rings(config),
        "surfer" => run_surfer(config),
        "invader" => run_invader(config),
        other => {
            eprintln!("unknown game '{other}', expected rings | surfer | invader");
            std::process::exit(2);
        }
    }
}
