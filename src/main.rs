//! Headless Swiftris runner (default binary).
//!
//! Plays a game with random input until the spawn point is blocked, logging board
//! events to stderr and printing the final board snapshot as JSON on stdout.
//!
//! Usage: `swiftris [CONFIG.json]`. `SWIFTRIS_LOG` sets the log level (default info).

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use rand::Rng;

use swiftris::core::{rng, Board, BoardConfig, GamePhase, LogListener};

/// Upper bound on gravity steps, in case a config never fills up
const MAX_TICKS: u32 = 100_000;

fn main() -> Result<()> {
    let level = std::env::var("SWIFTRIS_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Info);
    init_log(level)?;

    let config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let mut input = match config.seed {
        Some(seed) => rng::seeded(seed.wrapping_add(1)),
        None => rng::from_entropy(),
    };

    let mut board = Board::new(config).context("creating board")?;
    board.set_listener(Box::new(LogListener));

    let pieces = play(&mut board, &mut input);
    info!("{} pieces played", pieces);

    println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    Ok(())
}

fn init_log(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {l} {t} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Drive the board the way a UI would: advance, feed input, tick gravity
fn play(board: &mut Board, input: &mut impl Rng) -> u32 {
    board.begin_game();
    let mut pieces = 0;

    for _ in 0..MAX_TICKS {
        if board.phase() != GamePhase::Playing {
            break;
        }

        if board.falling_piece().is_none() {
            let (falling, _) = board.advance_piece();
            if falling.is_none() {
                break;
            }
            pieces += 1;
            continue;
        }

        match input.random_range(0..8) {
            0 => {
                board.rotate_shape();
            }
            1 | 2 => {
                board.move_shape_left();
            }
            3 | 4 => {
                board.move_shape_right();
            }
            5 => board.drop_shape(),
            _ => {}
        }
        board.let_shape_fall();
    }

    pieces
}
