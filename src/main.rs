//! Headless Blockfall runner (default binary).
//!
//! Drives the engine at a fixed frame rate, either with a built-in random
//! player or with tokens read from stdin, and prints the final state.
//! Set `RUST_LOG=info` (or `debug`) to follow the game through the log observer.

use std::io::{self, BufRead};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use blockfall::core::SimpleRng;
use blockfall::engine::{Flow, Game, GameConfig, LogObserver};
use blockfall::types::{
    InputToken, Screen, BASE_FALL_SPEED, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    POWER_UP_CHANCE,
};

/// Falling-block puzzle engine with stackable power-up pieces.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Headless falling-block puzzle runner.",
    long_about = "Runs the Blockfall engine without a display.\n\n\
        By default a random player presses keys until the game ends. With --script, \
        one token per line is read from stdin instead:\n  \
        START QUIT LEFT RIGHT DOWN ROTATE DROP PAUSE RESUME RESTART MENU\n  \
        TICK <seconds>   advance the game clock\n\
        Blank lines and lines starting with '#' are skipped; unknown tokens are ignored."
)]
struct Args {
    /// Seed for piece and power-up selection.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Playfield width in columns.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_name = "COLS")]
    width: usize,

    /// Playfield height in rows.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_name = "ROWS")]
    height: usize,

    /// Seconds between automatic drops at level 1.
    #[arg(long, default_value_t = BASE_FALL_SPEED, value_name = "SECS")]
    fall_speed: f64,

    /// Probability that a spawned piece carries a power-up.
    #[arg(long, default_value_t = POWER_UP_CHANCE, value_name = "P")]
    power_up_chance: f64,

    /// Simulated frames per second (random player only).
    #[arg(long, default_value_t = 60.0, value_name = "RATE")]
    fps: f64,

    /// Stop the random player after this many frames.
    #[arg(long, default_value_t = 100_000, value_name = "N")]
    max_frames: u64,

    /// Sleep between frames so the random player runs in wall-clock time.
    #[arg(long)]
    realtime: bool,

    /// Read tokens from stdin instead of using the random player.
    #[arg(long)]
    script: bool,

    /// Print the final snapshot as JSON instead of a summary line.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let frame = frame_duration(args.fps)?;

    let config = GameConfig::default()
        .with_size(args.width, args.height)
        .with_fall_speed(args.fall_speed)
        .with_power_up_chance(args.power_up_chance)
        .with_seed(args.seed);
    let mut game =
        Game::with_observer(config, LogObserver).context("invalid game configuration")?;

    if args.script {
        run_script(&mut game, io::stdin().lock())?;
    } else {
        run_bot(&mut game, &args, frame);
    }

    report(&game, args.json)
}

/// Length of one simulated frame at `fps` frames per second
fn frame_duration(fps: f64) -> Result<Duration> {
    if !(fps.is_finite() && fps > 0.0) {
        bail!("--fps must be positive, got {}", fps);
    }
    match Duration::try_from_secs_f64(1.0 / fps) {
        Ok(frame) => Ok(frame),
        Err(err) => bail!("--fps {} gives an unusable frame length: {}", fps, err),
    }
}

/// Feed stdin lines into the game until EOF or QUIT
fn run_script(game: &mut Game<LogObserver>, input: impl BufRead) -> Result<()> {
    for (number, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading script line {}", number + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or_default();
        if head.eq_ignore_ascii_case("TICK") {
            let seconds: f64 = parts
                .next()
                .context("TICK needs a number of seconds")?
                .parse()
                .with_context(|| format!("bad TICK value on line {}", number + 1))?;
            game.update(seconds);
            continue;
        }

        if InputToken::from_str(head).is_none() {
            warn!("ignoring unknown token {:?} on line {}", head, number + 1);
        }
        if game.handle_raw_input(head) == Flow::Quit {
            info!("quit requested on line {}", number + 1);
            break;
        }
    }
    Ok(())
}

/// Random player: starts a game and presses a random key on some frames
fn run_bot(game: &mut Game<LogObserver>, args: &Args, frame: Duration) {
    const MOVES: [InputToken; 5] = [
        InputToken::Left,
        InputToken::Right,
        InputToken::Rotate,
        InputToken::Down,
        InputToken::Drop,
    ];

    let mut rng = SimpleRng::new(args.seed ^ 0x5eed_b0a7);
    let dt = frame.as_secs_f64();

    game.start_new_game();
    let mut frames = 0u64;
    let mut last_tick = Instant::now();

    while frames < args.max_frames && game.screen() == Screen::Playing {
        // Roughly one key press every six frames, hard drops rarer than moves
        if rng.chance(1.0 / 6.0) {
            let token = match rng.pick(&MOVES) {
                Some(InputToken::Drop) if !rng.chance(0.3) => InputToken::Down,
                Some(token) => token,
                None => InputToken::Down,
            };
            game.handle_input(token);
        }

        game.update(dt);
        frames += 1;

        if args.realtime {
            if let Some(remaining) = frame.checked_sub(last_tick.elapsed()) {
                thread::sleep(remaining);
            }
            last_tick = Instant::now();
        }
    }

    info!("random player stopped after {} frames", frames);
}

fn report(game: &Game<LogObserver>, json: bool) -> Result<()> {
    let snapshot = game.snapshot();
    if json {
        let text = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
        println!("{}", text);
    } else {
        println!(
            "state={} score={} level={} lines={} game_over={}",
            snapshot.state, snapshot.score, snapshot.level, snapshot.lines, snapshot.game_over
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_at_sixty_fps() {
        let frame = frame_duration(60.0).unwrap();
        assert!((frame.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_duration_rejects_bad_rates() {
        assert!(frame_duration(0.0).is_err());
        assert!(frame_duration(-5.0).is_err());
        assert!(frame_duration(f64::NAN).is_err());
        // Tiny rates overflow the frame length instead of panicking
        assert!(frame_duration(1e-30).is_err());
    }
}
