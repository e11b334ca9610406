use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_CELL_SIZE_PX, Difficulty, GameConfig, GridSize, HOST_FRAME_INTERVAL,
};
use grid_snake::food::FoodPlacer;
use grid_snake::input::{Direction, GameInput, InputSource};
use grid_snake::keyboard::KeyboardInput;
use grid_snake::renderer;
use grid_snake::scheduler::{FrameOutcome, Scheduler};
use grid_snake::simulator::TickResult;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::ui::hud::HudInfo;
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = 30)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = 20)]
    height: u16,

    /// Pixel size of one cell, for hosts that draw pixels.
    #[arg(long = "cell-size", default_value_t = DEFAULT_CELL_SIZE_PX)]
    cell_size: u16,

    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a terminal and print the final state as JSON.
    #[arg(long)]
    headless: bool,

    /// Maximum ticks to simulate in headless mode.
    #[arg(long, default_value_t = 100)]
    ticks: u32,

    /// Turns for headless mode, one letter (U/R/D/L) queued per tick.
    #[arg(long, default_value = "")]
    moves: String,
}

fn main() -> io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig {
        grid: GridSize {
            width: cli.width,
            height: cli.height,
        },
        cell_size_px: cli.cell_size,
        difficulty: cli.difficulty,
    };
    let placer = match cli.seed {
        Some(seed) => FoodPlacer::with_seed(seed),
        None => FoodPlacer::from_entropy(),
    };
    let scheduler = Scheduler::new(config, placer).map_err(io::Error::other)?;

    if cli.headless {
        run_headless(scheduler, cli.ticks, &cli.moves)
    } else {
        install_panic_hook();
        run_terminal(scheduler)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run_terminal(mut scheduler: Scheduler) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = KeyboardInput::new(HOST_FRAME_INTERVAL, session.reports_key_releases());
    // Nothing to load before the first frame in a terminal.
    scheduler.mark_ready();
    scheduler.start().map_err(io::Error::other)?;
    let clock = Instant::now();

    loop {
        let snapshot = scheduler.snapshot();
        let summary = scheduler.summary();
        let hud = HudInfo {
            difficulty: scheduler.config().difficulty,
            speed_modifier: scheduler.speed_modifier(),
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, &hud, summary))?;

        if let Some(command) = input.poll_input()? {
            if command == GameInput::Quit {
                break;
            }
            scheduler.apply_input(command).map_err(io::Error::other)?;
        }

        if let Some(ticket) = scheduler.next_frame() {
            scheduler.on_frame(ticket, clock.elapsed());
        }
    }

    Ok(())
}

fn run_headless(mut scheduler: Scheduler, ticks: u32, moves: &str) -> io::Result<()> {
    scheduler.mark_ready();
    scheduler.start().map_err(io::Error::other)?;

    let mut moves = moves.chars().filter_map(Direction::from_letter);
    let mut now = Duration::ZERO;

    for _ in 0..ticks {
        if let Some(direction) = moves.next() {
            let _ = scheduler.enqueue_direction(direction);
        }

        match advance_one_tick(&mut scheduler, &mut now) {
            Some(result) if !result.is_terminal() => {}
            _ => break,
        }
    }

    if let Some(summary) = scheduler.summary() {
        info!(score = summary.score, reason = ?summary.reason, "headless run ended");
    }

    let json = serde_json::to_string_pretty(&scheduler.snapshot())
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    println!("{json}");

    Ok(())
}

/// Feeds synthetic frames until one tick runs or the loop stops asking.
fn advance_one_tick(scheduler: &mut Scheduler, now: &mut Duration) -> Option<TickResult> {
    loop {
        let ticket = scheduler.next_frame()?;
        let outcome = scheduler.on_frame(ticket, *now);
        *now += HOST_FRAME_INTERVAL;

        match outcome {
            FrameOutcome::Ticked(result) => return Some(result),
            FrameOutcome::Waiting => {}
            FrameOutcome::Idle | FrameOutcome::Stale => return None,
        }
    }
}
