use std::time::Duration;

use grid_snake::config::{Difficulty, GameConfig, GridSize};
use grid_snake::food::FoodPlacer;
use grid_snake::game::{EndReason, GameStatus};
use grid_snake::input::{Direction, GameInput, SpeedModifier};
use grid_snake::scheduler::{FrameOutcome, Scheduler};
use grid_snake::simulator::TickResult;
use grid_snake::snake::Position;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn ready_scheduler(grid: GridSize, difficulty: Difficulty) -> Scheduler {
    let config = GameConfig {
        grid,
        cell_size_px: 20,
        difficulty,
    };
    let mut scheduler = Scheduler::new(config, FoodPlacer::with_seed(17)).expect("valid config");
    scheduler.mark_ready();
    scheduler
}

/// Feeds frames `step` apart until one tick happens.
fn run_until_tick(scheduler: &mut Scheduler, now: &mut Duration, step: Duration) -> TickResult {
    loop {
        let ticket = scheduler.next_frame().expect("loop is running");
        let outcome = scheduler.on_frame(ticket, *now);
        *now += step;
        if let FrameOutcome::Ticked(result) = outcome {
            return result;
        }
    }
}

#[test]
fn running_into_the_right_wall_stops_and_ends_the_loop() {
    let grid = GridSize {
        width: 6,
        height: 3,
    };
    let mut scheduler = ready_scheduler(grid, Difficulty::Hard);
    scheduler.start().expect("ready");
    let mut now = Duration::ZERO;

    // Snake starts at x = 1..=3 heading right; the wall is three moves away.
    let mut result = TickResult::Continue;
    for _ in 0..3 {
        result = run_until_tick(&mut scheduler, &mut now, ms(10));
        if result == TickResult::Collided {
            break;
        }
    }

    assert_eq!(result, TickResult::Collided);
    assert_eq!(scheduler.status(), GameStatus::Stopped);
    assert!(scheduler.next_frame().is_none());

    let summary = scheduler.summary().expect("game ended");
    assert_eq!(summary.reason, EndReason::Wall);
    assert_eq!(summary.score, scheduler.score());
    assert_eq!(summary.length, 3 + summary.score as usize);
}

#[test]
fn faster_modifier_halves_the_wait() {
    let grid = GridSize {
        width: 29,
        height: 19,
    };
    let mut scheduler = ready_scheduler(grid, Difficulty::Low);
    let ticket = scheduler.start().expect("ready");
    scheduler.set_speed_modifier(SpeedModifier::Faster);

    assert_eq!(scheduler.on_frame(ticket, ms(0)), FrameOutcome::Waiting);
    let ticket = scheduler.next_frame().expect("loop is running");
    assert!(matches!(
        scheduler.on_frame(ticket, ms(250)),
        FrameOutcome::Ticked(_)
    ));
}

#[test]
fn slower_modifier_doubles_the_wait() {
    let grid = GridSize {
        width: 29,
        height: 19,
    };
    let mut scheduler = ready_scheduler(grid, Difficulty::Hard);
    let ticket = scheduler.start().expect("ready");
    scheduler.set_speed_modifier(SpeedModifier::Slower);

    assert_eq!(scheduler.on_frame(ticket, ms(0)), FrameOutcome::Waiting);
    let ticket = scheduler.next_frame().expect("loop is running");
    assert_eq!(scheduler.on_frame(ticket, ms(150)), FrameOutcome::Waiting);
    let ticket = scheduler.next_frame().expect("loop is running");
    assert!(matches!(
        scheduler.on_frame(ticket, ms(200)),
        FrameOutcome::Ticked(_)
    ));
}

#[test]
fn at_most_one_queued_turn_is_applied_per_tick() {
    let grid = GridSize {
        width: 29,
        height: 19,
    };
    let mut scheduler = ready_scheduler(grid, Difficulty::Hard);
    scheduler.start().expect("ready");
    let mut now = Duration::ZERO;

    assert!(scheduler.enqueue_direction(Direction::Down));
    assert!(scheduler.enqueue_direction(Direction::Left));

    run_until_tick(&mut scheduler, &mut now, ms(50));
    let head = scheduler.snake_segments().last().expect("snake has a head");
    assert_eq!(head, Position { x: 14, y: 10 });

    run_until_tick(&mut scheduler, &mut now, ms(50));
    let head = scheduler.snake_segments().last().expect("snake has a head");
    assert_eq!(head, Position { x: 13, y: 10 });
}

#[test]
fn restart_after_game_over_builds_a_fresh_session() {
    let grid = GridSize {
        width: 6,
        height: 3,
    };
    let mut scheduler = ready_scheduler(grid, Difficulty::Hard);
    let old_ticket = scheduler.start().expect("ready");
    let mut now = Duration::ZERO;

    scheduler
        .apply_input(GameInput::Direction(Direction::Up))
        .expect("accepted");
    while scheduler.status() != GameStatus::Stopped {
        run_until_tick(&mut scheduler, &mut now, ms(25));
    }
    assert_eq!(
        scheduler.summary().map(|summary| summary.reason),
        Some(EndReason::Wall)
    );

    scheduler.apply_input(GameInput::Restart).expect("ready");

    assert_eq!(scheduler.status(), GameStatus::Start);
    assert_eq!(scheduler.score(), 0);
    assert!(scheduler.summary().is_none());
    assert_eq!(
        scheduler.snake_segments().collect::<Vec<_>>(),
        vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 3, y: 1 },
        ]
    );
    let food = scheduler.food_position().expect("fresh session has food");
    assert!(!scheduler.snake_segments().any(|cell| cell == food));
    assert_eq!(scheduler.on_frame(old_ticket, now), FrameOutcome::Stale);
}

#[test]
fn snapshot_serializes_for_external_readers() {
    let grid = GridSize {
        width: 29,
        height: 19,
    };
    let mut scheduler = ready_scheduler(grid, Difficulty::Medium);
    scheduler.start().expect("ready");

    let json = serde_json::to_value(scheduler.snapshot()).expect("snapshot serializes");

    assert_eq!(json["score"], 0);
    assert_eq!(json["status"], "Start");
    assert_eq!(json["snake_segments"][0]["x"], 12);
    assert_eq!(json["grid"]["width"], 29);
}
