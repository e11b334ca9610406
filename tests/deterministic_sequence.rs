use grid_snake::config::GridSize;
use grid_snake::food::{Food, FoodPlacer};
use grid_snake::game::{EndReason, GameState, GameStatus};
use grid_snake::input::Direction;
use grid_snake::simulator::{Simulator, TickResult};
use grid_snake::snake::{Position, Snake};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GRID: GridSize = GridSize {
    width: 29,
    height: 19,
};

fn p(x: i32, y: i32) -> Position {
    Position { x, y }
}

fn segments(state: &GameState) -> Vec<Position> {
    state.snake.segments().copied().collect()
}

#[test]
fn canonical_start_moves_right_one_cell() {
    let mut simulator = Simulator::new(FoodPlacer::with_seed(1));
    let mut state = GameState::with_layout(GRID, Snake::centered(GRID), Food::new(p(0, 0)));

    assert_eq!(segments(&state), vec![p(12, 9), p(13, 9), p(14, 9)]);

    let direction = state.directions.consume_for_tick();
    let result = simulator.tick(&mut state, direction);

    assert_eq!(result, TickResult::Continue);
    assert_eq!(segments(&state), vec![p(13, 9), p(14, 9), p(15, 9)]);
}

#[test]
fn food_ahead_is_eaten_and_replaced_off_the_body() {
    let mut simulator = Simulator::new(FoodPlacer::with_seed(2));
    let mut state = GameState::with_layout(GRID, Snake::centered(GRID), Food::new(p(15, 9)));

    let direction = state.directions.consume_for_tick();
    let result = simulator.tick(&mut state, direction);

    assert_eq!(result, TickResult::FoodEaten);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), p(15, 9));
    assert!(!state.snake.occupies(state.food.position));
}

#[test]
fn stepwise_turns_and_wall_collision() {
    let bounds = GridSize {
        width: 6,
        height: 4,
    };
    let mut simulator = Simulator::new(FoodPlacer::with_seed(42));
    let mut state = GameState::with_layout(
        bounds,
        Snake::from_segments(vec![p(0, 1), p(1, 1), p(2, 1)]),
        Food::new(p(3, 1)),
    );

    let direction = state.directions.consume_for_tick();
    assert_eq!(simulator.tick(&mut state, direction), TickResult::FoodEaten);
    assert_eq!(state.snake.head(), p(3, 1));

    state.directions.enqueue(Direction::Up);
    let direction = state.directions.consume_for_tick();
    assert_ne!(simulator.tick(&mut state, direction), TickResult::Collided);
    assert_eq!(state.snake.head(), p(3, 0));

    let direction = state.directions.consume_for_tick();
    assert_eq!(simulator.tick(&mut state, direction), TickResult::Collided);
    assert_eq!(state.status, GameStatus::Stopped);
    assert_eq!(state.end_reason, Some(EndReason::Wall));
    assert_eq!(state.snake.len(), 3 + state.score as usize);
}

#[test]
fn random_play_keeps_length_and_overlap_invariants() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut placer = FoodPlacer::with_seed(seed);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let mut state = GameState::new(bounds, &mut placer).expect("grid has room");
        let mut simulator = Simulator::new(placer);

        for _ in 0..500 {
            let turn = match rng.gen_range(0..4) {
                0 => Direction::Up,
                1 => Direction::Right,
                2 => Direction::Down,
                _ => Direction::Left,
            };
            state.directions.enqueue(turn);

            let direction = state.directions.consume_for_tick();
            let result = simulator.tick(&mut state, direction);

            assert_eq!(state.snake.len(), 3 + state.score as usize);
            if result.is_terminal() {
                assert_eq!(state.status, GameStatus::Stopped);
                break;
            }

            let mut cells = segments(&state);
            cells.sort_by_key(|cell| (cell.y, cell.x));
            cells.dedup();
            assert_eq!(cells.len(), state.snake.len(), "seed {seed}");
            assert!(!state.snake.occupies(state.food.position));
        }
    }
}

#[test]
fn plain_tick_shifts_each_segment_into_its_successor() {
    let mut simulator = Simulator::new(FoodPlacer::with_seed(9));
    let body = vec![p(4, 4), p(4, 5), p(5, 5), p(6, 5)];
    let mut state = GameState::with_layout(
        GRID,
        Snake::from_segments(body.clone()),
        Food::new(p(20, 1)),
    );

    simulator.tick(&mut state, Direction::Down);

    let mut expected: Vec<Position> = body[1..].to_vec();
    expected.push(p(6, 6));
    assert_eq!(segments(&state), expected);
}
