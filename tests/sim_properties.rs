use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_snake::grid::{Cell, Delta, Grid};
use grid_snake::sim::{has_collision, place_food, step};
use grid_snake::snake::Snake;

const DELTAS: [Delta; 5] = [Delta::UP, Delta::DOWN, Delta::LEFT, Delta::RIGHT, Delta::STILL];

/// Builds a snake from distinct random cells of `grid`.
fn random_snake(rng: &mut StdRng, grid: Grid, len: usize) -> Snake {
    let mut cells: Vec<Cell> = grid.cells().collect();
    let mut segments = Vec::with_capacity(len);

    for _ in 0..len {
        let index = rng.gen_range(0..cells.len());
        segments.push(cells.swap_remove(index));
    }

    Snake::from_segments(segments)
}

#[test]
fn head_moves_by_delta_and_length_tracks_ate() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = Grid::new(12);

    for round in 0..500 {
        let len = rng.gen_range(1..20);
        let snake = random_snake(&mut rng, grid, len);
        let delta = DELTAS[round % DELTAS.len()];
        // Put food on the next head every other round.
        let food = if round % 2 == 0 {
            snake.head() + delta
        } else {
            Cell::new(-5, -5)
        };

        let outcome = step(snake.clone(), delta, food);

        assert_eq!(outcome.snake.head(), snake.head() + delta);
        if outcome.ate {
            assert_eq!(outcome.snake.len(), snake.len() + 1);
        } else {
            assert_eq!(outcome.snake.len(), snake.len());
        }
        assert_eq!(outcome.ate, round % 2 == 0);
    }
}

#[test]
fn step_is_deterministic() {
    let snake = Snake::from_segments(vec![Cell::new(3, 3), Cell::new(3, 4), Cell::new(3, 5)]);

    let first = step(snake.clone(), Delta::LEFT, Cell::new(2, 3));
    let second = step(snake, Delta::LEFT, Cell::new(2, 3));

    assert_eq!(first, second);
}

#[test]
fn concrete_growth_and_shift_scenarios() {
    let snake = Snake::new(Cell::new(10, 10));

    let grown = step(snake.clone(), Delta::new(1, 0), Cell::new(11, 10));
    assert!(grown.ate);
    assert_eq!(
        grown.snake,
        Snake::from_segments(vec![Cell::new(11, 10), Cell::new(10, 10)])
    );

    let shifted = step(snake, Delta::new(1, 0), Cell::new(5, 5));
    assert!(!shifted.ate);
    assert_eq!(shifted.snake, Snake::new(Cell::new(11, 10)));
}

#[test]
fn straight_in_bounds_snakes_never_collide() {
    let grid = Grid::new(20);

    for y in 0..20 {
        let segments: Vec<Cell> = (0..20).map(|x| Cell::new(x, y)).collect();
        assert!(!has_collision(&Snake::from_segments(segments), grid));
    }
}

#[test]
fn food_is_never_placed_on_snake() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..300 {
        let grid = Grid::new(rng.gen_range(2..10));
        let len = rng.gen_range(1..grid.total_cells());
        let snake = random_snake(&mut rng, grid, len);

        let food = place_food(&mut rng, grid, &snake).expect("board is not full");

        assert!(grid.contains(food));
        assert!(!snake.occupies(food));
    }
}

#[test]
fn full_board_reports_board_full() {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = Grid::new(5);
    let snake = Snake::from_segments(grid.cells().collect());

    assert!(place_food(&mut rng, grid, &snake).is_err());
}
