//! Pure grid simulation core.
//!
//! Three stateless operations make up one game tick: [`step`] moves the snake,
//! [`has_collision`] decides whether the new position ends the game, and
//! [`place_food`] picks a free cell for the next food. None of them hold state
//! between calls; the caller owns the snake and food and threads them through.

use rand::Rng;

use crate::error::PlacementError;
use crate::grid::{Cell, Delta, Grid};
use crate::snake::Snake;

/// Rejection-sampling draws before falling back to sampling the free cells.
pub const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Result of one [`step`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StepOutcome {
    pub snake: Snake,
    pub ate: bool,
}

/// Advances the snake by `delta`.
///
/// The new head is `snake.head() + delta`. When it lands on `food` the tail is
/// kept and `ate` is set; otherwise the tail is dropped so the length stays
/// the same. No bounds or self-collision checking happens here, so the caller
/// can show the attempted position before acting on [`has_collision`].
#[must_use]
pub fn step(mut snake: Snake, delta: Delta, food: Cell) -> StepOutcome {
    let head = snake.head() + delta;
    snake.push_head(head);

    let ate = head == food;
    if !ate {
        snake.drop_tail();
    }

    StepOutcome { snake, ate }
}

/// Returns true when the head is off the board or on another segment.
///
/// The head is compared against the whole rest of the body, including the
/// segment directly behind it.
#[must_use]
pub fn has_collision(snake: &Snake, grid: Grid) -> bool {
    !grid.contains(snake.head()) || snake.head_overlaps_body()
}

/// Picks a uniformly random cell that the snake does not occupy.
///
/// Draws up to [`MAX_REJECTION_ATTEMPTS`] candidates from the whole board and
/// then samples the free cells directly, so a crowded board never spins.
///
/// # Errors
///
/// Returns [`PlacementError::BoardFull`] when the snake covers every cell.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    snake: &Snake,
) -> Result<Cell, PlacementError> {
    place_avoiding(rng, grid, |cell| snake.occupies(cell))
}

/// Picks a uniformly random cell for which `occupied` returns false.
///
/// # Errors
///
/// Returns [`PlacementError::BoardFull`] when every cell is occupied.
pub fn place_avoiding<R, F>(rng: &mut R, grid: Grid, occupied: F) -> Result<Cell, PlacementError>
where
    R: Rng + ?Sized,
    F: Fn(Cell) -> bool,
{
    let upper = i32::from(grid.tile_count());

    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = Cell::new(rng.gen_range(0..upper), rng.gen_range(0..upper));
        if !occupied(candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|cell| !occupied(*cell)).collect();
    if free.is_empty() {
        return Err(PlacementError::BoardFull {
            cells: grid.total_cells(),
        });
    }

    Ok(free[rng.gen_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{has_collision, place_avoiding, place_food, step};
    use crate::error::PlacementError;
    use crate::grid::{Cell, Delta, Grid};
    use crate::snake::Snake;

    #[test]
    fn eating_food_keeps_tail() {
        let outcome = step(Snake::new(Cell::new(10, 10)), Delta::RIGHT, Cell::new(11, 10));

        assert!(outcome.ate);
        assert_eq!(
            outcome.snake,
            Snake::from_segments(vec![Cell::new(11, 10), Cell::new(10, 10)])
        );
    }

    #[test]
    fn moving_without_food_shifts_body() {
        let outcome = step(Snake::new(Cell::new(10, 10)), Delta::RIGHT, Cell::new(5, 5));

        assert!(!outcome.ate);
        assert_eq!(outcome.snake, Snake::new(Cell::new(11, 10)));
    }

    #[test]
    fn step_does_not_check_bounds() {
        let outcome = step(Snake::new(Cell::new(0, 0)), Delta::LEFT, Cell::new(5, 5));

        assert_eq!(outcome.snake.head(), Cell::new(-1, 0));
    }

    #[test]
    fn head_leaving_right_edge_collides() {
        let grid = Grid::new(20);
        let snake = Snake::from_segments(vec![Cell::new(19, 10), Cell::new(18, 10)]);

        let outcome = step(snake, Delta::RIGHT, Cell::new(0, 0));

        assert_eq!(outcome.snake.head(), Cell::new(20, 10));
        assert!(has_collision(&outcome.snake, grid));
    }

    #[test]
    fn each_board_edge_collides() {
        let grid = Grid::new(20);
        let heads = [
            Cell::new(-1, 5),
            Cell::new(20, 5),
            Cell::new(5, -1),
            Cell::new(5, 20),
        ];

        for head in heads {
            assert!(has_collision(&Snake::new(head), grid), "{head:?}");
        }
    }

    #[test]
    fn reversal_into_body_collides() {
        let grid = Grid::new(20);
        let snake = Snake::from_segments(vec![
            Cell::new(5, 6),
            Cell::new(5, 5),
            Cell::new(5, 6),
        ]);

        assert!(has_collision(&snake, grid));
    }

    #[test]
    fn reversal_step_ends_on_second_segment() {
        let grid = Grid::new(20);
        let snake = Snake::from_segments(vec![Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)]);

        let outcome = step(snake, Delta::DOWN, Cell::new(0, 0));

        assert_eq!(outcome.snake.head(), Cell::new(5, 6));
        assert!(has_collision(&outcome.snake, grid));
    }

    #[test]
    fn in_bounds_straight_snake_does_not_collide() {
        let grid = Grid::new(20);
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(19, 19),
        ]);

        assert!(!has_collision(&snake, grid));
    }

    #[test]
    fn one_by_one_board_is_full_with_one_segment() {
        let grid = Grid::new(1);
        let snake = Snake::new(Cell::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(!has_collision(&snake, grid));
        assert_eq!(
            place_food(&mut rng, grid, &snake),
            Err(PlacementError::BoardFull { cells: 1 })
        );
    }

    #[test]
    fn crowded_board_falls_back_to_last_free_cell() {
        let grid = Grid::new(4);
        let free = Cell::new(2, 3);
        let segments: Vec<Cell> = grid.cells().filter(|cell| *cell != free).collect();
        let snake = Snake::from_segments(segments);
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..20 {
            assert_eq!(place_food(&mut rng, grid, &snake), Ok(free));
        }
    }

    #[test]
    fn place_avoiding_honours_extra_occupancy() {
        let grid = Grid::new(2);
        let snake = Snake::new(Cell::new(0, 0));
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let cell = place_avoiding(&mut rng, grid, |cell| {
                snake.occupies(cell) || cell == Cell::new(1, 0) || cell == Cell::new(0, 1)
            })
            .expect("one cell should remain free");
            assert_eq!(cell, Cell::new(1, 1));
        }
    }
}
