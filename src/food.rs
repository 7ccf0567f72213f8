use rand::Rng;

use crate::error::PlacementError;
use crate::grid::{Cell, Grid};
use crate::sim;
use crate::snake::Snake;

/// Power-up lifetime in ticks.
pub const POWER_UP_TTL_TICKS: u16 = 33;

/// Ticks between power-up spawn attempts.
pub const POWER_UP_SPAWN_PERIOD_TICKS: u64 = 53;

/// Points granted by a score power-up.
pub const SCORE_POWER_UP_POINTS: u32 = 50;

/// Tick interval reduction granted by a speed power-up.
pub const SPEED_POWER_UP_MS: u64 = 50;

/// Fastest tick interval a speed power-up can reach.
pub const SPEED_POWER_UP_FLOOR_MS: u64 = 50;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::BoardFull`] when no cell is free.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: Grid,
        snake: &Snake,
    ) -> Result<Self, PlacementError> {
        sim::place_food(rng, grid, snake).map(Self::new)
    }
}

/// Effect applied when a power-up is collected.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PowerUpKind {
    Speed,
    Score,
}

/// Temporary pickup that expires after [`POWER_UP_TTL_TICKS`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PowerUp {
    pub position: Cell,
    pub kind: PowerUpKind,
    pub ttl_ticks: u16,
}

impl PowerUp {
    #[must_use]
    pub fn new(position: Cell, kind: PowerUpKind) -> Self {
        Self {
            position,
            kind,
            ttl_ticks: POWER_UP_TTL_TICKS,
        }
    }

    /// Spawns a power-up of random kind on a cell free of snake and food.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::BoardFull`] when no cell is free.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: Grid,
        snake: &Snake,
        food: Food,
    ) -> Result<Self, PlacementError> {
        let kind = if rng.gen_bool(0.5) {
            PowerUpKind::Speed
        } else {
            PowerUpKind::Score
        };
        let position = sim::place_avoiding(rng, grid, |cell| {
            cell == food.position || snake.occupies(cell)
        })?;

        Ok(Self::new(position, kind))
    }

    /// Advances the TTL by one tick. Returns `true` once the power-up expired.
    pub fn tick_ttl(&mut self) -> bool {
        self.ttl_ticks = self.ttl_ticks.saturating_sub(1);
        self.ttl_ticks == 0
    }
}
