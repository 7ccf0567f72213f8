use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::{FOODS_PER_LEVEL, GameConfig};
use crate::error::PlacementError;
use crate::food::{
    Food, POWER_UP_SPAWN_PERIOD_TICKS, PowerUp, PowerUpKind, SCORE_POWER_UP_POINTS,
    SPEED_POWER_UP_FLOOR_MS, SPEED_POWER_UP_MS,
};
use crate::grid::{Delta, Grid};
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::sim;
use crate::snake::Snake;

/// Current high-level session state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    Ended,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    BoardFilled,
}

/// Complete mutable state for one session, owned by the game loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub power_up: Option<PowerUp>,
    pub delta: Delta,
    pub score: u32,
    pub foods_eaten: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    config: GameConfig,
    tick_interval_ms: u64,
    can_change_direction: bool,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// # Panics
    ///
    /// Panics when the board has fewer than two cells, since the first food
    /// would have nowhere to go.
    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let snake = Snake::new(grid.center());
        let food = Food::spawn(&mut rng, grid, &snake)
            .unwrap_or_else(|error| panic!("initial food placement failed: {error}"));

        Self {
            snake,
            food,
            power_up: None,
            delta: Delta::STILL,
            score: 0,
            foods_eaten: 0,
            tick_count: 0,
            status: GameStatus::NotStarted,
            end_reason: None,
            config,
            tick_interval_ms: config.initial_tick_ms,
            can_change_direction: true,
            rng,
        }
    }

    /// Resets snake, food, score and speed and starts running immediately.
    pub fn restart(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(self.config, rng);
        self.status = GameStatus::Running;
        info!(tile_count = self.config.tile_count, "game restarted");
    }

    /// Advances the session by one tick.
    ///
    /// Does nothing unless running, and does not move a snake that has not
    /// been given a direction yet.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.can_change_direction = true;
        if self.delta.is_still() {
            return;
        }

        self.tick_count += 1;
        let grid = self.grid();
        let outcome = sim::step(self.snake.clone(), self.delta, self.food.position);
        self.snake = outcome.snake;

        if sim::has_collision(&self.snake, grid) {
            let reason = if grid.contains(self.snake.head()) {
                EndReason::SelfCollision
            } else {
                EndReason::WallCollision
            };
            self.end(reason);
            return;
        }

        if outcome.ate {
            self.eat_food();
            if self.status == GameStatus::Ended {
                return;
            }
        }

        self.update_power_up();
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.change_direction(direction);
            }
            GameInput::Action => match self.status {
                GameStatus::NotStarted => {
                    self.status = GameStatus::Running;
                    info!(tile_count = self.config.tile_count, "game started");
                }
                GameStatus::Running | GameStatus::Paused => self.toggle_pause(),
                GameStatus::Ended => self.restart(),
            },
            GameInput::Pause => self.toggle_pause(),
            GameInput::Quit => {}
        }
    }

    /// Requests a direction change. Returns whether it was accepted.
    ///
    /// At most one change is accepted per tick, and reversing the current
    /// direction is rejected.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running || !self.can_change_direction {
            return false;
        }

        if !direction_change_is_valid(self.delta, direction) {
            return false;
        }

        self.delta = direction.delta();
        self.can_change_direction = false;
        true
    }

    fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    fn eat_food(&mut self) {
        self.score = self.score.saturating_add(self.config.points_per_food);
        self.foods_eaten += 1;

        if self.tick_interval_ms > self.config.min_tick_ms {
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(self.config.tick_step_ms)
                .max(self.config.min_tick_ms);
        }
        debug!(score = self.score, length = self.snake.len(), "food eaten");

        let grid = self.grid();
        match Food::spawn(&mut self.rng, grid, &self.snake) {
            Ok(food) => self.food = food,
            Err(PlacementError::BoardFull { .. }) => self.end(EndReason::BoardFilled),
        }
    }

    fn update_power_up(&mut self) {
        let head = self.snake.head();

        if let Some(power_up) = self.power_up {
            if power_up.position == head {
                self.power_up = None;
                self.apply_power_up(power_up.kind);
            }
        }

        if let Some(power_up) = self.power_up.as_mut() {
            if power_up.tick_ttl() {
                debug!(kind = ?power_up.kind, "power-up expired");
                self.power_up = None;
            }
        }

        if self.config.power_ups
            && self.power_up.is_none()
            && self.tick_count % POWER_UP_SPAWN_PERIOD_TICKS == 0
        {
            let grid = self.grid();
            if let Ok(power_up) = PowerUp::spawn(&mut self.rng, grid, &self.snake, self.food) {
                debug!(
                    kind = ?power_up.kind,
                    x = power_up.position.x,
                    y = power_up.position.y,
                    "power-up spawned"
                );
                self.power_up = Some(power_up);
            }
        }
    }

    fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Speed => {
                self.tick_interval_ms = self
                    .tick_interval_ms
                    .saturating_sub(SPEED_POWER_UP_MS)
                    .max(SPEED_POWER_UP_FLOOR_MS);
            }
            PowerUpKind::Score => self.score = self.score.saturating_add(SCORE_POWER_UP_POINTS),
        }
        info!(?kind, score = self.score, "power-up collected");
    }

    fn end(&mut self, reason: EndReason) {
        self.status = GameStatus::Ended;
        self.end_reason = Some(reason);
        info!(?reason, score = self.score, length = self.snake.len(), "game over");
    }

    /// Returns the interval until the next tick.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Returns the level derived from food eaten, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        1 + self.foods_eaten / FOODS_PER_LEVEL
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.config.grid()
    }
}
