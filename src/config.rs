use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;

/// Default board side length.
pub const DEFAULT_TILE_COUNT: u16 = 20;

/// Smallest board accepted from configuration.
pub const MIN_TILE_COUNT: u16 = 4;

/// Largest board accepted from configuration.
pub const MAX_TILE_COUNT: u16 = 64;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Minimum tick interval reachable by eating food.
pub const MIN_TICK_INTERVAL_MS: u64 = 80;

/// Tick interval reduction per food eaten.
pub const TICK_STEP_MS: u64 = 2;

/// Points awarded per food.
pub const POINTS_PER_FOOD: u32 = 10;

/// Largest per-food award accepted from configuration.
pub const MAX_POINTS_PER_FOOD: u32 = 1_000;

/// Food eaten per level shown in the HUD.
pub const FOODS_PER_LEVEL: u32 = 5;

/// Session settings, loaded from defaults, an optional JSON file and CLI flags.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tile_count: u16,
    pub initial_tick_ms: u64,
    pub min_tick_ms: u64,
    pub tick_step_ms: u64,
    pub points_per_food: u32,
    pub power_ups: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            initial_tick_ms: DEFAULT_TICK_INTERVAL_MS,
            min_tick_ms: MIN_TICK_INTERVAL_MS,
            tick_step_ms: TICK_STEP_MS,
            points_per_food: POINTS_PER_FOOD,
            power_ups: true,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not a valid config document.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks ranges that the game loop relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: tile count, points per food,
    /// or tick interval out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TILE_COUNT..=MAX_TILE_COUNT).contains(&self.tile_count) {
            return Err(ConfigError::TileCountOutOfRange {
                value: self.tile_count,
                min: MIN_TILE_COUNT,
                max: MAX_TILE_COUNT,
            });
        }

        if self.points_per_food > MAX_POINTS_PER_FOOD {
            return Err(ConfigError::PointsOutOfRange {
                value: self.points_per_food,
                max: MAX_POINTS_PER_FOOD,
            });
        }

        if self.min_tick_ms == 0 {
            return Err(ConfigError::InvalidTickInterval(
                "minimum tick interval must be positive".to_owned(),
            ));
        }

        if self.initial_tick_ms < self.min_tick_ms {
            return Err(ConfigError::InvalidTickInterval(format!(
                "initial interval {}ms is below the minimum {}ms",
                self.initial_tick_ms, self.min_tick_ms
            )));
        }

        Ok(())
    }

    /// Returns the board described by this config.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.tile_count)
    }
}

/// Colors applied to the play field and overlays.
#[derive(Debug)]
pub struct Palette {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub speed_power_up: Color,
    pub score_power_up: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud: Color,
    pub title: Color,
    pub muted: Color,
}

pub const PALETTE: Palette = Palette {
    snake_head: Color::Rgb(0x45, 0xb7, 0xb8),
    snake_body: Color::Rgb(0x4e, 0xcd, 0xc4),
    food: Color::Rgb(0xff, 0x6b, 0x6b),
    speed_power_up: Color::Rgb(0xff, 0xd7, 0x00),
    score_power_up: Color::Rgb(0x7c, 0xfc, 0x00),
    play_bg: Color::Rgb(0x0a, 0x0a, 0x0a),
    border_fg: Color::DarkGray,
    hud: Color::White,
    title: Color::Green,
    muted: Color::DarkGray,
};

/// Each grid cell is drawn two terminal columns wide to look square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "()";
pub const GLYPH_POWER_UP: &str = "<>";
