use std::ops::Add;

/// One square of the board in logical cell coordinates.
///
/// Coordinates are signed so a head that has just left the board is still
/// representable and can be reported by collision detection.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Per-tick movement vector.
///
/// Legal values are the four unit vectors and [`Delta::STILL`]. The core does
/// not enforce this; input handling does.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const STILL: Self = Self { dx: 0, dy: 0 };
    pub const UP: Self = Self { dx: 0, dy: -1 };
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };

    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Returns true for the zero vector (snake not yet moving).
    #[must_use]
    pub fn is_still(self) -> bool {
        self == Self::STILL
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl Add<Delta> for Cell {
    type Output = Cell;

    fn add(self, delta: Delta) -> Cell {
        Cell {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

/// Square board described by its number of cells per side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    tile_count: u16,
}

impl Grid {
    /// Creates a board with `tile_count` cells per side.
    ///
    /// # Panics
    ///
    /// Panics when `tile_count` is zero. User-supplied sizes are validated by
    /// [`crate::config::GameConfig::validate`] before they reach this point.
    #[must_use]
    pub fn new(tile_count: u16) -> Self {
        assert!(tile_count >= 1, "grid tile count must be at least 1");
        Self { tile_count }
    }

    #[must_use]
    pub fn tile_count(self) -> u16 {
        self.tile_count
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.tile_count) * usize::from(self.tile_count)
    }

    /// Returns true when both coordinates lie in `[0, tile_count)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        let upper = i32::from(self.tile_count);
        (0..upper).contains(&cell.x) && (0..upper).contains(&cell.y)
    }

    /// Returns the center cell, used as the spawn point.
    #[must_use]
    pub fn center(self) -> Cell {
        let mid = i32::from(self.tile_count / 2);
        Cell::new(mid, mid)
    }

    /// Iterates over every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let upper = i32::from(self.tile_count);
        (0..upper).flat_map(move |y| (0..upper).map(move |x| Cell::new(x, y)))
    }
}
