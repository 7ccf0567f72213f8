use std::io;

use crate::game::GameState;

/// Presentation layer driven by the game loop.
///
/// Implementations only read the state; the simulation never calls back into
/// a view.
pub trait View {
    /// Draws one frame. `best_score` is the persisted record to display.
    fn render(&mut self, state: &GameState, best_score: u32) -> io::Result<()>;
}
