use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    CELL_WIDTH, GLYPH_FOOD, GLYPH_POWER_UP, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, PALETTE,
};
use crate::food::PowerUpKind;
use crate::game::{GameState, GameStatus};
use crate::grid::{Cell, Grid};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, best_score: u32) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, best_score);
    let board = board_area(play_area, state.grid());

    let block = Block::bordered()
        .border_style(Style::new().fg(PALETTE.border_fg))
        .style(Style::new().bg(PALETTE.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    match state.status {
        GameStatus::NotStarted => render_start_menu(frame, board, best_score),
        GameStatus::Paused => render_pause_menu(frame, board),
        GameStatus::Ended => {
            render_game_over_menu(frame, board, state.score, best_score, state.end_reason);
        }
        GameStatus::Running => {}
    }
}

/// Centers a bordered board of the grid's size inside `area`.
fn board_area(area: Rect, grid: Grid) -> Rect {
    let width = grid.tile_count().saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.tile_count().saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let grid = state.grid();
    let buffer = frame.buffer_mut();

    if let Some((x, y)) = logical_to_terminal(inner, grid, state.food.position) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(PALETTE.food));
    }

    let Some(power_up) = state.power_up else {
        return;
    };
    if let Some((x, y)) = logical_to_terminal(inner, grid, power_up.position) {
        let color = match power_up.kind {
            PowerUpKind::Speed => PALETTE.speed_power_up,
            PowerUpKind::Score => PALETTE.score_power_up,
        };
        buffer.set_string(x, y, GLYPH_POWER_UP, Style::new().fg(color));
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let grid = state.grid();
    let buffer = frame.buffer_mut();

    // Tail first so the head stays visible after a self-collision.
    for (index, segment) in state.snake.segments().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, grid, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(PALETTE.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(PALETTE.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{logical_to_terminal, render};
    use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_HEAD, GameConfig};
    use crate::food::Food;
    use crate::game::GameState;
    use crate::grid::{Cell, Grid};
    use crate::input::GameInput;
    use crate::snake::Snake;

    #[test]
    fn cells_map_to_two_column_terminal_positions() {
        let inner = Rect::new(1, 1, 8, 4);
        let grid = Grid::new(4);

        assert_eq!(logical_to_terminal(inner, grid, Cell::new(0, 0)), Some((1, 1)));
        assert_eq!(logical_to_terminal(inner, grid, Cell::new(3, 2)), Some((7, 3)));
        assert_eq!(logical_to_terminal(inner, grid, Cell::new(4, 0)), None);
        assert_eq!(logical_to_terminal(inner, grid, Cell::new(-1, 0)), None);
    }

    #[test]
    fn running_frame_draws_snake_head_and_food() {
        let config = GameConfig {
            tile_count: 4,
            power_ups: false,
            ..GameConfig::default()
        };
        let mut state = GameState::new_with_seed(config, 5);
        state.apply_input(GameInput::Action);
        state.snake = Snake::new(Cell::new(0, 0));
        state.food = Food::new(Cell::new(3, 3));

        // Board is 10x6 centered in a 10x7 area, leaving the last row for the HUD.
        let mut terminal = Terminal::new(TestBackend::new(10, 7)).expect("test backend");
        terminal
            .draw(|frame| render(frame, &state, 0))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let head = buffer.cell((1, 1)).expect("head cell in range").symbol();
        let food = buffer.cell((7, 4)).expect("food cell in range").symbol();
        assert_eq!(head, &GLYPH_SNAKE_HEAD[..head.len()]);
        assert_eq!(food, &GLYPH_FOOD[..food.len()]);
    }
}
