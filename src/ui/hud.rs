use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::PALETTE;
use crate::game::GameState;

const SEPARATOR: &str = " │ ";

/// Renders the one-line HUD under `area` and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, best_score: u32) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state, best_score))
            .alignment(Alignment::Center)
            .style(Style::default().fg(PALETTE.muted)),
        hud_area,
    );

    play_area
}

fn info_line(state: &GameState, best_score: u32) -> Line<'static> {
    let value = Style::default().fg(PALETTE.hud);
    // Live score counts as the best once it passes the stored record.
    let best = best_score.max(state.score);
    let best_style = if state.score > best_score {
        value.fg(PALETTE.title).add_modifier(Modifier::BOLD)
    } else {
        value
    };

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(state.score.to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Best: "),
        Span::styled(best.to_string(), best_style),
        Span::raw(SEPARATOR),
        Span::raw("Level: "),
        Span::styled(state.level().to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Length: "),
        Span::styled(state.snake.len().to_string(), value),
    ])
}
