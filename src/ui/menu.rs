use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::PALETTE;
use crate::game::EndReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, best_score: u32) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let title_style = Style::default()
        .fg(PALETTE.title)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from("SNAKE").style(title_style),
        Line::from(""),
        Line::from(format!("Best: {best_score}")),
        Line::from(""),
        Line::from("[Space] Start"),
        Line::from("Arrows/WASD to steer"),
        Line::from("[Q] Quit").style(Style::default().fg(PALETTE.muted)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        popup,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[Space]/[P] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    best_score: u32,
    end_reason: Option<EndReason>,
) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let is_new_best = score > best_score;
    let title_style = Style::default()
        .fg(PALETTE.food)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from("GAME OVER").style(title_style),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("Best: {}", best_score.max(score))),
        Line::from(end_reason.map_or("", end_reason_text)),
        Line::from(if is_new_best { "New best score!" } else { "" }),
        Line::from("[Space] Play again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn end_reason_text(reason: EndReason) -> &'static str {
    match reason {
        EndReason::WallCollision => "Hit the wall",
        EndReason::SelfCollision => "Bit yourself",
        EndReason::BoardFilled => "Board filled!",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
