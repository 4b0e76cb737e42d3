//! Screen chrome around the play field: outer frame, status line, side
//! panel, result banner.

use crate::collision::Outcome;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the side panel, borders included.
pub const PANEL_WIDTH: u16 = 22;
/// Status line plus key hints.
const STATUS_HEIGHT: u16 = 2;

/// Key hints while the lander is still flying.
pub const FLIGHT_KEYS: &[(&str, &str)] = &[
    ("[L/R]", "Rotate"),
    ("[Space/Up]", "Thrust"),
    ("[Esc]", "Quit"),
];
/// Key hints once the run is over.
pub const FROZEN_KEYS: &[(&str, &str)] = &[("[Esc]", "Quit")];

/// Areas carved out by [`split_screen`].
///
/// ```text
/// ┌─ Lander ────────────────────────┬─ Info ──────┐
/// │  play field                     │  panel      │
/// │  status / key hints             │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub field: Rect,
    pub status: Rect,
    /// Inside the panel's own border.
    pub panel: Rect,
}

/// Border colour follows the outcome.
pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Running => Color::LightBlue,
        Outcome::Landed => Color::Green,
        Outcome::Crashed => Color::Red,
    }
}

/// Draw the outer and side-panel frames and return the areas inside them.
pub fn split_screen(frame: &mut Frame, area: Rect, outcome: Outcome) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(" Lander ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(outcome_color(outcome)));
    let body = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, side] = split2(body, Direction::Horizontal, Constraint::Length(PANEL_WIDTH));
    let [field, status] = split2(left, Direction::Vertical, Constraint::Length(STATUS_HEIGHT));

    let panel_block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let panel = panel_block.inner(side);
    frame.render_widget(panel_block, side);

    ScreenLayout {
        field,
        status,
        panel,
    }
}

/// Split `area` into a flexible first part and a fixed second part.
fn split2(area: Rect, direction: Direction, fixed: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Min(1), fixed])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Status message on the first row, key hints on the second.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    keys: &[(&str, &str)],
) {
    let hints: Vec<Span> = keys
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let lines = vec![
        Line::styled(message, Style::default().fg(color)),
        Line::from(hints),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Compact box centred over the frozen play field. Only the box itself is
/// cleared so the final frame stays visible behind it.
pub fn render_result_banner(frame: &mut Frame, field: Rect, outcome: Outcome, message: &str) {
    let width = (message.len() as u16 + 8).max(24).min(field.width);
    let height = 4.min(field.height);
    let banner = Rect {
        x: field.x + field.width.saturating_sub(width) / 2,
        y: field.y + field.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let color = outcome_color(outcome);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let text = Paragraph::new(vec![
        Line::styled(message, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::styled("[Esc] Quit", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(Clear, banner);
    frame.render_widget(text, banner);
}

/// Shown instead of the game when the terminal cannot fit it.
pub fn render_too_small(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    frame.render_widget(Clear, area);
    let text = format!(
        "Terminal too small ({}x{}), need {}x{}",
        area.width, area.height, min_width, min_height
    );
    let row = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        row,
    );
}
