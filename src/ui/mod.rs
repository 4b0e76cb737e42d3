//! Terminal presentation: scene composition, canvas painting, status and
//! info panels.

pub mod canvas;
pub mod panels;
pub mod renderer;
pub mod scene;

use crate::error::SimError;
use crate::simulation::Simulation;
use panels::{
    outcome_color, render_result_banner, render_status, render_too_small, split_screen,
    FLIGHT_KEYS, FROZEN_KEYS,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use renderer::DisplayList;

const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 14;

/// Draw the whole game screen. `display` is reused between frames.
pub fn draw_game(
    frame: &mut Frame,
    sim: &Simulation,
    display: &mut DisplayList,
) -> Result<(), SimError> {
    let area = frame.size();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return Ok(());
    }

    let outcome = sim.outcome();
    let layout = split_screen(frame, area, outcome);

    display.clear();
    scene::draw_scene(sim, display)?;
    let config = sim.config();
    canvas::paint(
        frame,
        layout.field,
        display,
        config.screen_width as f64,
        config.screen_height as f64,
    );

    match scene::outcome_message(outcome) {
        Some(message) => {
            render_status(frame, layout.status, message, outcome_color(outcome), FROZEN_KEYS);
            render_result_banner(frame, layout.field, outcome, message);
        }
        None => {
            let (status, color) = flight_status(sim);
            render_status(frame, layout.status, status, color, FLIGHT_KEYS);
        }
    }
    render_info(frame, layout.panel, sim);
    Ok(())
}

fn flight_status(sim: &Simulation) -> (&'static str, Color) {
    if sim.lander().fuel <= 0.0 {
        ("NO FUEL", Color::Red)
    } else if sim.over_pad() {
        ("Over pad", Color::Green)
    } else {
        ("Descending", Color::LightBlue)
    }
}

fn render_info(frame: &mut Frame, area: Rect, sim: &Simulation) {
    let lander = sim.lander();
    let limits = sim.config().landing_limits();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    // Green while the current value would pass a touchdown check.
    let limit_row = |name: &'static str, current: f64, max: f64, unit: &'static str| {
        let style = if current.abs() < max {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        Line::from(vec![
            Span::styled(name, label),
            Span::styled(format!("{:6.2}", current.abs()), style),
            Span::styled(format!(" <{}{}", max, unit), label),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Alt:  ", label),
            Span::styled(format!("{:.0}", sim.altitude().max(0.0)), value),
        ]),
        Line::from(vec![
            Span::styled("Tick: ", label),
            Span::styled(sim.tick_count().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Pad:  ", label),
            if sim.over_pad() {
                Span::styled("below", Style::default().fg(Color::Green))
            } else {
                Span::styled("not below", value)
            },
        ]),
        Line::from(""),
        Line::styled(
            "Safe landing:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        limit_row("Vx ", lander.vx, limits.max_vx, ""),
        limit_row("Vy ", lander.vy, limits.max_vy, ""),
        limit_row("Rot", lander.rotation, limits.max_rotation, "d"),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
