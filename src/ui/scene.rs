//! Frame composition: terrain, lander, HUD and fuel gauge in screen pixels.

use super::renderer::{Point, Renderer, ScreenRect};
use crate::collision::Outcome;
use crate::error::SimError;
use crate::simulation::Simulation;
use ratatui::style::Color;

const TERRAIN_LINE_WIDTH: u16 = 2;
const HUD_X: f64 = 5.0;

/// Draw one frame of `sim` into `out`.
pub fn draw_scene<R: Renderer>(sim: &Simulation, out: &mut R) -> Result<(), SimError> {
    draw_terrain(sim, out)?;
    draw_lander(sim, out);
    draw_hud(sim, out);
    draw_fuel_gauge(sim, out);
    Ok(())
}

/// Terrain segments for the viewport, green over the pad and white elsewhere.
fn draw_terrain<R: Renderer>(sim: &Simulation, out: &mut R) -> Result<(), SimError> {
    let heights = sim.visible_terrain()?;
    let scroll_x = sim.lander().scroll_x;

    for (col, pair) in heights.windows(2).enumerate() {
        let n = scroll_x + col as i64;
        let color = if sim.terrain().on_pad(n) {
            Color::Green
        } else {
            Color::White
        };
        out.draw_line(
            Point::new(col as f64 - 1.0, pair[0]),
            Point::new(col as f64, pair[1]),
            color,
            TERRAIN_LINE_WIDTH,
        );
    }
    Ok(())
}

/// Lander outline in box-local coordinates for a box of side `size`: a
/// pointed cabin over two legs.
pub fn lander_outline(size: f64) -> Vec<Point> {
    let third = (size / 3.0).trunc();
    let half = (size / 2.0).trunc();
    vec![
        Point::new(0.0, half),
        Point::new(third, third),
        Point::new(half, 0.0),
        Point::new(size - third, third),
        Point::new(size, half),
        Point::new(size, size),
        Point::new(half, half),
        Point::new(0.0, size),
    ]
}

/// Exhaust plume between the legs, pointing down from the cabin's base.
pub fn flame_outline(size: f64) -> Vec<Point> {
    let half = (size / 2.0).trunc();
    vec![
        Point::new(0.0, half),
        Point::new(size, half),
        Point::new(half, size),
    ]
}

/// Rotate box-local points about the box centre by `degrees`
/// (counter-clockwise on screen) and move them to (`x`, `y`).
pub fn place(points: &[Point], size: f64, degrees: f64, x: f64, y: f64) -> Vec<Point> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let c = size / 2.0;
    points
        .iter()
        .map(|p| {
            let dx = p.x - c;
            let dy = p.y - c;
            Point::new(x + c + dx * cos + dy * sin, y + c - dx * sin + dy * cos)
        })
        .collect()
}

fn draw_lander<R: Renderer>(sim: &Simulation, out: &mut R) {
    let lander = sim.lander();
    let size = sim.config().lander_size() as f64;
    let x = sim.config().lander_screen_x() as f64;
    let y = lander.y as f64;

    let body = place(&lander_outline(size), size, lander.rotation, x, y);
    out.draw_polygon(&body, Color::Blue, true);
    // Drawn over the body, which covers the same box.
    if lander.thrusting {
        let flame = place(&flame_outline(size), size, lander.rotation, x, y);
        out.draw_polygon(&flame, Color::Yellow, true);
    }
}

fn draw_hud<R: Renderer>(sim: &Simulation, out: &mut R) {
    let lander = sim.lander();
    let h = sim.config().screen_height as f64;
    let rows = [
        (0.01, format!("Vx: {:5.2}", lander.vx)),
        // Shown with up as positive.
        (0.05, format!("Vy: {:5.2}", -lander.vy)),
        (0.10, format!("Rot: {:2} deg", lander.rotation as i64)),
        (0.15, format!("Fuel: {:5.2}%", lander.fuel_percent())),
    ];
    for (row, text) in rows {
        out.draw_text(&text, Point::new(HUD_X, h * row), Color::White);
    }
}

/// Gauge colour: green above 60%, yellow above 40%, red below.
pub fn fuel_color(percent: f64) -> Color {
    if percent > 60.0 {
        Color::Green
    } else if percent > 40.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_fuel_gauge<R: Renderer>(sim: &Simulation, out: &mut R) {
    let lander = sim.lander();
    let size = sim.config().lander_size() as f64;
    let top = sim.config().screen_height as f64 * 0.20;
    let full_width = size * 5.0;

    out.draw_rect(
        ScreenRect {
            x: HUD_X,
            y: top,
            width: full_width,
            height: size,
        },
        Color::White,
        false,
    );

    let fraction = if lander.max_fuel > 0.0 {
        lander.fuel / lander.max_fuel
    } else {
        0.0
    };
    out.draw_rect(
        ScreenRect {
            x: HUD_X,
            y: top + 2.0,
            width: full_width * fraction + 2.0,
            height: size - 2.0,
        },
        fuel_color(lander.fuel_percent()),
        true,
    );
}

/// Message shown once the run is over.
pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Running => None,
        Outcome::Landed => Some("Landed Safely!"),
        Outcome::Crashed => Some("Crashed! :-("),
    }
}
