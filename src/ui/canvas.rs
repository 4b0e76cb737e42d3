//! Paints a [`DisplayList`] onto a ratatui braille canvas.
//!
//! The canvas is scaled so the whole logical screen fits the terminal area.
//! Canvas y grows upward, screen y grows downward, so every y is flipped.
//! Terminal cells have no line widths; widths are ignored.

use super::renderer::{DisplayList, DrawCommand, Point, ScreenRect};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    Frame,
};

/// Spacing of fill scanlines, in screen pixels.
const FILL_STEP: f64 = 1.0;

pub fn paint(frame: &mut Frame, area: Rect, list: &DisplayList, width: f64, height: f64) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for command in list.commands() {
                paint_command(ctx, command, height);
            }
        });
    frame.render_widget(canvas, area);
}

fn paint_command(ctx: &mut Context, command: &DrawCommand, height: f64) {
    match command {
        DrawCommand::Line {
            from, to, color, ..
        } => line(ctx, *from, *to, *color, height),
        DrawCommand::Polygon {
            points,
            color,
            filled,
        } => {
            if *filled {
                fill_polygon(ctx, points, *color, height);
            }
            outline(ctx, points, *color, height);
        }
        DrawCommand::Rect {
            rect,
            color,
            filled,
        } => {
            if *filled {
                fill_rect(ctx, rect, *color, height);
            } else {
                ctx.draw(&Rectangle {
                    x: rect.x,
                    y: height - rect.y - rect.height,
                    width: rect.width,
                    height: rect.height,
                    color: *color,
                });
            }
        }
        DrawCommand::Text { text, at, color } => {
            ctx.layer();
            ctx.print(
                at.x,
                height - at.y,
                Span::styled(text.clone(), Style::default().fg(*color)),
            );
        }
    }
}

fn line(ctx: &mut Context, from: Point, to: Point, color: Color, height: f64) {
    ctx.draw(&CanvasLine {
        x1: from.x,
        y1: height - from.y,
        x2: to.x,
        y2: height - to.y,
        color,
    });
}

fn outline(ctx: &mut Context, points: &[Point], color: Color, height: f64) {
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        line(ctx, from, to, color, height);
    }
}

fn fill_rect(ctx: &mut Context, rect: &ScreenRect, color: Color, height: f64) {
    let mut y = rect.y;
    while y <= rect.y + rect.height {
        line(
            ctx,
            Point::new(rect.x, y),
            Point::new(rect.x + rect.width, y),
            color,
            height,
        );
        y += FILL_STEP;
    }
}

fn fill_polygon(ctx: &mut Context, points: &[Point], color: Color, height: f64) {
    let (top, bottom) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
    let mut y = top;
    while y <= bottom {
        for (x1, x2) in scanline_spans(points, y) {
            line(ctx, Point::new(x1, y), Point::new(x2, y), color, height);
        }
        y += FILL_STEP;
    }
}

/// Interior spans of a closed polygon along the horizontal line at `y`
/// (even-odd rule).
pub fn scanline_spans(points: &[Point], y: f64) -> Vec<(f64, f64)> {
    let mut crossings = Vec::new();
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        // Half-open so a vertex shared by two edges is counted once.
        if (a.y <= y && y < b.y) || (b.y <= y && y < a.y) {
            let t = (y - a.y) / (b.y - a.y);
            crossings.push(a.x + t * (b.x - a.x));
        }
    }
    crossings.sort_by(|a, b| a.total_cmp(b));
    crossings
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}
