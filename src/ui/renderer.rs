//! Drawing surface abstraction.
//!
//! Scene code draws in logical screen pixels (y down) through [`Renderer`].
//! [`DisplayList`] records the calls so a frame can be inspected in tests and
//! painted onto the terminal afterwards.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub trait Renderer {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: u16);
    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool);
    fn draw_rect(&mut self, rect: ScreenRect, color: Color, filled: bool);
    /// Text with its top-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: Point, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: u16,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
        filled: bool,
    },
    Rect {
        rect: ScreenRect,
        color: Color,
        filled: bool,
    },
    Text {
        text: String,
        at: Point,
        color: Color,
    },
}

/// Recorded frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for DisplayList {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: u16) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            filled,
        });
    }

    fn draw_rect(&mut self, rect: ScreenRect, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            filled,
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
    }
}
