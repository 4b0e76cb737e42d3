//! Per-tick lander physics.
//!
//! Screen coordinates: y grows downward, so gravity is positive and thrust
//! pointing "up" subtracts from vy. Horizontal motion scrolls the terrain
//! under a lander that stays at a fixed screen column.

use crate::config::LanderConfig;

/// Physical constants, per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub gravity: f64,
    pub thrust: f64,
    pub drag: f64,
}

/// Requested rotation for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotate {
    #[default]
    None,
    /// Counter-clockwise, +1 degree.
    Left,
    /// Clockwise, -1 degree.
    Right,
}

/// Player controls for one tick, already sampled from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub rotate: Rotate,
    pub thrust: bool,
}

/// Lander kinematics and fuel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanderState {
    /// Terrain index at the left edge of the viewport.
    pub scroll_x: i64,
    /// Screen y of the top of the lander.
    pub y: i64,
    pub vx: f64,
    pub vy: f64,
    /// Degrees, positive = counter-clockwise.
    pub rotation: f64,
    /// Whether thrust fired on the last tick.
    pub thrusting: bool,
    pub fuel: f64,
    pub max_fuel: f64,
}

impl LanderState {
    pub fn new(config: &LanderConfig) -> Self {
        Self {
            scroll_x: 1,
            y: config.initial_y(),
            vx: config.initial_vx,
            vy: config.initial_vy,
            rotation: 0.0,
            thrusting: false,
            fuel: config.max_fuel,
            max_fuel: config.max_fuel,
        }
    }

    /// Remaining fuel as a percentage of a full tank.
    pub fn fuel_percent(&self) -> f64 {
        if self.max_fuel > 0.0 {
            100.0 * self.fuel / self.max_fuel
        } else {
            0.0
        }
    }

    pub fn angle_radians(&self) -> f64 {
        self.rotation * std::f64::consts::PI / 180.0
    }
}

/// Advance one tick. Pure: the same inputs always produce the same state.
///
/// Velocities stay fractional but positions move by the truncated velocity,
/// so anything under 1.0 in magnitude does not move the lander at all.
pub fn step(state: &LanderState, controls: Controls, params: &PhysicsParams) -> LanderState {
    let mut next = *state;

    match controls.rotate {
        Rotate::Left => next.rotation += 1.0,
        Rotate::Right => next.rotation -= 1.0,
        Rotate::None => {}
    }

    next.thrusting = controls.thrust && state.fuel > 0.0;
    if next.thrusting {
        next.fuel = (state.fuel - 1.0).max(0.0);
    }

    let angle = next.angle_radians();
    let drag = if state.vx < 0.0 {
        params.drag
    } else {
        -params.drag
    };

    if next.thrusting {
        next.vx = state.vx + params.thrust * (-angle).sin() + drag;
        next.vy = state.vy + params.gravity - params.thrust * angle.cos();
    } else {
        next.vx = state.vx + drag;
        next.vy = state.vy + params.gravity;
    }

    next.scroll_x += next.vx.trunc() as i64;
    next.y += next.vy.trunc() as i64;

    next
}
