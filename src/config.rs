//! Game configuration.
//!
//! Everything is fixed for the lifetime of a run: the config is built once at
//! startup (defaults, optionally overridden by a JSON file), validated, and
//! then handed out by reference.

use crate::collision::LandingLimits;
use crate::error::ConfigError;
use crate::physics::PhysicsParams;
use crate::terrain::TerrainParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Fraction of the terrain where the landing pad may start.
pub const PAD_START_MIN_FRACTION: f64 = 0.20;
pub const PAD_START_MAX_FRACTION: f64 = 0.40;

/// Immutable run configuration. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanderConfig {
    /// Logical screen size in pixels.
    pub screen_width: usize,
    pub screen_height: usize,
    pub ticks_per_second: u32,

    /// Pixels per tick squared.
    pub gravity: f64,
    pub thrust: f64,
    pub drag: f64,

    /// Largest height step between neighbouring terrain points.
    pub y_increment: u32,
    /// Terrain length as a multiple of the screen width.
    pub terrain_screens: usize,
    /// Landing pad width as a fraction of the screen width.
    pub pad_fraction: f64,
    /// Lander bounding box side as a fraction of the pad width.
    pub lander_fraction: f64,

    pub max_fuel: f64,
    pub initial_vx: f64,
    pub initial_vy: f64,

    pub max_landing_rotation: f64,
    pub max_landing_vx: f64,
    pub max_landing_vy: f64,

    /// Horizontal travel the terrain must accommodate beyond one viewport.
    pub max_travel: usize,
    /// Ticks a key counts as held after its last press event.
    pub key_hold_ticks: u32,
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 650,
            ticks_per_second: 30,
            gravity: 0.1,
            thrust: 0.3,
            drag: 0.01,
            y_increment: 20,
            terrain_screens: 10,
            pad_fraction: 0.10,
            lander_fraction: 0.20,
            max_fuel: 500.0,
            initial_vx: 5.0,
            initial_vy: -1.0,
            max_landing_rotation: 5.1,
            max_landing_vx: 2.1,
            max_landing_vy: 2.1,
            max_travel: 9600,
            key_hold_ticks: 6,
        }
    }
}

impl LanderConfig {
    /// Load a config from a JSON file. Fields absent from the file keep their
    /// defaults. The result is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let unreadable = |reason: String| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason,
        };
        let data = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        let config: Self = serde_json::from_str(&data).map_err(|e| unreadable(e.to_string()))?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Total number of terrain points.
    pub fn land_points(&self) -> usize {
        self.screen_width * self.terrain_screens
    }

    pub fn pad_width(&self) -> usize {
        (self.pad_fraction * self.screen_width as f64) as usize
    }

    pub fn lander_size(&self) -> usize {
        (self.pad_width() as f64 * self.lander_fraction) as usize
    }

    /// Highest point the terrain may reach (smallest y).
    pub fn upper_bound(&self) -> f64 {
        self.screen_height as f64 / 3.0
    }

    /// Lowest point the terrain may reach (largest y).
    pub fn lower_bound(&self) -> f64 {
        5.0 * self.screen_height as f64 / 6.0
    }

    pub fn start_height(&self) -> f64 {
        2.0 * self.screen_height as f64 / 3.0
    }

    /// Fixed screen column the lander is drawn at.
    pub fn lander_screen_x(&self) -> usize {
        self.screen_width / 3
    }

    pub fn initial_y(&self) -> i64 {
        (self.screen_height as f64 * 0.1) as i64
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }

    pub fn physics(&self) -> PhysicsParams {
        PhysicsParams {
            gravity: self.gravity,
            thrust: self.thrust,
            drag: self.drag,
        }
    }

    pub fn landing_limits(&self) -> LandingLimits {
        LandingLimits {
            max_rotation: self.max_landing_rotation,
            max_vx: self.max_landing_vx,
            max_vy: self.max_landing_vy,
        }
    }

    pub fn terrain_params(&self) -> TerrainParams {
        TerrainParams {
            total_points: self.land_points(),
            start_height: self.start_height(),
            y_increment: self.y_increment,
            upper_bound: self.upper_bound(),
            lower_bound: self.lower_bound(),
            pad_width: self.pad_width(),
        }
    }

    /// Reject configurations the simulation cannot run with. Terrain length is
    /// checked here so exhaustion is caught at startup, not mid-flight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("screen_width", self.screen_width as f64),
            ("screen_height", self.screen_height as f64),
            ("ticks_per_second", self.ticks_per_second as f64),
            ("gravity", self.gravity),
            ("thrust", self.thrust),
            ("y_increment", self.y_increment as f64),
            ("terrain_screens", self.terrain_screens as f64),
            ("max_fuel", self.max_fuel),
        ];
        for (field, value) in positives {
            if value <= 0.0 || value.is_nan() {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.drag < 0.0 || self.drag.is_nan() {
            return Err(ConfigError::Negative {
                field: "drag",
                value: self.drag,
            });
        }

        if self.upper_bound() >= self.lower_bound() {
            return Err(ConfigError::InvertedBounds {
                upper: self.upper_bound(),
                lower: self.lower_bound(),
            });
        }

        if self.pad_width() == 0 {
            return Err(ConfigError::ZeroSize { field: "pad_fraction" });
        }
        if self.lander_size() == 0 {
            return Err(ConfigError::ZeroSize {
                field: "lander_fraction",
            });
        }
        if self.lander_screen_x() + self.lander_size() > self.screen_width {
            return Err(ConfigError::LanderOffscreen {
                lander_x: self.lander_screen_x(),
                lander_size: self.lander_size(),
                screen_width: self.screen_width,
            });
        }

        let land_points = self.land_points();
        let needed = self.screen_width + self.max_travel;
        if land_points < needed {
            return Err(ConfigError::TerrainTooShort {
                land_points,
                needed,
                screen_width: self.screen_width,
                max_travel: self.max_travel,
            });
        }

        let last_pad_start = (land_points as f64 * PAD_START_MAX_FRACTION) as usize;
        if last_pad_start + self.pad_width() > land_points {
            return Err(ConfigError::PadDoesNotFit {
                pad_width: self.pad_width(),
                land_points,
            });
        }

        Ok(())
    }
}
