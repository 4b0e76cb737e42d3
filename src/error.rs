//! Error types for configuration, terrain generation and the simulation.
//!
//! Landing, crashing and running dry are outcomes, not errors. The only
//! runtime failure is walking off the end of the generated terrain.

use thiserror::Error;

/// Invalid startup configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("terrain bounds are inverted: upper {upper} must be above lower {lower}")]
    InvertedBounds { upper: f64, lower: f64 },

    #[error("{field} rounds down to zero pixels")]
    ZeroSize { field: &'static str },

    #[error(
        "terrain too short: {land_points} points, need {needed} \
         (viewport {screen_width} + max travel {max_travel})"
    )]
    TerrainTooShort {
        land_points: usize,
        needed: usize,
        screen_width: usize,
        max_travel: usize,
    },

    #[error("landing pad ({pad_width} px) does not fit in {land_points} terrain points")]
    PadDoesNotFit { pad_width: usize, land_points: usize },

    #[error("lander at x={lander_x} with size {lander_size} does not fit a {screen_width} px viewport")]
    LanderOffscreen {
        lander_x: usize,
        lander_size: usize,
        screen_width: usize,
    },

    #[error("could not read config {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Terrain generator called with parameters that cannot produce a terrain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("landing pad [{pad_start}, {pad_end}) extends past {total_points} points")]
    PadOutOfBounds {
        pad_start: usize,
        pad_end: usize,
        total_points: usize,
    },

    #[error("terrain needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// Fatal simulation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("terrain exhausted: scroll offset {scroll_x} needs index {needed}, terrain has {available}")]
    TerrainExhausted {
        scroll_x: i64,
        needed: i64,
        available: usize,
    },
}
