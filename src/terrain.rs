//! Procedural terrain: a height-field with one flat landing pad.
//!
//! Heights are screen y values, so a smaller number is higher up. The walk is
//! biased toward flat ground (60% of steps keep the previous height) so the
//! surface stays navigable.

use crate::config::{PAD_START_MAX_FRACTION, PAD_START_MIN_FRACTION};
use crate::error::{SimError, TerrainError};
use rand::Rng;
use std::ops::Range;

/// Inputs to [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainParams {
    pub total_points: usize,
    pub start_height: f64,
    /// Largest step between neighbouring points.
    pub y_increment: u32,
    /// Smallest allowed y (highest peak).
    pub upper_bound: f64,
    /// Largest allowed y (deepest valley).
    pub lower_bound: f64,
    pub pad_width: usize,
}

/// Generated terrain. Immutable once built, and never shorter than 2 points.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    heights: Vec<f64>,
    pad_start: usize,
    pad_width: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Terrain {
    /// Build a terrain from explicit heights. The pad must lie inside the
    /// array; its heights are taken as given.
    pub fn from_heights(
        heights: Vec<f64>,
        pad_start: usize,
        pad_width: usize,
    ) -> Result<Self, TerrainError> {
        if heights.len() < 2 {
            return Err(TerrainError::TooFewPoints(heights.len()));
        }
        if pad_start + pad_width > heights.len() {
            return Err(TerrainError::PadOutOfBounds {
                pad_start,
                pad_end: pad_start + pad_width,
                total_points: heights.len(),
            });
        }
        Ok(Self {
            heights,
            pad_start,
            pad_width,
        })
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn height_at(&self, n: i64) -> Option<f64> {
        usize::try_from(n)
            .ok()
            .and_then(|i| self.heights.get(i).copied())
    }

    pub fn pad_range(&self) -> Range<usize> {
        self.pad_start..self.pad_start + self.pad_width
    }

    pub fn pad_height(&self) -> f64 {
        self.heights[self.pad_start]
    }

    /// True strictly inside the pad. The two edge points are flat too but do
    /// not count as landing surface.
    pub fn on_pad(&self, n: i64) -> bool {
        let start = self.pad_start as i64;
        n > start && n < start + self.pad_width as i64
    }

    /// Heights needed to draw `width` segments starting at `scroll_x`, i.e.
    /// indices `scroll_x - 1 .. scroll_x + width`.
    pub fn window(&self, scroll_x: i64, width: usize) -> Result<&[f64], SimError> {
        let end = scroll_x + width as i64;
        let exhausted = |needed: i64| SimError::TerrainExhausted {
            scroll_x,
            needed,
            available: self.heights.len(),
        };
        if scroll_x < 1 {
            return Err(exhausted(scroll_x - 1));
        }
        if end > self.heights.len() as i64 {
            return Err(exhausted(end));
        }
        Ok(&self.heights[(scroll_x - 1) as usize..end as usize])
    }
}

/// Generate a terrain.
///
/// Each step draws `k` in 1..=100: below 20 the ground rises by up to
/// `y_increment`, 80 and above it falls by up to `y_increment`, otherwise it
/// stays level. The pad start is drawn first from [20%, 40%) of the length and
/// the walk holds its anchor height across the pad, so neighbouring points
/// never differ by more than `y_increment`, pad edges included.
pub fn generate<R: Rng>(params: &TerrainParams, rng: &mut R) -> Result<Terrain, TerrainError> {
    let total = params.total_points;
    if total < 2 {
        return Err(TerrainError::TooFewPoints(total));
    }

    let first = (total as f64 * PAD_START_MIN_FRACTION) as usize;
    let last = (total as f64 * PAD_START_MAX_FRACTION) as usize;
    let pad_start = if last > first {
        rng.gen_range(first..last)
    } else {
        first
    };
    let pad_end = pad_start + params.pad_width;
    if pad_end > total {
        return Err(TerrainError::PadOutOfBounds {
            pad_start,
            pad_end,
            total_points: total,
        });
    }

    let max_step = params.y_increment.max(1);
    let mut heights = Vec::with_capacity(total);
    heights.push(params.start_height);
    let mut previous = params.start_height;

    for n in 1..total {
        let next = if n > pad_start && n < pad_end {
            previous
        } else {
            let k: u32 = rng.gen_range(1..=100);
            if k < 20 {
                (previous - rng.gen_range(1..=max_step) as f64).max(params.upper_bound)
            } else if k < 80 {
                previous
            } else {
                (previous + rng.gen_range(1..=max_step) as f64).min(params.lower_bound)
            }
        };
        heights.push(next);
        previous = next;
    }

    log::debug!(
        "Generated {} terrain points, pad at {}..{} (y={:.1})",
        total,
        pad_start,
        pad_end,
        heights[pad_start]
    );

    Terrain::from_heights(heights, pad_start, params.pad_width)
}
