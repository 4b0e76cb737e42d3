//! Terrain contact detection and landing judgment.
//!
//! [`judge`] alone keeps a run going whenever no surface point lies inside the
//! box, including when the whole box has sunk below the ground between two
//! ticks. [`below_surface`] covers that case; the simulation checks it first
//! and treats a buried box as a crash rather than as "no contact".

use crate::physics::LanderState;
use crate::terrain::Terrain;
use std::ops::Range;

/// Simulation outcome. `Landed` and `Crashed` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Running,
    Landed,
    Crashed,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Running)
    }
}

/// Touchdown tolerances. All comparisons are strict and on magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingLimits {
    /// Degrees.
    pub max_rotation: f64,
    pub max_vx: f64,
    pub max_vy: f64,
}

impl LandingLimits {
    /// Whether attitude and speed allow a safe touchdown.
    pub fn accepts(&self, state: &LanderState) -> bool {
        state.rotation.abs() < self.max_rotation
            && state.vx.abs() < self.max_vx
            && state.vy.abs() < self.max_vy
    }
}

/// Axis-aligned collision square in terrain coordinates. It does not rotate
/// with the lander.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Terrain index of the left edge.
    pub left: i64,
    /// Screen y of the top edge.
    pub top: i64,
    pub size: i64,
}

impl BoundingBox {
    /// Box for a lander drawn at screen column `lander_screen_x`.
    pub fn for_lander(state: &LanderState, lander_screen_x: usize, size: usize) -> Self {
        Self {
            left: state.scroll_x + lander_screen_x as i64,
            top: state.y,
            size: size as i64,
        }
    }

    /// Terrain indices under the box.
    pub fn columns(&self) -> Range<i64> {
        self.left..self.left + self.size
    }

    /// Half-open vertical span test, `top <= y < top + size`.
    pub fn spans_y(&self, y: f64) -> bool {
        y >= self.top as f64 && y < (self.top + self.size) as f64
    }
}

/// Terrain indices under the box whose surface lies inside it.
pub fn contacts(bbox: &BoundingBox, terrain: &Terrain) -> Vec<i64> {
    bbox.columns()
        .filter(|&n| terrain.height_at(n).is_some_and(|h| bbox.spans_y(h)))
        .collect()
}

/// True if the surface is above the top of the box at any column under it,
/// i.e. the lander has passed into the ground between ticks or flown into a
/// cliff face. [`contacts`] reports nothing in that position, so this is the
/// only check that catches it.
pub fn below_surface(bbox: &BoundingBox, terrain: &Terrain) -> bool {
    bbox.columns()
        .any(|n| terrain.height_at(n).is_some_and(|h| h < bbox.top as f64))
}

/// Classify this tick's terrain contact.
///
/// No contact keeps the run going. With contact the landing is safe only if
/// every touching column is strictly inside the pad and the lander is within
/// `limits`; a single off-pad column is a crash whatever order the columns
/// are scanned in.
pub fn judge(
    bbox: &BoundingBox,
    terrain: &Terrain,
    state: &LanderState,
    limits: &LandingLimits,
) -> Outcome {
    let touching = contacts(bbox, terrain);
    if touching.is_empty() {
        return Outcome::Running;
    }

    let all_on_pad = touching.iter().all(|&n| terrain.on_pad(n));
    if all_on_pad && limits.accepts(state) {
        Outcome::Landed
    } else {
        Outcome::Crashed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD_Y: f64 = 300.0;

    /// 200 points: hills at 250, pad from 100..140 at y=300.
    fn terrain() -> Terrain {
        let mut heights = vec![250.0; 200];
        for h in heights.iter_mut().take(140).skip(100) {
            *h = PAD_Y;
        }
        Terrain::from_heights(heights, 100, 40).unwrap()
    }

    fn limits() -> LandingLimits {
        LandingLimits {
            max_rotation: 5.1,
            max_vx: 2.1,
            max_vy: 2.1,
        }
    }

    fn lander(rotation: f64, vx: f64, vy: f64) -> LanderState {
        LanderState {
            scroll_x: 0,
            y: 0,
            vx,
            vy,
            rotation,
            thrusting: false,
            fuel: 100.0,
            max_fuel: 100.0,
        }
    }

    /// A 10 px box whose bottom edge reaches `bottom_y`, starting at column `left`.
    fn bbox_touching(left: i64, bottom_y: f64) -> BoundingBox {
        BoundingBox {
            left,
            top: bottom_y as i64 - 9,
            size: 10,
        }
    }

    #[test]
    fn test_no_contact_is_running() {
        let bbox = BoundingBox {
            left: 110,
            top: 100,
            size: 10,
        };
        assert!(contacts(&bbox, &terrain()).is_empty());
        assert_eq!(
            judge(&bbox, &terrain(), &lander(0.0, 0.0, 0.0), &limits()),
            Outcome::Running
        );
    }

    #[test]
    fn test_safe_landing_on_pad() {
        let bbox = bbox_touching(115, PAD_Y);
        assert_eq!(
            judge(&bbox, &terrain(), &lander(3.0, 1.5, 1.8), &limits()),
            Outcome::Landed
        );
    }

    #[test]
    fn test_tilted_landing_crashes() {
        let bbox = bbox_touching(115, PAD_Y);
        assert_eq!(
            judge(&bbox, &terrain(), &lander(10.0, 1.5, 1.8), &limits()),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_negative_velocities_use_magnitude() {
        let bbox = bbox_touching(115, PAD_Y);
        assert_eq!(
            judge(&bbox, &terrain(), &lander(-3.0, -2.5, 1.0), &limits()),
            Outcome::Crashed
        );
        assert_eq!(
            judge(&bbox, &terrain(), &lander(-3.0, -1.0, 1.0), &limits()),
            Outcome::Landed
        );
    }

    #[test]
    fn test_fast_descent_crashes() {
        let bbox = bbox_touching(115, PAD_Y);
        assert_eq!(
            judge(&bbox, &terrain(), &lander(0.0, 0.0, 2.5), &limits()),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_contact_outside_pad_crashes() {
        let bbox = bbox_touching(20, 250.0);
        assert_eq!(
            judge(&bbox, &terrain(), &lander(0.0, 0.0, 0.0), &limits()),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_straddling_pad_edge_crashes() {
        // Columns 95..155 span the whole pad plus hills on both sides, and
        // the box reaches from 245 to 304, so both heights are in contact.
        let bbox = BoundingBox {
            left: 95,
            top: 245,
            size: 60,
        };
        let touching = contacts(&bbox, &terrain());
        assert!(touching.iter().any(|&n| n < 100));
        assert!(touching.iter().any(|&n| n > 100));
        assert_eq!(
            judge(&bbox, &terrain(), &lander(0.0, 0.0, 0.0), &limits()),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_pad_edge_column_is_not_pad() {
        let bbox = bbox_touching(91, PAD_Y);
        // Columns 91..101: only 100 is on pad-height ground, but 100 is the
        // pad's edge, which does not count.
        let touching = contacts(&bbox, &terrain());
        assert_eq!(touching, vec![100]);
        assert_eq!(
            judge(&bbox, &terrain(), &lander(0.0, 0.0, 0.0), &limits()),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_below_surface() {
        let buried = BoundingBox {
            left: 115,
            top: 310,
            size: 10,
        };
        assert!(below_surface(&buried, &terrain()));
        assert!(contacts(&buried, &terrain()).is_empty());
        // Contact judging alone would let a buried lander keep flying.
        assert_eq!(
            judge(&buried, &terrain(), &lander(0.0, 0.0, 0.0), &limits()),
            Outcome::Running
        );

        let touching = bbox_touching(115, PAD_Y);
        assert!(!below_surface(&touching, &terrain()));
    }

    #[test]
    fn test_span_is_half_open() {
        let bbox = BoundingBox {
            left: 0,
            top: 290,
            size: 10,
        };
        assert!(bbox.spans_y(290.0));
        assert!(bbox.spans_y(299.9));
        assert!(!bbox.spans_y(300.0));
    }

    #[test]
    fn test_for_lander_offsets_by_scroll() {
        let state = LanderState {
            scroll_x: 50,
            y: 70,
            ..lander(0.0, 0.0, 0.0)
        };
        let bbox = BoundingBox::for_lander(&state, 400, 24);
        assert_eq!(bbox.columns(), 450..474);
        assert_eq!(bbox.top, 70);
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::Running.is_terminal());
        assert!(Outcome::Landed.is_terminal());
        assert!(Outcome::Crashed.is_terminal());
    }
}
