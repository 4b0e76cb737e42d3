//! The simulation loop state machine: Running until a landing or a crash,
//! then frozen.

use crate::collision::{self, BoundingBox, LandingLimits, Outcome};
use crate::config::LanderConfig;
use crate::error::{SimError, TerrainError};
use crate::input::InputSnapshot;
use crate::physics::{self, LanderState, PhysicsParams};
use crate::terrain::{self, Terrain};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One run of the game.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: LanderConfig,
    physics: PhysicsParams,
    limits: LandingLimits,
    terrain: Terrain,
    lander: LanderState,
    outcome: Outcome,
    tick_count: u64,
}

impl Simulation {
    /// Start a run over an existing terrain.
    pub fn new(config: LanderConfig, terrain: Terrain) -> Self {
        let lander = LanderState::new(&config);
        Self {
            physics: config.physics(),
            limits: config.landing_limits(),
            config,
            terrain,
            lander,
            outcome: Outcome::Running,
            tick_count: 0,
        }
    }

    /// Generate terrain with `rng` and start a run on it.
    pub fn generate<R: Rng>(config: LanderConfig, rng: &mut R) -> Result<Self, TerrainError> {
        let terrain = terrain::generate(&config.terrain_params(), rng)?;
        Ok(Self::new(config, terrain))
    }

    /// Reproducible run: the same seed always builds the same terrain.
    pub fn from_seed(config: LanderConfig, seed: u64) -> Result<Self, TerrainError> {
        Self::generate(config, &mut StdRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &LanderConfig {
        &self.config
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn lander(&self) -> &LanderState {
        &self.lander
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::for_lander(
            &self.lander,
            self.config.lander_screen_x(),
            self.config.lander_size(),
        )
    }

    /// True when every column under the lander is landing surface.
    pub fn over_pad(&self) -> bool {
        self.bounding_box()
            .columns()
            .all(|n| self.terrain.on_pad(n))
    }

    /// Gap between the bottom of the lander and the highest ground under it.
    pub fn altitude(&self) -> f64 {
        let bbox = self.bounding_box();
        let bottom = (bbox.top + bbox.size) as f64;
        bbox.columns()
            .filter_map(|n| self.terrain.height_at(n))
            .fold(f64::INFINITY, f64::min)
            - bottom
    }

    /// Terrain heights for the current viewport, one more than its width.
    pub fn visible_terrain(&self) -> Result<&[f64], SimError> {
        self.terrain
            .window(self.lander.scroll_x, self.config.screen_width)
    }

    /// Largest scroll offset whose viewport still fits the terrain.
    fn max_scroll(&self) -> i64 {
        (self.terrain.len() as i64 - self.config.screen_width as i64).max(1)
    }

    /// Hold the viewport at either end of the terrain. Hitting an edge kills
    /// the horizontal speed.
    fn clamp_scroll(&self, state: &mut LanderState) {
        let max = self.max_scroll();
        if state.scroll_x < 1 || state.scroll_x > max {
            log::debug!("Scroll {} clamped to terrain edge", state.scroll_x);
            state.scroll_x = state.scroll_x.clamp(1, max);
            state.vx = 0.0;
        }
    }

    /// Advance one tick.
    ///
    /// Once the outcome is terminal this returns it without touching any
    /// state. The lander stops at either end of the terrain. A terrain
    /// narrower than the viewport is an error and leaves the previous state
    /// in place.
    pub fn tick(&mut self, input: &InputSnapshot) -> Result<Outcome, SimError> {
        if self.outcome.is_terminal() {
            return Ok(self.outcome);
        }

        let mut next = physics::step(&self.lander, input.controls(), &self.physics);
        self.clamp_scroll(&mut next);
        self.terrain.window(next.scroll_x, self.config.screen_width)?;

        if self.lander.fuel > 0.0 && next.fuel <= 0.0 {
            log::debug!("Fuel exhausted at tick {}", self.tick_count + 1);
        }
        self.lander = next;
        self.tick_count += 1;

        // A buried box has no contacts at all; it still crashes.
        let bbox = self.bounding_box();
        self.outcome = if collision::below_surface(&bbox, &self.terrain) {
            Outcome::Crashed
        } else {
            collision::judge(&bbox, &self.terrain, &self.lander, &self.limits)
        };

        if self.outcome.is_terminal() {
            log::info!(
                "{:?} after {} ticks: vx={:.2} vy={:.2} rot={} fuel={:.0}",
                self.outcome,
                self.tick_count,
                self.lander.vx,
                self.lander.vy,
                self.lander.rotation,
                self.lander.fuel
            );
        }
        Ok(self.outcome)
    }
}
