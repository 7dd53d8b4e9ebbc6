use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seesaw_config::SpawnConfig;

use crate::ball::{max_spawn_radius, radius_for_weight, BallColor, BallId};
use crate::state::SimState;

/// Rolls weight and colour for new balls. Seeded so a session can be replayed.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Inclusive weight draw; a reversed range is read low-to-high.
    pub fn roll_weight(&mut self, spawn: &SpawnConfig) -> u32 {
        let lo = spawn.weight_range.min.min(spawn.weight_range.max).max(1);
        let hi = spawn.weight_range.max.max(spawn.weight_range.min).max(lo);
        self.rng.gen_range(lo..=hi)
    }

    pub fn roll_color(&mut self) -> BallColor {
        BallColor::ALL[self.rng.gen_range(0..BallColor::ALL.len())]
    }

    /// Append a falling ball at `pos` if it lies inside the drop zone.
    pub fn try_spawn(&mut self, state: &mut SimState, pos: Vec2, spawn: &SpawnConfig) -> Option<BallId> {
        if !state.plank.drop_zone(max_spawn_radius(spawn)).contains(pos) {
            return None;
        }
        let weight = self.roll_weight(spawn);
        let color = self.roll_color();
        let radius = radius_for_weight(weight, spawn);
        Some(state.push_falling(pos, radius, weight, color))
    }
}
