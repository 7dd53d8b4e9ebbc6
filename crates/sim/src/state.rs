use glam::Vec2;
use seesaw_config::GameConfig;

use crate::ball::{Ball, BallColor, BallId};
use crate::plank::Plank;
use crate::torque::TorqueTally;

/// Everything the frame step mutates. Owned by a single caller and passed explicitly
/// into each step function.
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    pub plank: Plank,
    /// Spawn order is preserved; drawing follows it.
    pub balls: Vec<Ball>,
    /// Recomputed every frame from resting balls.
    pub tally: TorqueTally,
    /// Canvas size in pixels.
    pub canvas: Vec2,
    pub frame: u64,
    next_id: u64,
}

impl SimState {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            plank: Plank::from_config(&cfg.plank),
            balls: Vec::new(),
            tally: TorqueTally::default(),
            canvas: Vec2::new(cfg.window.width, cfg.window.height),
            frame: 0,
            next_id: 1,
        }
    }

    pub fn alloc_id(&mut self) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a falling ball at `pos` with zero velocity.
    pub fn push_falling(&mut self, pos: Vec2, radius: f32, weight: u32, color: BallColor) -> BallId {
        let id = self.alloc_id();
        self.balls.push(Ball::falling(id, pos, radius, weight, color));
        id
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn resting_count(&self) -> usize {
        self.balls.iter().filter(|b| b.is_resting()).count()
    }

    /// Drop every ball and level the plank.
    pub fn clear(&mut self) {
        self.balls.clear();
        self.tally = TorqueTally::default();
        self.plank.reset();
    }
}
