//! Persisted session shape.
//!
//! `{ "balls": [ {x, y, radius, weight, color, resting, offset} ], "seesaw": { "rotation", "targetRotation" } }`
//! There is no version field; unknown keys are ignored and missing ones default.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ball::{Ball, BallColor, BallPhase};
use crate::state::SimState;
use crate::storage::StorageError;
use crate::torque::TorqueTally;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallRecord {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub weight: u32,
    #[serde(default)]
    pub color: BallColor,
    #[serde(default)]
    pub resting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlankRecord {
    pub rotation: f32,
    pub target_rotation: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub balls: Vec<BallRecord>,
    pub seesaw: PlankRecord,
}

impl Snapshot {
    pub fn capture(state: &SimState) -> Self {
        let balls = state
            .balls
            .iter()
            .map(|b| BallRecord {
                x: b.pos.x,
                y: b.pos.y,
                radius: b.radius,
                weight: b.weight,
                color: b.color,
                resting: b.is_resting(),
                offset: b.offset(),
            })
            .collect();
        Self {
            balls,
            seesaw: PlankRecord {
                rotation: state.plank.rotation,
                target_rotation: state.plank.target_rotation,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Replace the balls and plank pose of `state` with this snapshot.
    ///
    /// Velocities restart at zero, ids are reassigned in saved order and rotation is
    /// clamped to the plank's limit. A resting record saved without an offset gets one
    /// from its position.
    pub fn restore_into(&self, state: &mut SimState) {
        state.clear();
        state.plank.rotation = self.seesaw.rotation;
        state.plank.clamp_rotation();
        state.plank.target_rotation = self
            .seesaw
            .target_rotation
            .clamp(-state.plank.max_tilt, state.plank.max_tilt);

        for rec in &self.balls {
            let pos = Vec2::new(rec.x, rec.y);
            let id = state.alloc_id();
            let mut ball = Ball::falling(id, pos, rec.radius, rec.weight, rec.color);
            if rec.resting {
                let offset = rec.offset.unwrap_or_else(|| state.plank.offset_of(pos));
                ball.phase = BallPhase::Resting { offset };
            }
            state.balls.push(ball);
        }
        state.tally = TorqueTally::from_balls(&state.balls);
    }
}
