//! Falling ball vs plank contact.
//!
//! Contact is decided on the swept interval between this frame and the next so that a
//! ball moving faster than the plank is thick still lands instead of tunnelling through.

use glam::Vec2;
use seesaw_config::PhysicsConfig;

use crate::ball::{Ball, BallColor, BallId, BallPhase};
use crate::plank::Plank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    /// Exactly over the pivot; contributes no torque.
    Center,
}

impl Side {
    pub fn of(offset: f32) -> Self {
        if offset < 0.0 {
            Side::Left
        } else if offset > 0.0 {
            Side::Right
        } else {
            Side::Center
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Center => "center",
        }
    }
}

/// A ball that came to rest this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub id: BallId,
    pub weight: u32,
    pub color: BallColor,
    pub offset: f32,
    pub side: Side,
}

/// Downward speed a falling ball will have after one more frame of gravity.
/// Heavier balls accelerate faster; the result is capped at `max_fall_speed` when set.
pub fn fall_speed_after(vy: f32, weight: u32, physics: &PhysicsConfig) -> f32 {
    let scale = 1.0 + weight.saturating_sub(1) as f32 * physics.weight_gravity_scale;
    let next = vy + physics.gravity * scale;
    if physics.max_fall_speed > 0.0 {
        next.min(physics.max_fall_speed)
    } else {
        next
    }
}

/// Freeze every falling ball that touches or will cross the plank surface before the next
/// frame. Snapped balls touch the surface and get a fixed offset within the plank's length.
pub fn detect_landings(plank: &Plank, balls: &mut [Ball], physics: &PhysicsConfig) -> Vec<Landing> {
    let mut landings = Vec::new();
    let cos = plank.rotation.cos();
    for ball in balls.iter_mut() {
        let BallPhase::Falling { vy } = ball.phase else {
            continue;
        };
        if !plank.within_extent(ball.pos.x) {
            continue;
        }
        let gap_now = plank.clearance(ball.pos, ball.radius);
        // Already deeper than the plank is thick: it went past on an earlier frame.
        if gap_now < -plank.height {
            continue;
        }
        let next_vy = fall_speed_after(vy, ball.weight, physics);
        let gap_next = plank.clearance(ball.pos + Vec2::new(0.0, next_vy), ball.radius);
        if gap_now > 0.0 && gap_next > 0.0 {
            continue;
        }
        // Straight down/up until the gap closes. Past either end the ball sits on the end.
        ball.pos.y += gap_now / cos;
        let offset = plank.contact_offset(ball.pos);
        ball.pos = plank.resting_center(offset, ball.radius);
        ball.phase = BallPhase::Resting { offset };
        landings.push(Landing {
            id: ball.id,
            weight: ball.weight,
            color: ball.color,
            offset,
            side: Side::of(offset),
        });
    }
    landings
}
