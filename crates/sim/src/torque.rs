use seesaw_config::RotationConfig;

use crate::ball::{Ball, BallPhase};

/// Per-side torque and weight totals over resting balls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorqueTally {
    /// Sum of weight × |offset| for balls left of the pivot.
    pub left_torque: f32,
    pub right_torque: f32,
    pub left_weight: u32,
    pub right_weight: u32,
}

impl TorqueTally {
    /// A ball exactly over the pivot contributes to neither side.
    pub fn from_balls(balls: &[Ball]) -> Self {
        let mut tally = Self::default();
        for ball in balls {
            let BallPhase::Resting { offset } = ball.phase else {
                continue;
            };
            let torque = ball.weight as f32 * offset;
            if offset < 0.0 {
                tally.left_torque -= torque;
                tally.left_weight += ball.weight;
            } else if offset > 0.0 {
                tally.right_torque += torque;
                tally.right_weight += ball.weight;
            }
        }
        tally
    }

    /// Positive when the right side is heavier.
    pub fn net(&self) -> f32 {
        self.right_torque - self.left_torque
    }
}

/// Saturating proportional law: degrees = clamp(net / K, ±max), returned in radians.
pub fn target_rotation(net_torque: f32, cfg: &RotationConfig, max_tilt: f32) -> f32 {
    let gain = cfg.torque_per_degree.max(f32::EPSILON);
    let limit = max_tilt.abs();
    let target = (net_torque / gain).to_radians();
    if target.is_nan() || limit.is_nan() {
        return 0.0;
    }
    target.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{BallColor, BallId};
    use glam::Vec2;

    fn resting(id: u64, weight: u32, offset: f32) -> Ball {
        Ball {
            id: BallId(id),
            pos: Vec2::ZERO,
            radius: 10.0,
            weight,
            color: BallColor::Red,
            phase: BallPhase::Resting { offset },
        }
    }

    #[test]
    fn partitions_by_side_and_skips_falling() {
        let mut falling = resting(9, 10, 0.0);
        falling.phase = BallPhase::Falling { vy: 3.0 };
        let balls = vec![
            resting(1, 5, 100.0),
            resting(2, 2, -50.0),
            resting(3, 4, 0.0),
            falling,
        ];
        let t = TorqueTally::from_balls(&balls);
        assert_eq!(t.right_torque, 500.0);
        assert_eq!(t.left_torque, 100.0);
        assert_eq!(t.right_weight, 5);
        assert_eq!(t.left_weight, 2);
        assert_eq!(t.net(), 400.0);
    }

    #[test]
    fn balanced_sides_have_zero_net() {
        let balls = vec![resting(1, 3, 80.0), resting(2, 6, -40.0)];
        assert_eq!(TorqueTally::from_balls(&balls).net(), 0.0);
    }

    #[test]
    fn target_is_proportional_then_saturates() {
        let cfg = RotationConfig::default();
        let max = 30f32.to_radians();
        // 500 / 50 = 10 degrees
        assert!((target_rotation(500.0, &cfg, max).to_degrees() - 10.0).abs() < 1e-4);
        assert!((target_rotation(-500.0, &cfg, max).to_degrees() + 10.0).abs() < 1e-4);
        assert!((target_rotation(1.0e6, &cfg, max) - max).abs() < 1e-6);
        assert!((target_rotation(-1.0e6, &cfg, max) + max).abs() < 1e-6);
    }
}
