use crate::ball::{Ball, BallPhase};
use crate::plank::Plank;

/// Re-seat every resting ball on the plank at its frozen offset for the current rotation.
/// Resting positions are derived, never integrated.
pub fn follow_plank(plank: &Plank, balls: &mut [Ball]) {
    for ball in balls.iter_mut() {
        if let BallPhase::Resting { offset } = ball.phase {
            ball.pos = plank.resting_center(offset, ball.radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{BallColor, BallId};
    use glam::Vec2;
    use seesaw_config::PlankConfig;

    #[test]
    fn resting_ball_rides_rotation_falling_ball_untouched() {
        let mut plank = Plank::from_config(&PlankConfig::default());
        let mut resting = Ball::falling(BallId(1), Vec2::ZERO, 10.0, 2, BallColor::Pink);
        resting.phase = BallPhase::Resting { offset: 150.0 };
        let falling = Ball::falling(BallId(2), Vec2::new(300.0, 50.0), 10.0, 2, BallColor::Gray);
        let mut balls = vec![resting, falling];

        follow_plank(&plank, &mut balls);
        assert!((balls[0].pos - Vec2::new(550.0, 430.0)).length() < 1e-4);

        plank.rotation = 15f32.to_radians();
        follow_plank(&plank, &mut balls);
        // right side dipped: ball moved down the screen and stays on the surface
        assert!(balls[0].pos.y > 430.0);
        assert!(plank.clearance(balls[0].pos, 10.0).abs() < 1e-3);
        assert_eq!(balls[0].offset(), Some(150.0));
        assert_eq!(balls[1].pos, Vec2::new(300.0, 50.0));
    }
}
