use seesaw_config::{RotationConfig, RotationModel};

use crate::plank::Plank;

// Below this the plank is considered settled on its target.
const SETTLE_EPS: f32 = 1.0e-6;

/// Advance the plank one frame toward `plank.target_rotation` and clamp to ±max tilt.
pub fn integrate_rotation(plank: &mut Plank, cfg: &RotationConfig) {
    let gap = plank.target_rotation - plank.rotation;
    match cfg.model {
        RotationModel::Smoothed => {
            let delta = gap * cfg.smoothing.clamp(0.0, 1.0);
            plank.rotation += delta;
            plank.angular_velocity = delta;
        }
        RotationModel::Damped => {
            let accel = gap * cfg.stiffness;
            plank.angular_velocity = (plank.angular_velocity + accel) * cfg.damping.clamp(0.0, 1.0);
            plank.rotation += plank.angular_velocity;
        }
    }
    if plank.clamp_rotation() {
        plank.angular_velocity = 0.0;
    }
    if (plank.target_rotation - plank.rotation).abs() < SETTLE_EPS
        && plank.angular_velocity.abs() < SETTLE_EPS
    {
        plank.rotation = plank.target_rotation;
        plank.angular_velocity = 0.0;
    }
}
