use std::fmt;

use crate::state::SimState;

/// Text shown beside the canvas, derived from the current state every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readout {
    pub left_weight: u32,
    pub right_weight: u32,
    /// Current plank tilt in degrees, positive = right side down.
    pub tilt_deg: f32,
}

impl Readout {
    pub fn from_state(state: &SimState) -> Self {
        Self {
            left_weight: state.tally.left_weight,
            right_weight: state.tally.right_weight,
            tilt_deg: state.plank.tilt_degrees(),
        }
    }

    pub fn left_text(&self) -> String {
        format!("Left: {}", self.left_weight)
    }

    pub fn right_text(&self) -> String {
        format!("Right: {}", self.right_weight)
    }

    /// One decimal, with an arrow toward the side that is down.
    pub fn tilt_text(&self) -> String {
        let rounded = (self.tilt_deg * 10.0).round() / 10.0;
        if rounded == 0.0 {
            return "Tilt: 0°".to_string();
        }
        let arrow = if rounded > 0.0 { "→" } else { "←" };
        format!("Tilt: {:.1}° {arrow}", rounded.abs())
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.left_text(), self.right_text(), self.tilt_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_readout() {
        assert_eq!(Readout::default().to_string(), "Left: 0 / Right: 0 / Tilt: 0°");
    }

    #[test]
    fn arrow_points_at_low_side() {
        let r = Readout {
            left_weight: 3,
            right_weight: 7,
            tilt_deg: 12.34,
        };
        assert_eq!(r.tilt_text(), "Tilt: 12.3° →");
        let l = Readout {
            tilt_deg: -4.06,
            ..r
        };
        assert_eq!(l.tilt_text(), "Tilt: 4.1° ←");
        assert_eq!(l.left_text(), "Left: 3");
        assert_eq!(l.right_text(), "Right: 7");
    }

    #[test]
    fn tiny_tilt_reads_level() {
        for tilt in [0.04, -0.04, -0.0] {
            let r = Readout {
                tilt_deg: tilt,
                ..Default::default()
            };
            assert_eq!(r.tilt_text(), "Tilt: 0°");
        }
    }
}
