use glam::Vec2;
use seesaw_config::PlankConfig;

/// The pivoting board. `pivot` is the centre of the plank and the rotation axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Plank {
    pub pivot: Vec2,
    pub width: f32,
    pub height: f32,
    /// Radians, positive tilts the right end down.
    pub rotation: f32,
    /// Last tilt the torque law asked for.
    pub target_rotation: f32,
    /// Radians per frame.
    pub angular_velocity: f32,
    /// Symmetric rotation limit in radians.
    pub max_tilt: f32,
}

impl Plank {
    pub fn from_config(cfg: &PlankConfig) -> Self {
        Self {
            pivot: Vec2::new(cfg.pivot_x, cfg.pivot_y),
            width: cfg.width,
            height: cfg.height,
            rotation: 0.0,
            target_rotation: 0.0,
            angular_velocity: 0.0,
            max_tilt: tilt_limit(cfg.max_tilt_deg),
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    /// Unit vector along the plank, left to right.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    /// Unit vector pointing out of the top surface (screen-up when level).
    pub fn surface_normal(&self) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec2::new(sin, -cos)
    }

    /// Half of the plank's current horizontal footprint.
    pub fn horizontal_extent(&self) -> f32 {
        self.half_width() * self.rotation.cos()
    }

    pub fn within_extent(&self, x: f32) -> bool {
        (x - self.pivot.x).abs() <= self.horizontal_extent()
    }

    /// Height of the top surface directly above/below canvas `x`.
    pub fn surface_y_at(&self, x: f32) -> f32 {
        let cos = self.rotation.cos();
        self.pivot.y + (x - self.pivot.x) * self.rotation.tan() - self.height * 0.5 / cos
    }

    /// Gap between a ball's underside and the top surface, measured along the surface
    /// normal. Negative when the ball overlaps the plank.
    pub fn clearance(&self, center: Vec2, radius: f32) -> f32 {
        (center - self.pivot).dot(self.surface_normal()) - self.height * 0.5 - radius
    }

    /// Centre of a ball of `radius` sitting on the surface `offset` along the plank.
    pub fn resting_center(&self, offset: f32, radius: f32) -> Vec2 {
        self.pivot + self.direction() * offset + self.surface_normal() * (self.height * 0.5 + radius)
    }

    /// Signed distance along the plank of a point's projection.
    pub fn offset_of(&self, point: Vec2) -> f32 {
        (point - self.pivot).dot(self.direction())
    }

    /// `offset_of`, kept on the board: never further out than either end.
    pub fn contact_offset(&self, point: Vec2) -> f32 {
        let hw = self.half_width();
        self.offset_of(point).clamp(-hw, hw)
    }

    /// Clamp rotation into ±max_tilt; true when the limit engaged.
    pub fn clamp_rotation(&mut self) -> bool {
        let limit = self.max_tilt.abs();
        let clamped = self.rotation.clamp(-limit, limit);
        let hit = clamped != self.rotation;
        self.rotation = clamped;
        hit
    }

    pub fn tilt_degrees(&self) -> f32 {
        self.rotation.to_degrees()
    }

    pub fn reset(&mut self) {
        self.rotation = 0.0;
        self.target_rotation = 0.0;
        self.angular_velocity = 0.0;
    }

    /// Region where a click may drop a ball of up to `max_radius`, sized for the worst legal
    /// tilt so a freshly spawned ball never starts with its underside below the raised end.
    pub fn drop_zone(&self, max_radius: f32) -> DropZone {
        let (sin, cos) = self.max_tilt.sin_cos();
        let reach = self.half_width() * cos;
        DropZone {
            min_x: self.pivot.x - reach,
            max_x: self.pivot.x + reach,
            max_y: self.pivot.y - self.half_width() * sin - self.height * 0.5 / cos - max_radius,
        }
    }
}

/// Configured limit in radians. Sign is ignored; unusable values fall back to the default.
fn tilt_limit(deg: f32) -> f32 {
    let deg = deg.abs();
    if deg.is_finite() && deg > 0.0 && deg < 90.0 {
        deg.to_radians()
    } else {
        PlankConfig::default().max_tilt_deg.to_radians()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZone {
    pub min_x: f32,
    pub max_x: f32,
    /// Exclusive lower edge (canvas y grows downward); the upper edge is the canvas top.
    pub max_y: f32,
}

impl DropZone {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= 0.0 && p.y < self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> Plank {
        Plank::from_config(&PlankConfig::default())
    }

    #[test]
    fn level_surface_geometry() {
        let p = level();
        assert_eq!(p.surface_y_at(500.0), 440.0);
        assert_eq!(p.horizontal_extent(), 200.0);
        assert!(p.within_extent(600.0));
        assert!(!p.within_extent(600.5));
        let c = p.resting_center(100.0, 20.0);
        assert!((c - Vec2::new(500.0, 420.0)).length() < 1e-4);
        assert!(p.clearance(c, 20.0).abs() < 1e-4);
    }

    #[test]
    fn tilted_resting_center_touches_surface() {
        let mut p = level();
        p.rotation = 20f32.to_radians();
        for offset in [-150.0, -10.0, 0.0, 75.0, 190.0] {
            let c = p.resting_center(offset, 15.0);
            assert!(p.clearance(c, 15.0).abs() < 1e-3, "offset {offset}");
            assert!((p.offset_of(c) - offset).abs() < 1e-3);
        }
        // right end lower on screen than left end
        assert!(p.surface_y_at(550.0) > p.surface_y_at(250.0));
    }

    #[test]
    fn clamp_rotation_reports_limit() {
        let mut p = level();
        p.rotation = 1.0;
        assert!(p.clamp_rotation());
        assert!((p.tilt_degrees() - 30.0).abs() < 1e-4);
        p.rotation = -0.1;
        assert!(!p.clamp_rotation());
    }

    #[test]
    fn drop_zone_never_exceeds_rotated_extent() {
        let mut p = level();
        let zone = p.drop_zone(30.0);
        p.rotation = p.max_tilt;
        assert!(zone.max_x - p.pivot.x <= p.horizontal_extent() + 1e-3);
        // a 30 px ball at the zone bottom clears the raised end's surface at max tilt
        let raised_end_x = p.pivot.x - p.horizontal_extent();
        assert!(zone.max_y + 30.0 <= p.surface_y_at(raised_end_x) + 1e-3);
        assert!(zone.max_y < level().drop_zone(0.0).max_y);
        assert!(zone.contains(Vec2::new(400.0, 100.0)));
        assert!(!zone.contains(Vec2::new(400.0, 500.0)));
        assert!(!zone.contains(Vec2::new(50.0, 100.0)));
        assert!(!zone.contains(Vec2::new(400.0, -1.0)));
    }

    #[test]
    fn contact_offset_stays_on_the_board() {
        let mut p = level();
        p.rotation = p.max_tilt;
        let beyond = p.pivot - p.direction() * 230.0 + p.surface_normal() * 40.0;
        assert!(p.offset_of(beyond) < -p.half_width());
        assert_eq!(p.contact_offset(beyond), -p.half_width());
        let inside = p.resting_center(-120.0, 15.0);
        assert!((p.contact_offset(inside) + 120.0).abs() < 1e-3);
    }

    #[test]
    fn unusable_tilt_limits_are_normalised() {
        let cfg = |deg: f32| PlankConfig {
            max_tilt_deg: deg,
            ..Default::default()
        };
        let default_limit = 30f32.to_radians();
        assert!((Plank::from_config(&cfg(-20.0)).max_tilt - 20f32.to_radians()).abs() < 1e-6);
        for bad in [f32::NAN, f32::INFINITY, 0.0, 90.0, -135.0] {
            let mut p = Plank::from_config(&cfg(bad));
            assert!((p.max_tilt - default_limit).abs() < 1e-6, "{bad}");
            p.rotation = 2.0;
            assert!(p.clamp_rotation());
        }
    }
}
