use glam::Vec2;
use seesaw_config::SpawnConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(pub u64);

/// Fill colours a spawned ball can take. Serialized by lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColor {
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Pink,
    Brown,
    Gray,
    Black,
}

impl BallColor {
    pub const ALL: [BallColor; 10] = [
        BallColor::Red,
        BallColor::Green,
        BallColor::Blue,
        BallColor::Yellow,
        BallColor::Purple,
        BallColor::Orange,
        BallColor::Pink,
        BallColor::Brown,
        BallColor::Gray,
        BallColor::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BallColor::Red => "red",
            BallColor::Green => "green",
            BallColor::Blue => "blue",
            BallColor::Yellow => "yellow",
            BallColor::Purple => "purple",
            BallColor::Orange => "orange",
            BallColor::Pink => "pink",
            BallColor::Brown => "brown",
            BallColor::Gray => "gray",
            BallColor::Black => "black",
        }
    }

    /// sRGB components in 0..=1.
    pub fn srgb(self) -> [f32; 3] {
        match self {
            BallColor::Red => [0.90, 0.20, 0.25],
            BallColor::Green => [0.20, 0.80, 0.45],
            BallColor::Blue => [0.20, 0.55, 0.90],
            BallColor::Yellow => [0.95, 0.85, 0.15],
            BallColor::Purple => [0.65, 0.45, 0.95],
            BallColor::Orange => [0.95, 0.50, 0.15],
            BallColor::Pink => [0.98, 0.60, 0.75],
            BallColor::Brown => [0.55, 0.35, 0.20],
            BallColor::Gray => [0.55, 0.55, 0.58],
            BallColor::Black => [0.08, 0.08, 0.10],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallPhase {
    /// Downward speed in pixels per frame.
    Falling { vy: f32 },
    /// Signed distance along the plank from the pivot, frozen at landing.
    Resting { offset: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: BallId,
    /// Centre in canvas coordinates.
    pub pos: Vec2,
    pub radius: f32,
    /// Whole kilograms.
    pub weight: u32,
    pub color: BallColor,
    pub phase: BallPhase,
}

impl Ball {
    pub fn falling(id: BallId, pos: Vec2, radius: f32, weight: u32, color: BallColor) -> Self {
        Self {
            id,
            pos,
            radius,
            weight,
            color,
            phase: BallPhase::Falling { vy: 0.0 },
        }
    }

    pub fn is_resting(&self) -> bool {
        matches!(self.phase, BallPhase::Resting { .. })
    }

    pub fn offset(&self) -> Option<f32> {
        match self.phase {
            BallPhase::Resting { offset } => Some(offset),
            BallPhase::Falling { .. } => None,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }
}

/// radius = clamp(sqrt(weight) * scale, min, max). Tolerates an inverted range instead of panicking.
pub fn radius_for_weight(weight: u32, spawn: &SpawnConfig) -> f32 {
    let raw = (weight as f32).sqrt() * spawn.radius_scale;
    raw.max(spawn.radius_range.min).min(spawn.radius_range.max)
}

/// Largest radius a spawn can roll: the heaviest weight in the configured range.
pub fn max_spawn_radius(spawn: &SpawnConfig) -> f32 {
    let heaviest = spawn.weight_range.min.max(spawn.weight_range.max).max(1);
    radius_for_weight(heaviest, spawn)
}
