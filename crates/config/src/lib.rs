// Pure configuration crate (no Bevy dependency).
// Provides: data structures, layered loading, validation producing warnings (non-fatal), and tests.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Canvas width in pixels. The simulation works in this fixed-size surface.
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Seesaw".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlankConfig {
    /// Pivot (plank centre) in canvas coordinates, y growing downward.
    pub pivot_x: f32,
    pub pivot_y: f32,
    pub width: f32,
    pub height: f32,
    pub max_tilt_deg: f32,
    pub fulcrum_width: f32,
    pub fulcrum_height: f32,
}
impl Default for PlankConfig {
    fn default() -> Self {
        Self {
            pivot_x: 400.0,
            pivot_y: 450.0,
            width: 400.0,
            height: 20.0,
            max_tilt_deg: 30.0,
            fulcrum_width: 60.0,
            fulcrum_height: 40.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Per-frame velocity gain for a 1 kg ball (pixels / frame²).
    pub gravity: f32,
    /// Extra gravity fraction per kg above 1.
    pub weight_gravity_scale: f32,
    /// Cap on downward speed (pixels / frame). 0.0 disables the cap.
    pub max_fall_speed: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            weight_gravity_scale: 0.05,
            max_fall_speed: 15.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationModel {
    /// First-order approach toward the torque target.
    #[default]
    Smoothed,
    /// Spring toward the torque target with velocity damping.
    Damped,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    pub model: RotationModel,
    /// Net torque (kg·px) that maps to one degree of target tilt.
    pub torque_per_degree: f32,
    /// Fraction of the remaining gap closed per frame (Smoothed).
    pub smoothing: f32,
    /// Angular acceleration per radian of gap (Damped).
    pub stiffness: f32,
    /// Angular velocity multiplier per frame, < 1 (Damped).
    pub damping: f32,
}
impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            model: RotationModel::Smoothed,
            torque_per_degree: 50.0,
            smoothing: 0.05,
            stiffness: 0.02,
            damping: 0.9,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Inclusive kg range for the random ball weight.
    pub weight_range: SpawnRange<u32>,
    /// radius = clamp(sqrt(weight) * radius_scale, radius_range.min, radius_range.max)
    pub radius_scale: f32,
    pub radius_range: SpawnRange<f32>,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            weight_range: SpawnRange { min: 1, max: 10 },
            radius_scale: 10.0,
            radius_range: SpawnRange {
                min: 12.0,
                max: 45.0,
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Fixed slot name the snapshot is written under.
    pub key: String,
    /// Directory for the file-backed slot (native only).
    pub dir: String,
}
impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "seesawGame".into(),
            dir: "saves".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Landing log entries kept; oldest evicted first.
    pub capacity: usize,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TickConfig {
    pub hz: f32,
    /// Maximum simulation steps run for one display frame.
    pub max_substeps: u32,
}
impl Default for TickConfig {
    fn default() -> Self {
        Self {
            hz: 60.0,
            max_substeps: 5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub plank: PlankConfig,
    pub physics: PhysicsConfig,
    pub rotation: RotationConfig,
    pub spawn: SpawnConfig,
    pub storage: StorageConfig,
    pub log: LogConfig,
    pub tick: TickConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Parse an in-memory RON document (embedded config on wasm).
    pub fn from_ron_str(raw: &str) -> Result<Self, String> {
        ron::from_str(raw).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load and deep-merge RON layers in order; later layers override earlier keys.
    /// Returns (config, layers used, errors). Missing layers are reported, never fatal.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn max_tilt_rad(&self) -> f32 {
        self.plank.max_tilt_deg.to_radians()
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let p = &self.plank;
        if p.width <= 0.0 || p.height <= 0.0 {
            w.push("plank dimensions must be > 0".into());
        }
        if p.pivot_x - p.width * 0.5 < 0.0 || p.pivot_x + p.width * 0.5 > self.window.width {
            w.push(format!(
                "plank (pivot_x {} width {}) extends past the canvas width {}",
                p.pivot_x, p.width, self.window.width
            ));
        }
        if p.pivot_y <= 0.0 || p.pivot_y >= self.window.height {
            w.push(format!(
                "plank.pivot_y {} outside canvas height {}",
                p.pivot_y, self.window.height
            ));
        }
        if !(0.0..90.0).contains(&p.max_tilt_deg) || p.max_tilt_deg == 0.0 {
            w.push(format!(
                "plank.max_tilt_deg {} outside (0, 90); plank cannot tilt sensibly",
                p.max_tilt_deg
            ));
        }
        let (sin, cos) = self.max_tilt_rad().sin_cos();
        let drop_top = p.pivot_y - p.width * 0.5 * sin - p.height * 0.5 / cos;
        if drop_top <= 0.0 {
            w.push(format!(
                "drop zone is empty: worst-case plank top {drop_top:.1} is above the canvas"
            ));
        }
        if self.physics.gravity <= 0.0 {
            w.push("physics.gravity must be > 0; balls will never fall".into());
        }
        if self.physics.weight_gravity_scale < 0.0 {
            w.push("physics.weight_gravity_scale negative -> heavy balls fall slower".into());
        }
        if self.physics.max_fall_speed < 0.0 {
            w.push("physics.max_fall_speed negative -> treated as no cap".into());
        } else if self.physics.max_fall_speed > 0.0 && self.physics.max_fall_speed < self.physics.gravity {
            w.push(format!(
                "physics.max_fall_speed {} below one frame of gravity {}",
                self.physics.max_fall_speed, self.physics.gravity
            ));
        }
        let r = &self.rotation;
        if r.torque_per_degree <= 0.0 {
            w.push("rotation.torque_per_degree must be > 0".into());
        }
        match r.model {
            RotationModel::Smoothed => {
                if !(r.smoothing > 0.0 && r.smoothing <= 1.0) {
                    w.push(format!(
                        "rotation.smoothing {} outside (0, 1]; plank will not settle",
                        r.smoothing
                    ));
                }
            }
            RotationModel::Damped => {
                if r.stiffness <= 0.0 {
                    w.push("rotation.stiffness must be > 0".into());
                }
                if !(0.0..1.0).contains(&r.damping) {
                    w.push(format!(
                        "rotation.damping {} outside [0, 1); oscillation will not decay",
                        r.damping
                    ));
                }
            }
        }
        let s = &self.spawn;
        if s.weight_range.min == 0 {
            w.push("spawn.weight_range.min is 0; weightless balls produce no torque".into());
        }
        if s.weight_range.min > s.weight_range.max {
            w.push(format!(
                "spawn.weight_range min ({}) greater than max ({})",
                s.weight_range.min, s.weight_range.max
            ));
        }
        if s.radius_scale <= 0.0 {
            w.push("spawn.radius_scale must be > 0".into());
        }
        if s.radius_range.min <= 0.0 {
            w.push("spawn.radius_range.min must be > 0".into());
        }
        if s.radius_range.min > s.radius_range.max {
            w.push(format!(
                "spawn.radius_range min ({}) greater than max ({})",
                s.radius_range.min, s.radius_range.max
            ));
        }
        if self.storage.key.trim().is_empty() {
            w.push("storage.key is empty".into());
        }
        if self.log.capacity == 0 {
            w.push("log.capacity is 0; landing log disabled".into());
        }
        if self.tick.hz <= 0.0 {
            w.push("tick.hz must be > 0".into());
        }
        if self.tick.max_substeps == 0 {
            w.push("tick.max_substeps is 0; simulation never advances".into());
        }
        w
    }
}
