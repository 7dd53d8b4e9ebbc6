// Core crate: shared resources, events and system set labels for the Bevy front end.
// Holds no game logic of its own; the simulation lives in seesaw_sim.

use bevy::prelude::*;
use seesaw_sim::{BallId, Side, Simulation, Storage};

/// Deterministic RNG seed resource (set once at startup / tests for reproducible spawning).
#[derive(Resource, Debug, Copy, Clone, Default)]
pub struct RngSeed(pub u64);

// Wrapper Bevy resource for the pure-data GameConfig (keeps seesaw_config free of bevy dependency).
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfigRes(pub seesaw_config::GameConfig);

/// The single owned simulation value. Exclusive `ResMut` access serialises every mutation.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct SimulationRes(pub Simulation);

/// Durable slot the session is saved to.
#[derive(Resource, Deref, DerefMut)]
pub struct StorageRes(pub Box<dyn Storage + Send + Sync>);

impl StorageRes {
    pub fn new(storage: impl Storage + Send + Sync + 'static) -> Self {
        Self(Box::new(storage))
    }
}

impl Default for StorageRes {
    fn default() -> Self {
        Self::new(seesaw_sim::MemoryStorage::new())
    }
}

/// Canvas-space clicks waiting for the next input pass, oldest first.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct PendingClicks(pub std::collections::VecDeque<Vec2>);

/// Set by the clear button / key; consumed in the input pass.
#[derive(Resource, Debug, Default)]
pub struct ClearRequested(pub bool);

/// Fired once per ball that came to rest.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LandingEvent {
    pub id: BallId,
    pub weight: u32,
    pub offset: f32,
    pub side: Side,
}

/// Maps the fixed-size canvas (origin top-left, y down) onto the 2D world (origin
/// centre, y up) the camera looks at.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub size: Vec2,
}

impl CanvasFrame {
    pub fn from_config(cfg: &seesaw_config::GameConfig) -> Self {
        Self {
            size: Vec2::new(cfg.window.width, cfg.window.height),
        }
    }

    pub fn to_world(&self, canvas: Vec2) -> Vec2 {
        Vec2::new(canvas.x - self.size.x * 0.5, self.size.y * 0.5 - canvas.y)
    }

    pub fn to_canvas(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.size.x * 0.5, self.size.y * 0.5 - world.y)
    }

    /// Canvas rotations are clockwise-positive; world rotations are counter-clockwise.
    pub fn world_angle(&self, canvas_radians: f32) -> f32 {
        -canvas_radians
    }
}

impl Default for CanvasFrame {
    fn default() -> Self {
        Self::from_config(&seesaw_config::GameConfig::default())
    }
}

// System set labels
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct InputSet; // clicks and clear requests applied to the simulation
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct StepSet; // fixed-timestep simulation frames
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct PresentSet; // readouts, log panel, drawing

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (InputSet, StepSet, PresentSet).chain())
            .init_resource::<GameConfigRes>()
            .init_resource::<RngSeed>()
            .init_resource::<StorageRes>()
            .init_resource::<PendingClicks>()
            .init_resource::<ClearRequested>()
            .add_event::<LandingEvent>()
            .add_systems(PreStartup, insert_canvas_frame);
    }
}

fn insert_canvas_frame(mut commands: Commands, cfg: Res<GameConfigRes>) {
    commands.insert_resource(CanvasFrame::from_config(&cfg.0));
}
