// integration_tests crate
// Black-box tests across the published plugin APIs: every plugin composed in one headless
// App, driven with a manual clock so runs are deterministic.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use seesaw_core::{CorePlugin, GameConfigRes, RngSeed, StorageRes};
use seesaw_gameplay::GameplayPlugin;
use seesaw_physics::PhysicsPlugin;
use seesaw_rendering::RenderingPlugin;

/// All plugins on top of MinimalPlugins, one display frame = one simulation frame.
pub fn build_headless_app(cfg: seesaw_config::GameConfig, storage: StorageRes, seed: u64) -> App {
    let hz = if cfg.tick.hz > 0.0 { cfg.tick.hz as f64 } else { 60.0 };
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / hz)));
    app.insert_resource(GameConfigRes(cfg))
        .insert_resource(RngSeed(seed))
        .insert_resource(storage);
    app.add_plugins((CorePlugin, PhysicsPlugin, RenderingPlugin, GameplayPlugin));
    app
}
