/*!
seesaw: bevy_app main.

* Config loading (native layered + `--config` layers, wasm embed) using seesaw_config::GameConfig.
* Validation warnings logged once LogPlugin is up.
* Save slot on disk (native) or in localStorage (wasm).
* Optional timed exit for smoke runs.
*/

use bevy::prelude::*;
use clap::Parser;
use seesaw_core::{CorePlugin, GameConfigRes, RngSeed};
use seesaw_gameplay::GameplayPlugin;
use seesaw_physics::PhysicsPlugin;
use seesaw_rendering::RenderingPlugin;

mod auto_close;
mod cli;
mod startup_log;
mod storage;

use auto_close::AutoClosePlugin;
use cli::Args;
use startup_log::StartupNotes;

// ---------------- Config Loading ----------------

#[cfg(target_arch = "wasm32")]
fn load_config(_args: &Args, notes: &mut StartupNotes) -> seesaw_config::GameConfig {
    // Embed base config (no layered local override on wasm).
    const RAW: &str = include_str!("../../assets/config/game.ron");
    seesaw_config::GameConfig::from_ron_str(RAW).unwrap_or_else(|e| {
        notes.warn(format!("CONFIG (wasm) parse failure: {e}; using defaults"));
        seesaw_config::GameConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(args: &Args, notes: &mut StartupNotes) -> seesaw_config::GameConfig {
    let (cfg, used, errors) = seesaw_config::GameConfig::load_layered(args.config_layers());
    for e in errors {
        notes.warn(format!("CONFIG LOAD ISSUE: {e}"));
    }
    if used.is_empty() {
        notes.info("No config layers found; using defaults");
    } else {
        notes.info(format!("Config layers loaded: {used:?}"));
    }
    cfg
}

fn pick_seed(args: &Args) -> u64 {
    args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(12345)
    })
}

// ---------------- Main ----------------

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let args = Args::parse();
    let mut notes = StartupNotes::default();
    let mut cfg = load_config(&args, &mut notes);
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }

    // Validation warnings are non-fatal
    for w in cfg.validate() {
        notes.warn(format!("CONFIG WARNING: {w}"));
    }
    notes.info(format!("Window config: {:?}", cfg.window));
    notes.info(format!(
        "Runtime summary: model={:?} max_tilt_deg={} torque_per_degree={}",
        cfg.rotation.model, cfg.plank.max_tilt_deg, cfg.rotation.torque_per_degree
    ));

    let (storage, location) = storage::open_storage(&cfg, args.storage_dir.as_deref())?;
    notes.info(format!("{location} (key {})", cfg.storage.key));
    let seed = pick_seed(&args);
    notes.info(format!("spawn rng seed {seed}"));

    let window_title = cfg.window.title.clone();

    let mut app = App::new();
    app.insert_resource(GameConfigRes(cfg.clone()))
        .insert_resource(RngSeed(seed))
        .insert_resource(storage)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window_title,
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(PhysicsPlugin)
        .add_plugins(RenderingPlugin)
        .add_plugins(GameplayPlugin)
        .add_plugins(AutoClosePlugin);
    startup_log::add_startup_notes(&mut app, notes);

    app.run();
    Ok(())
}
