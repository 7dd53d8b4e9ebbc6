// Session lifecycle: build the simulation from storage at startup.

use bevy::prelude::*;
use seesaw_core::{GameConfigRes, RngSeed, SimulationRes, StorageRes};
use seesaw_sim::Simulation;

/// System: restore the saved session (or start empty) unless a simulation was inserted already.
pub fn restore_session(
    mut commands: Commands,
    existing: Option<Res<SimulationRes>>,
    cfg: Res<GameConfigRes>,
    seed: Res<RngSeed>,
    storage: Res<StorageRes>,
) {
    if existing.is_some() {
        return;
    }
    let sim = Simulation::restore(cfg.0.clone(), seed.0, &*storage.0);
    info!(
        balls = sim.state().balls.len(),
        key = %cfg.0.storage.key,
        "session ready"
    );
    commands.insert_resource(SimulationRes(sim));
}

#[cfg(test)]
mod tests {
    use super::*;
    use seesaw_core::CorePlugin;
    use seesaw_sim::{MemoryStorage, Storage, Vec2};

    fn app_with_storage(storage: MemoryStorage) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        app.insert_resource(StorageRes::new(storage));
        app.add_systems(Startup, restore_session);
        app
    }

    #[test]
    fn restores_saved_balls() {
        let mut source = Simulation::new(Default::default(), 3);
        let mut storage = MemoryStorage::new();
        source.handle_click(Vec2::new(350.0, 60.0), &mut storage);
        source.handle_click(Vec2::new(450.0, 60.0), &mut storage);

        let mut app = app_with_storage(storage);
        app.update();
        let sim = app.world().resource::<SimulationRes>();
        assert_eq!(sim.state().balls.len(), 2);
        assert_eq!(sim.state().balls[0].pos, Vec2::new(350.0, 60.0));
    }

    #[test]
    fn unreadable_slot_starts_empty() {
        let mut storage = MemoryStorage::new();
        storage.write("seesawGame", "not json").unwrap();
        let mut app = app_with_storage(storage);
        app.update();
        assert!(app.world().resource::<SimulationRes>().state().balls.is_empty());
    }
}
