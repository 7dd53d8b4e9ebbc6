// Gameplay crate: session restore at startup plus pointer / keyboard input.
// Everything here feeds the simulation through InputSet; the step itself lives in seesaw_physics.

use bevy::prelude::*;
mod input;
mod session;
pub use session::restore_session;

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, restore_session);
        input::add_input_systems(app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seesaw_core::{CorePlugin, PendingClicks, SimulationRes};
    use seesaw_physics::PhysicsPlugin;

    #[test]
    fn plugin_adds() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        app.add_plugins(GameplayPlugin);
        app.update();
        assert!(app.world().get_resource::<SimulationRes>().is_some(), "session not created");
    }

    #[test]
    fn click_then_step_lands_ball() {
        use bevy::time::TimeUpdateStrategy;
        use std::time::Duration;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)));
        app.add_plugins((CorePlugin, PhysicsPlugin, GameplayPlugin));
        app.update();
        app.world_mut()
            .resource_mut::<PendingClicks>()
            .push_back(Vec2::new(300.0, 200.0));
        for _ in 0..200 {
            app.update();
        }
        let sim = app.world().resource::<SimulationRes>();
        assert_eq!(sim.state().resting_count(), 1);
        assert!(sim.readout().left_weight > 0);
        assert_eq!(sim.log().len(), 1);
    }
}
