// Pointer and keyboard input.
// - Left clicks are converted window -> world -> canvas and queued in PendingClicks.
// - `C` and the clear button raise ClearRequested.
// - apply_input drains both into the simulation inside InputSet, before the step.
// Graceful early returns if no window/camera (other crates own window/camera creation).

use bevy::prelude::*;
use seesaw_core::{CanvasFrame, ClearRequested, InputSet, PendingClicks, SimulationRes, StorageRes};
use seesaw_rendering::ClearButton;

/// Convert a window cursor position (top-left origin, logical coordinates) to world coordinates.
fn cursor_world_pos(camera_q: &Query<(&Camera, &GlobalTransform)>, screen_pos: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?; // assume single active camera
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// System: queue a canvas-space click for every left press that is not on a UI button.
pub(crate) fn capture_clicks(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    ui_q: Query<&Interaction, With<Button>>,
    frame: Option<Res<CanvasFrame>>,
    mut pending: ResMut<PendingClicks>,
) {
    let (Some(buttons), Some(frame)) = (buttons, frame) else { return };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if ui_q.iter().any(|i| *i != Interaction::None) {
        return;
    }
    let Some(window) = windows_q.iter().next() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    let Some(world) = cursor_world_pos(&camera_q, cursor) else { return };
    pending.push_back(frame.to_canvas(world));
}

/// System: `C` requests a clear.
pub(crate) fn clear_on_key(keys: Option<Res<ButtonInput<KeyCode>>>, mut request: ResMut<ClearRequested>) {
    if keys.is_some_and(|k| k.just_pressed(KeyCode::KeyC)) {
        request.0 = true;
    }
}

/// System: pressing the clear button requests a clear.
pub(crate) fn clear_on_button(
    q: Query<&Interaction, (Changed<Interaction>, With<ClearButton>)>,
    mut request: ResMut<ClearRequested>,
) {
    if q.iter().any(|i| *i == Interaction::Pressed) {
        request.0 = true;
    }
}

/// System: apply a pending clear, then spawn balls for queued clicks.
pub(crate) fn apply_input(
    sim: Option<ResMut<SimulationRes>>,
    mut storage: ResMut<StorageRes>,
    mut pending: ResMut<PendingClicks>,
    mut request: ResMut<ClearRequested>,
) {
    let Some(mut sim) = sim else { return };
    if std::mem::take(&mut request.0) {
        sim.clear(&mut *storage.0);
    }
    if pending.is_empty() {
        return;
    }
    let spawned = sim.pump_input(&mut pending.0, &mut *storage.0);
    debug!(spawned = spawned.len(), "clicks applied");
}

/// Helper to register input systems (invoked by GameplayPlugin).
pub(crate) fn add_input_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            (capture_clicks, clear_on_key, clear_on_button),
            apply_input,
        )
            .chain()
            .in_set(InputSet),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use seesaw_core::CorePlugin;
    use seesaw_sim::{MemoryStorage, Simulation, Storage};

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        app.insert_resource(SimulationRes(Simulation::new(Default::default(), 11)));
        add_input_systems(&mut app);
        app
    }

    #[test]
    fn queued_clicks_spawn_and_persist() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<PendingClicks>()
            .extend([Vec2::new(320.0, 80.0), Vec2::new(20.0, 20.0)]);
        app.update();
        assert_eq!(app.world().resource::<SimulationRes>().state().balls.len(), 1);
        assert!(app.world().resource::<PendingClicks>().is_empty());
        let stored = app.world().resource::<StorageRes>().read("seesawGame").unwrap();
        assert!(stored.is_some());
    }

    #[test]
    fn key_c_clears_board_and_slot() {
        let mut app = app();
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.world_mut().resource_mut::<PendingClicks>().push_back(Vec2::new(400.0, 100.0));
        app.update();
        assert_eq!(app.world().resource::<SimulationRes>().state().balls.len(), 1);

        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyC);
        app.update();
        assert!(app.world().resource::<SimulationRes>().state().balls.is_empty());
        assert_eq!(app.world().resource::<StorageRes>().read("seesawGame").unwrap(), None);
        assert!(!app.world().resource::<ClearRequested>().0);
    }

    #[test]
    fn pressed_button_clears_board_and_slot() {
        let mut app = app();
        app.insert_resource(StorageRes::new(MemoryStorage::new()));
        app.world_mut().resource_mut::<PendingClicks>().push_back(Vec2::new(400.0, 100.0));
        app.update();
        assert_eq!(app.world().resource::<SimulationRes>().state().balls.len(), 1);
        assert!(app.world().resource::<StorageRes>().read("seesawGame").unwrap().is_some());

        app.world_mut().spawn((Button, ClearButton, Interaction::Pressed));
        app.update();
        assert!(app.world().resource::<SimulationRes>().state().balls.is_empty());
        assert_eq!(app.world().resource::<StorageRes>().read("seesawGame").unwrap(), None);
        assert!(!app.world().resource::<ClearRequested>().0);
    }

    #[test]
    fn clear_runs_before_clicks_queued_in_the_same_pass() {
        let mut app = app();
        app.world_mut().spawn((Button, ClearButton, Interaction::Pressed));
        app.world_mut().resource_mut::<PendingClicks>().push_back(Vec2::new(400.0, 100.0));
        app.update();
        assert_eq!(app.world().resource::<SimulationRes>().state().balls.len(), 1);
        assert!(app.world().resource::<StorageRes>().read("seesawGame").unwrap().is_some());
    }

    #[test]
    fn no_mouse_resource_is_a_no_op() {
        let mut app = app();
        app.update();
        assert!(app.world().resource::<PendingClicks>().is_empty());
    }
}
