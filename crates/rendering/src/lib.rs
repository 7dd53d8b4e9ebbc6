// Rendering crate: camera, gizmo-drawn scene, HUD readouts and log panel.
// Scene drawing goes through seesaw_sim's Renderer trait; the gizmo replay is compiled out in
// tests / headless builds and idles when no GizmoPlugin is present.

use bevy::prelude::*;
use seesaw_core::PresentSet;

mod palette;
pub use palette::{ball_color, Palette};

mod scene;
pub use scene::{SceneBuilder, Shape};

mod hud;
pub use hud::{ClearButton, LogPanelText, ReadoutText};

pub struct RenderingPlugin;

#[derive(Component)]
pub struct GameCamera;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, GameCamera));
}

#[cfg(not(any(test, feature = "headless")))]
fn draw_scene(
    sim: Option<Res<seesaw_core::SimulationRes>>,
    frame: Option<Res<seesaw_core::CanvasFrame>>,
    mut gizmos: Gizmos,
) {
    let (Some(sim), Some(frame)) = (sim, frame) else { return };
    let mut scene = SceneBuilder::new(*frame);
    sim.render(&mut scene);
    scene::draw_shapes(&mut gizmos, &scene.shapes);
}

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Palette::BG))
            .add_systems(Startup, (setup_camera, hud::spawn_hud))
            .add_systems(
                Update,
                (hud::update_readout_text, hud::update_log_panel).in_set(PresentSet),
            );
        #[cfg(not(any(test, feature = "headless")))]
        app.add_systems(
            Update,
            draw_scene
                .in_set(PresentSet)
                .run_if(resource_exists::<bevy::gizmos::config::GizmoConfigStore>),
        );
    }
}
