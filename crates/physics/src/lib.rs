// Physics crate: drives the seesaw simulation at a fixed rate from Bevy's Update schedule.
// Wall-clock frame time feeds a TickDriver; each whole tick runs one simulation frame.

use bevy::prelude::*;
use seesaw_core::{GameConfigRes, LandingEvent, SimulationRes, StepSet};
use seesaw_sim::{Readout, TickDriver};

/// Fixed-timestep accumulator for simulation frames.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct FrameClock(pub TickDriver);

/// Derived text values, refreshed after stepping.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CurrentReadout(pub Readout);

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentReadout>()
            .add_systems(Startup, init_frame_clock)
            .add_systems(Update, step_simulation.in_set(StepSet));
    }
}

fn init_frame_clock(mut commands: Commands, cfg: Option<Res<GameConfigRes>>) {
    let tick = cfg.map(|c| c.0.tick.clone()).unwrap_or_default();
    info!(hz = tick.hz, max_substeps = tick.max_substeps, "simulation clock");
    commands.insert_resource(FrameClock(TickDriver::new(tick.hz, tick.max_substeps)));
}

/// System: run the simulation frames owed for this display frame and publish landings.
pub fn step_simulation(
    time: Res<Time>,
    clock: Option<ResMut<FrameClock>>,
    sim: Option<ResMut<SimulationRes>>,
    mut landings: EventWriter<LandingEvent>,
    mut readout: ResMut<CurrentReadout>,
) {
    let (Some(mut clock), Some(mut sim)) = (clock, sim) else {
        return;
    };
    let steps = clock.advance(time.delta_secs_f64());
    for _ in 0..steps {
        let report = sim.step();
        for landing in &report.landings {
            landings.write(LandingEvent {
                id: landing.id,
                weight: landing.weight,
                offset: landing.offset,
                side: landing.side,
            });
        }
        if !report.discarded.is_empty() {
            debug!(count = report.discarded.len(), "balls fell off the canvas");
        }
    }
    let next = sim.readout();
    if readout.0 != next {
        readout.0 = next;
    }
}
