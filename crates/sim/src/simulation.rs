//! Session facade: the one value a front end owns.

use glam::Vec2;
use seesaw_config::GameConfig;
use tracing::{debug, info, warn};

use crate::ball::{max_spawn_radius, BallId};
use crate::landing_log::LandingLog;
use crate::plank::DropZone;
use crate::ports::{render_frame, InputSource, Renderer};
use crate::readout::Readout;
use crate::snapshot::Snapshot;
use crate::spawner::Spawner;
use crate::state::SimState;
use crate::step::{step_frame, FrameReport};
use crate::storage::Storage;

#[derive(Debug, Clone)]
pub struct Simulation {
    cfg: GameConfig,
    state: SimState,
    spawner: Spawner,
    log: LandingLog,
}

impl Simulation {
    pub fn new(cfg: GameConfig, seed: u64) -> Self {
        Self {
            state: SimState::new(&cfg),
            spawner: Spawner::seeded(seed),
            log: LandingLog::new(cfg.log.capacity),
            cfg,
        }
    }

    /// Start from the stored session if there is a readable one, otherwise empty.
    pub fn restore<S: Storage + ?Sized>(cfg: GameConfig, seed: u64, storage: &S) -> Self {
        let mut sim = Self::new(cfg, seed);
        match storage.load_snapshot(&sim.cfg.storage.key) {
            Ok(Some(snapshot)) => {
                snapshot.restore_into(&mut sim.state);
                info!(
                    balls = sim.state.balls.len(),
                    resting = sim.state.resting_count(),
                    "restored saved session"
                );
            }
            Ok(None) => debug!("no saved session"),
            Err(e) => warn!(error = %e, "saved session unreadable; starting empty"),
        }
        sim
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    /// Spawn at a canvas point. Accepted spawns are persisted; rejected clicks touch nothing.
    pub fn handle_click<S: Storage + ?Sized>(&mut self, pos: Vec2, storage: &mut S) -> Option<BallId> {
        let id = self.spawner.try_spawn(&mut self.state, pos, &self.cfg.spawn)?;
        if let Some(ball) = self.state.ball(id) {
            debug!(id = id.0, weight = ball.weight, color = ball.color.name(), x = pos.x, y = pos.y, "spawned ball");
        }
        self.save(storage);
        Some(id)
    }

    /// Drain every pending click from `input`.
    pub fn pump_input<I, S>(&mut self, input: &mut I, storage: &mut S) -> Vec<BallId>
    where
        I: InputSource + ?Sized,
        S: Storage + ?Sized,
    {
        let mut spawned = Vec::new();
        while let Some(pos) = input.next_click() {
            spawned.extend(self.handle_click(pos, storage));
        }
        spawned
    }

    /// Write the current session to storage. Failures are logged, never raised.
    pub fn save<S: Storage + ?Sized>(&self, storage: &mut S) {
        let snapshot = self.snapshot();
        if let Err(e) = storage.save_snapshot(&self.cfg.storage.key, &snapshot) {
            warn!(error = %e, "failed to persist session");
        }
    }

    /// Empty the board, erase the stored session, empty the log and level the plank.
    pub fn clear<S: Storage + ?Sized>(&mut self, storage: &mut S) {
        let removed = self.state.balls.len();
        self.state.clear();
        self.log.clear();
        if let Err(e) = storage.erase(&self.cfg.storage.key) {
            warn!(error = %e, "failed to erase saved session");
        }
        info!(removed, "cleared seesaw");
    }

    /// Advance one simulation frame and log each landing.
    pub fn step(&mut self) -> FrameReport {
        let report = step_frame(&mut self.state, &self.cfg);
        let now = self.sim_time_secs();
        for landing in &report.landings {
            let line = format!(
                "ball #{} ({} kg, {}) landed {} at {:.1} px",
                landing.id.0,
                landing.weight,
                landing.color.name(),
                landing.side.label(),
                landing.offset
            );
            info!(target: "landing", id = landing.id.0, weight = landing.weight, offset = landing.offset, side = landing.side.label());
            self.log.push(now, line);
        }
        report
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let fulcrum = Vec2::new(self.cfg.plank.fulcrum_width, self.cfg.plank.fulcrum_height);
        render_frame(&self.state, fulcrum, renderer);
    }

    pub fn readout(&self) -> Readout {
        Readout::from_state(&self.state)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn log(&self) -> &LandingLog {
        &self.log
    }

    pub fn drop_zone(&self) -> DropZone {
        self.state.plank.drop_zone(max_spawn_radius(&self.cfg.spawn))
    }

    /// Frames stepped so far converted at the configured tick rate.
    pub fn sim_time_secs(&self) -> f64 {
        let hz = if self.cfg.tick.hz > 0.0 { self.cfg.tick.hz as f64 } else { 60.0 };
        self.state.frame as f64 / hz
    }
}
