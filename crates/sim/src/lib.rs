//! Engine-free seesaw simulation.
//!
//! Everything that decides where balls are and how the plank tilts lives here and is
//! stepped through plain functions over an owned [`SimState`]. Drawing, durable storage
//! and pointer input are reached only through the [`Renderer`], [`Storage`] and
//! [`InputSource`] traits so the whole model runs headless under `cargo test`.
//!
//! Canvas coordinates throughout: origin top-left, y grows downward, rotation in radians
//! with positive values tilting the right end of the plank down.

pub mod ball;
pub mod collision;
pub mod follower;
pub mod landing_log;
pub mod plank;
pub mod ports;
pub mod readout;
pub mod rotation;
pub mod simulation;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod step;
pub mod storage;
pub mod tick;
pub mod torque;

pub use ball::{max_spawn_radius, radius_for_weight, Ball, BallColor, BallId, BallPhase};
pub use landing_log::{LandingLog, LogEntry};
pub use plank::{DropZone, Plank};
pub use ports::{render_frame, InputSource, Renderer};
pub use readout::Readout;
pub use simulation::Simulation;
pub use snapshot::{BallRecord, PlankRecord, Snapshot};
pub use spawner::Spawner;
pub use state::SimState;
pub use step::{step_frame, FrameReport, Landing, Side};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use tick::TickDriver;
pub use torque::TorqueTally;

pub use glam::Vec2;
