//! Deterministic simulation module
//!
//! All lottery-drum logic lives here. This module must be pure and
//! deterministic:
//! - Tick-rate gated to a fixed cadence
//! - Seeded RNG only
//! - Injected clock only (no host timer primitives)
//! - No rendering or platform dependencies

pub mod camera;
pub mod physics;
pub mod scheduler;
pub mod spin;
pub mod state;
pub mod tick;

pub use state::{
    Ball, CameraPhase, CameraTransition, Drum, Level, SimEvent, SimState, SpinSession,
};
pub use tick::{frame_tick, request_stop_external, start_spin};
