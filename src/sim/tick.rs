//! Per-frame driver and action entry points
//!
//! The host render loop calls [`frame_tick`] once per animation frame with a
//! monotonic timestamp. Work is gated to ~60 Hz: the tick body is skipped
//! unless enough time has passed since the last accepted tick, so the
//! effective update rate is independent of the host callback frequency.
//!
//! Tick order: spin -> scheduler deadline drain -> ball physics -> camera.

use crate::consts::TICK_INTERVAL_MS;

use super::state::{Level, SimState};
use super::{camera, physics, scheduler, spin};

/// Action entry point: begin a spin at the given level.
///
/// If the previous ball was ejected but the drum never fully stopped (so the
/// stop-transition replacement never ran), the ball is replaced here: each
/// spin starts with exactly one captive ball.
pub fn start_spin(state: &mut SimState, level: Level, now_ms: f64) {
    if !state.ball.captive {
        state.replace_ball();
    }
    spin::start(state);
    scheduler::arm(state, level, now_ms);
}

/// Action entry point: external stop. Idempotent with the scheduler's stop
/// deadline; whichever runs first cancels the other.
pub fn request_stop_external(state: &mut SimState) {
    scheduler::stop(state);
}

/// Advance the simulation by one frame. Returns true if a tick was accepted,
/// false if the frame arrived inside the rate-gate window.
pub fn frame_tick(state: &mut SimState, now_ms: f64) -> bool {
    if let Some(last) = state.last_tick_ms {
        if now_ms - last < TICK_INTERVAL_MS {
            return false;
        }
    }
    state.last_tick_ms = Some(now_ms);

    spin::tick(state);
    scheduler::drain(state, now_ms);
    physics::tick(state);
    camera::tick(state, now_ms);
    true
}
