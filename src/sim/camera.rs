//! Camera dolly sequencer
//!
//! Scripted Idle -> Departing -> Holding -> Returning -> Idle transition
//! triggered by the ejection. While a sequence runs the sequencer is the
//! exclusive writer of `SimState::camera_pos`; during Idle the host's orbit
//! controls own it.
//!
//! Returning interpolates back to the origin captured at trigger time, never
//! to the live camera position, so user input during the sequence cannot
//! introduce drift.

use crate::consts::*;
use crate::ease_out_cubic;

use super::state::{CameraPhase, SimState};

/// Start the dolly sequence. A trigger while a sequence is already running
/// is ignored: at most one transition runs at a time.
pub fn trigger(state: &mut SimState, now_ms: f64) {
    if state.camera.phase != CameraPhase::Idle {
        return;
    }
    state.camera.origin = state.camera_pos;
    state.camera.phase = CameraPhase::Departing;
    state.camera.phase_start_ms = now_ms;
    log::debug!("camera departing from {:?}", state.camera.origin);
}

/// Advance the sequence by one frame.
pub fn tick(state: &mut SimState, now_ms: f64) {
    let cam = &mut state.camera;
    let elapsed = now_ms - cam.phase_start_ms;

    match cam.phase {
        CameraPhase::Idle => {}
        CameraPhase::Departing => {
            let t = (elapsed / CAMERA_DEPART_MS) as f32;
            state.camera_pos = cam.origin.lerp(cam.target, ease_out_cubic(t));
            if t >= 1.0 {
                cam.phase = CameraPhase::Holding;
                cam.phase_start_ms = now_ms;
            }
        }
        CameraPhase::Holding => {
            if elapsed >= CAMERA_HOLD_MS {
                cam.phase = CameraPhase::Returning;
                cam.phase_start_ms = now_ms;
            }
        }
        CameraPhase::Returning => {
            let t = (elapsed / CAMERA_RETURN_MS) as f32;
            state.camera_pos = cam.target.lerp(cam.origin, ease_out_cubic(t));
            if t >= 1.0 {
                state.camera_pos = cam.origin;
                cam.phase = CameraPhase::Idle;
            }
        }
    }
}
