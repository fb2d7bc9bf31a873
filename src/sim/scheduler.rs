//! Ejection scheduler
//!
//! At spin start this draws the session outcome (a level-dependent Bernoulli)
//! and two randomized deadlines: when the ball is ejected and when the drum is
//! forced to stop. Deadlines are plain timestamps drained each tick against
//! the injected clock rather than host timer primitives, which makes them
//! deterministic, cancellable and testable.
//!
//! Arming a new spin replaces the whole session, so deadlines left over from
//! a superseded session can never fire.
//!
//! The two draws are independent: `stop_delay < eject_delay` is a legal
//! outcome, in which case the drum stops with the ball still captive and no
//! result is ever reported for that session.

use rand::Rng;

use crate::consts::*;

use super::state::{Level, SimEvent, SimState, SpinSession};
use super::{camera, physics, spin};

/// Draw the outcome and both deadlines for a new spin, replacing any live
/// session (and thereby cancelling its pending timers).
pub fn arm(state: &mut SimState, level: Level, now_ms: f64) {
    let is_winner = state.rng.random_bool(level.win_probability());
    let eject_delay = state
        .rng
        .random_range(EJECT_DELAY_MIN_MS..EJECT_DELAY_MAX_MS);
    let stop_delay = state.rng.random_range(STOP_DELAY_MIN_MS..STOP_DELAY_MAX_MS);

    let id = state.next_session_id();
    state.session = Some(SpinSession {
        id,
        level,
        is_winner,
        eject_deadline: Some(now_ms + eject_delay),
        stop_deadline: Some(now_ms + stop_delay),
        ejected: false,
    });
    log::info!(
        "session {id} armed: level {level:?}, eject in {eject_delay:.0}ms, stop in {stop_delay:.0}ms"
    );
}

/// Fire any due deadlines. Called once per accepted tick, before physics.
pub fn drain(state: &mut SimState, now_ms: f64) {
    let Some(session) = state.session else {
        return;
    };

    if session.eject_deadline.is_some_and(|t| now_ms >= t) {
        if let Some(s) = state.session.as_mut() {
            s.eject_deadline = None;
        }
        if !session.ejected && state.ball.captive {
            if let Some(s) = state.session.as_mut() {
                s.ejected = true;
            }
            physics::release(state, EJECT_DIR, EJECT_SPEED, session.is_winner);
            camera::trigger(state, now_ms);
            state.events.push(SimEvent::Ejected { session: session.id });
        }
    }

    let Some(session) = state.session else {
        return;
    };
    if session.stop_deadline.is_some_and(|t| now_ms >= t) {
        log::info!("session {} stop deadline reached", session.id);
        stop(state);
    }
}

/// Stop the drum and cancel whatever deadlines are still pending. Shared by
/// the stop timer and the external stop action so whichever fires first wins
/// and the other becomes a no-op.
pub fn stop(state: &mut SimState) {
    spin::request_stop(state);
    if let Some(session) = state.session.as_mut() {
        session.eject_deadline = None;
        session.stop_deadline = None;
    }
}
