//! Drum spin controller
//!
//! Owns the drum's angular velocity and the captive ball's circular motion.
//! Monotonic ramp while spinning, geometric decay after a stop request, with
//! a hard snap to exactly zero so dependents get an unambiguous "fully
//! stopped" signal instead of an asymptotic tail.

use crate::consts::*;
use crate::rotate_about_z;

use super::state::SimState;

/// Begin (or keep) spinning. Velocity ramps from its current value but is
/// floored so a drum that had fully decayed still visibly moves.
pub fn start(state: &mut SimState) {
    state.drum.spinning = true;
    state.drum.angular_velocity = state.drum.angular_velocity.max(SPIN_START_VELOCITY);
}

/// Stop accelerating; the drum then decays to rest over subsequent ticks.
pub fn request_stop(state: &mut SimState) {
    state.drum.spinning = false;
}

/// Advance the drum by one tick.
///
/// The nonzero -> exactly-zero transition while not spinning is the only
/// legal moment to replace an ejected ball with a fresh captive one. The
/// guard is explicit: `angular_velocity == 0 && !ball.captive`.
pub fn tick(state: &mut SimState) {
    let drum = &mut state.drum;
    let was_moving = drum.angular_velocity > 0.0;

    if drum.spinning {
        drum.angular_velocity = (drum.angular_velocity + SPIN_ACCEL).min(MAX_ANGULAR_VELOCITY);
    } else {
        drum.angular_velocity *= SPIN_DECAY;
        if drum.angular_velocity < SPIN_STOP_EPSILON {
            drum.angular_velocity = 0.0;
        }
    }

    drum.rotation_angle =
        (drum.rotation_angle + drum.angular_velocity).rem_euclid(std::f32::consts::TAU);

    // Captive ball rides the drum: same angular step about the drum axis.
    if state.ball.captive {
        let step = state.drum.angular_velocity;
        state.ball.local_pos = rotate_about_z(state.ball.local_pos, step);
        state.ball.world_pos = state.ball.local_pos + DRUM_CENTER;
    }

    let fully_stopped =
        was_moving && state.drum.angular_velocity == 0.0 && !state.drum.spinning;
    if fully_stopped {
        log::info!("drum fully stopped");
        if !state.ball.captive {
            state.replace_ball();
        }
    }
}
