//! Free-ball physics
//!
//! Once the ball leaves the drum it is a projectile: per-tick gravity, a
//! floor plane and one basket side wall. Each collision only clamps its own
//! axis, so floor and wall can both apply in the same tick in either order.
//!
//! The win/lose result is reported on the *first* floor contact only,
//! latched via `result_shown`.

use glam::Vec3;

use crate::consts::*;

use super::state::{SimEvent, SimState};

/// Release the captive ball through the chute with the session's precomputed
/// outcome attached. Calling this on an already-free ball is a no-op.
pub fn release(state: &mut SimState, dir: Vec3, speed: f32, is_winner: bool) {
    if !state.ball.captive {
        return;
    }
    debug_assert!(BOUNCE > 0.0 && BOUNCE < 1.0);
    debug_assert!(FRICTION > 0.0 && FRICTION < 1.0);

    let ball = &mut state.ball;
    ball.captive = false;
    ball.world_pos = CHUTE_EXIT;
    ball.vel = dir.normalize() * speed;
    ball.is_winner = is_winner;
    log::info!("ball {} ejected (winner: {is_winner})", ball.id);
}

/// Advance the free ball by one tick. No-op while the ball is still captive
/// (the spin controller owns it then).
pub fn tick(state: &mut SimState) {
    if state.ball.captive {
        return;
    }
    let ball = &mut state.ball;

    ball.vel.y -= GRAVITY;
    ball.world_pos += ball.vel;

    // Floor plane
    if ball.world_pos.y <= FLOOR_Y + BALL_RADIUS {
        ball.world_pos.y = FLOOR_Y + BALL_RADIUS;
        ball.vel.y = -ball.vel.y * BOUNCE;
        ball.vel.x *= FRICTION;
        ball.vel.z *= FRICTION;

        if !ball.result_shown {
            ball.result_shown = true;
            let winner = ball.is_winner;
            state.events.push(SimEvent::ResultLanded { winner });
            log::info!("ball landed: {}", if winner { "win" } else { "lose" });
        }
    }

    // Basket side wall, checked only within its bounding extent
    let ball = &mut state.ball;
    let within_height =
        ball.world_pos.y >= WALL_MIN_Y && ball.world_pos.y <= WALL_MAX_Y;
    let within_depth =
        ball.world_pos.z >= WALL_MIN_Z && ball.world_pos.z <= WALL_MAX_Z;
    if within_height && within_depth && ball.world_pos.x + BALL_RADIUS > WALL_INNER_X {
        ball.world_pos.x = WALL_INNER_X - BALL_RADIUS;
        ball.vel.x = -ball.vel.x * BOUNCE;
        ball.vel.y *= FRICTION;
        ball.vel.z *= FRICTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SimState;

    fn released(state: &mut SimState) {
        release(state, EJECT_DIR, EJECT_SPEED, false);
        state.drain_events();
    }

    #[test]
    fn test_release_sets_chute_exit_and_velocity() {
        let mut state = SimState::new(1);
        release(&mut state, EJECT_DIR, EJECT_SPEED, true);
        assert!(!state.ball.captive);
        assert_eq!(state.ball.world_pos, CHUTE_EXIT);
        assert!((state.ball.vel.length() - EJECT_SPEED).abs() < 1e-5);
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball.is_winner);
    }

    #[test]
    fn test_release_twice_is_noop() {
        let mut state = SimState::new(1);
        release(&mut state, EJECT_DIR, EJECT_SPEED, false);
        for _ in 0..10 {
            tick(&mut state);
        }
        let pos = state.ball.world_pos;
        release(&mut state, EJECT_DIR, EJECT_SPEED, true);
        assert_eq!(state.ball.world_pos, pos);
        assert!(!state.ball.is_winner);
    }

    #[test]
    fn test_tick_is_noop_while_captive() {
        let mut state = SimState::new(1);
        let pos = state.ball.world_pos;
        tick(&mut state);
        assert_eq!(state.ball.world_pos, pos);
    }

    #[test]
    fn test_ball_never_rests_below_floor() {
        let mut state = SimState::new(1);
        released(&mut state);
        for _ in 0..5000 {
            tick(&mut state);
            assert!(state.ball.world_pos.y >= FLOOR_Y + BALL_RADIUS - 1e-5);
        }
    }

    /// Track apex heights between floor contacts: each must be strictly
    /// below the previous one (restitution < 1 loses energy every bounce).
    #[test]
    fn test_bounce_apexes_strictly_decrease() {
        let mut state = SimState::new(1);
        // Drop straight down from rest at height H
        release(&mut state, Vec3::new(0.0, -1.0, 0.0), 0.0, false);
        state.ball.world_pos = Vec3::new(1.0, 2.0, 0.0);
        state.drain_events();

        let start_height = state.ball.world_pos.y;
        let mut apexes: Vec<f32> = Vec::new();
        let mut rising = false;
        let mut peak = 0.0f32;

        for _ in 0..20_000 {
            tick(&mut state);
            let vy = state.ball.vel.y;
            if vy > 0.0 {
                rising = true;
                peak = peak.max(state.ball.world_pos.y);
            } else if rising {
                apexes.push(peak);
                rising = false;
                peak = 0.0;
            }
            // Stop before floor jitter produces degenerate micro-apexes.
            if apexes.len() == 4 {
                break;
            }
        }

        assert_eq!(apexes.len(), 4);
        assert!(apexes[0] < start_height);
        for pair in apexes.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_result_fires_exactly_once() {
        let mut state = SimState::new(1);
        release(&mut state, EJECT_DIR, EJECT_SPEED, true);
        state.drain_events();

        let mut landed = 0;
        for _ in 0..20_000 {
            tick(&mut state);
            for ev in state.drain_events() {
                if let SimEvent::ResultLanded { winner } = ev {
                    assert!(winner);
                    landed += 1;
                }
            }
        }
        assert_eq!(landed, 1);
    }

    #[test]
    fn test_wall_clamps_and_reflects_x() {
        let mut state = SimState::new(1);
        released(&mut state);
        // Aim the ball straight at the wall from inside its extent.
        state.ball.world_pos = Vec3::new(WALL_INNER_X - 0.3, 0.5, 0.0);
        state.ball.vel = Vec3::new(0.5, 0.05, 0.01);

        tick(&mut state);
        assert!(state.ball.world_pos.x <= WALL_INNER_X - BALL_RADIUS + 1e-5);
        assert!(state.ball.vel.x < 0.0);
        assert!((state.ball.vel.x + 0.5 * BOUNCE).abs() < 1e-5);
    }

    #[test]
    fn test_wall_ignored_outside_extent() {
        let mut state = SimState::new(1);
        released(&mut state);
        // Same x trajectory but above the wall's height range.
        state.ball.world_pos = Vec3::new(WALL_INNER_X - 0.1, 3.0, 0.0);
        state.ball.vel = Vec3::new(0.5, 0.0, 0.0);

        tick(&mut state);
        assert!(state.ball.world_pos.x + BALL_RADIUS > WALL_INNER_X);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_floor_and_wall_can_apply_same_tick() {
        let mut state = SimState::new(1);
        released(&mut state);
        // Corner case: heading into the wall while on the floor.
        state.ball.world_pos = Vec3::new(WALL_INNER_X - 0.2, FLOOR_Y + BALL_RADIUS, 0.0);
        state.ball.vel = Vec3::new(0.4, -0.2, 0.0);

        tick(&mut state);
        assert_eq!(state.ball.world_pos.y, FLOOR_Y + BALL_RADIUS);
        assert!(state.ball.world_pos.x <= WALL_INNER_X - BALL_RADIUS + 1e-5);
        assert!(state.ball.vel.y > 0.0);
        assert!(state.ball.vel.x < 0.0);
    }
}
