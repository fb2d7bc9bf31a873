//! Garapon entry point
//!
//! Runs a scripted headless session on a synthetic clock: one spin per
//! level, logging ejection and result events as they fire. The real host
//! embeds the library and drives `frame_tick` from its render loop instead.

use std::time::{SystemTime, UNIX_EPOCH};

use garapon::sim::{self, CameraPhase, Level, SimEvent, SimState};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = SimState::new(seed);
    log::info!("garapon starting with seed {seed}");

    let mut now = 0.0;
    for level in [Level::One, Level::Two, Level::Three] {
        sim::start_spin(&mut state, level, now);
        run_until_settled(&mut state, &mut now);
    }
}

/// Advance the synthetic clock at 60 Hz until the drum has fully stopped and
/// the camera sequence is back to Idle, printing events along the way.
fn run_until_settled(state: &mut SimState, now: &mut f64) {
    loop {
        *now += 16.0;
        sim::frame_tick(state, *now);
        for event in state.drain_events() {
            match event {
                SimEvent::Ejected { session } => {
                    println!("[{:>8.0}ms] session {session}: ball ejected", now)
                }
                SimEvent::ResultLanded { winner } => {
                    let marker = if winner { "WIN" } else { "LOSE" };
                    println!("[{:>8.0}ms] ball landed: {marker}", now)
                }
                SimEvent::BallSpawned { id } => {
                    println!("[{:>8.0}ms] fresh ball {id} loaded into drum", now)
                }
                SimEvent::BallRemoved { id } => {
                    println!("[{:>8.0}ms] ball {id} cleared from basket", now)
                }
            }
        }

        let settled = !state.drum.spinning
            && state.drum.angular_velocity == 0.0
            && state.ball.captive
            && state.camera.phase == CameraPhase::Idle;
        if settled {
            return;
        }
    }
}
