//! Garapon - lottery drum simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drum spin, ball physics, timers, camera)
//!
//! Rendering, input wiring and scene construction are external collaborators:
//! the host drives [`sim::frame_tick`] once per animation frame, applies the
//! positions/rotations exposed on [`sim::SimState`], and drains presentation
//! events (ball spawned/removed, result landed).

pub mod sim;

pub use sim::{Level, SimEvent, SimState};

use glam::Vec3;

/// Simulation tuning constants
pub mod consts {
    use glam::Vec3;

    /// Minimum elapsed time between accepted ticks (~60 Hz gate)
    pub const TICK_INTERVAL_MS: f64 = 16.0;

    /// Drum center in world space
    pub const DRUM_CENTER: Vec3 = Vec3::new(0.0, 5.0, 0.0);

    /// Spin ramp per tick (rad/tick)
    pub const SPIN_ACCEL: f32 = 0.002;
    /// Angular velocity cap (rad/tick)
    pub const MAX_ANGULAR_VELOCITY: f32 = 0.18;
    /// Geometric decay factor applied per tick after a stop is requested
    pub const SPIN_DECAY: f32 = 0.985;
    /// Below this the velocity snaps to exactly zero
    pub const SPIN_STOP_EPSILON: f32 = 0.0005;
    /// Floor applied when a new spin starts, so motion is always visible
    pub const SPIN_START_VELOCITY: f32 = 0.06;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.12;
    /// Chute exit point where the ball appears on release
    pub const CHUTE_EXIT: Vec3 = Vec3::new(2.8, 4.7, 0.0);
    /// Ejection impulse direction (normalized at release)
    pub const EJECT_DIR: Vec3 = Vec3::new(0.05, -0.35, 0.0);
    /// Ejection speed (units/tick)
    pub const EJECT_SPEED: f32 = 0.22;

    /// Free-fall physics (per tick)
    pub const GRAVITY: f32 = 0.01;
    /// Restitution on floor/wall contact, must stay in (0, 1)
    pub const BOUNCE: f32 = 0.7;
    /// Horizontal damping on contact, must stay in (0, 1)
    pub const FRICTION: f32 = 0.98;

    /// Floor plane height
    pub const FLOOR_Y: f32 = 0.0;

    /// Basket side wall: inner face x, and the bounding extent inside which
    /// the wall check applies at all
    pub const WALL_INNER_X: f32 = 3.75;
    pub const WALL_MIN_Y: f32 = 0.0;
    pub const WALL_MAX_Y: f32 = 1.4;
    pub const WALL_MIN_Z: f32 = -0.5;
    pub const WALL_MAX_Z: f32 = 0.5;

    /// Randomized scheduler delay bounds (ms from arm time)
    pub const EJECT_DELAY_MIN_MS: f64 = 1000.0;
    pub const EJECT_DELAY_MAX_MS: f64 = 4000.0;
    pub const STOP_DELAY_MIN_MS: f64 = 2000.0;
    pub const STOP_DELAY_MAX_MS: f64 = 5000.0;

    /// Camera dolly sequence
    pub const CAMERA_TARGET: Vec3 = Vec3::new(3.2, 1.4, 2.2);
    pub const CAMERA_DEPART_MS: f64 = 1200.0;
    pub const CAMERA_HOLD_MS: f64 = 1500.0;
    pub const CAMERA_RETURN_MS: f64 = 1200.0;
    /// Default camera position while idle (host orbit controls own it then)
    pub const CAMERA_HOME: Vec3 = Vec3::new(4.0, 6.0, 4.0);
}

/// Rotate a vector about the drum axis (z) by `angle` radians
#[inline]
pub fn rotate_about_z(v: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Ease-out cubic: fast start, slow finish. `t` is clamped to [0, 1].
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
